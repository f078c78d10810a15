//! Tile rendering.
//!
//! The page renders five tile elements (`input-tile-0` .. `input-tile-4`),
//! each with a single child that shows the letter. The keyboard widget never
//! creates or removes them; it only rewrites their label and border class.
//! [`tile_views`] decides what each tile shows, and a [`TileSurface`] applies
//! the decision, so the decision half stays testable without a DOM.

#[cfg(test)]
#[path = "tiles_test.rs"]
mod tiles_test;

use crate::consts::{EMPTY_BORDER_CLASS, FILLED_BORDER_CLASS, GUESS_LEN, TILE_ID_PREFIX};
use crate::guess::GuessBuffer;

/// Error painting one tile. Never fatal for the other tiles.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TileError {
    /// No element with the tile's id is in the document.
    #[error("tile element #{id} not found")]
    Missing { id: String },
    /// The tile element has no child to hold the letter.
    #[error("tile element #{id} has no label child")]
    NoLabel { id: String },
    /// The DOM rejected a class or text update.
    #[error("tile element #{id}: {message}")]
    Dom { id: String, message: String },
}

/// Element id of tile `index`.
#[must_use]
pub fn tile_id(index: usize) -> String {
    format!("{TILE_ID_PREFIX}{index}")
}

/// What a single tile should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileView {
    pub index: usize,
    pub letter: Option<char>,
}

impl TileView {
    /// Text for the tile's label; empty when the tile has no letter.
    #[must_use]
    pub fn label(&self) -> String {
        self.letter.map(String::from).unwrap_or_default()
    }

    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.letter.is_some()
    }

    /// Border class the tile should carry.
    #[must_use]
    pub fn border_class(&self) -> &'static str {
        if self.is_filled() { FILLED_BORDER_CLASS } else { EMPTY_BORDER_CLASS }
    }

    /// Border class the tile must not carry.
    #[must_use]
    pub fn stale_border_class(&self) -> &'static str {
        if self.is_filled() { EMPTY_BORDER_CLASS } else { FILLED_BORDER_CLASS }
    }

    #[must_use]
    pub fn id(&self) -> String {
        tile_id(self.index)
    }
}

/// Views for all tiles given the current guess.
#[must_use]
pub fn tile_views(guess: &GuessBuffer) -> [TileView; GUESS_LEN] {
    std::array::from_fn(|index| TileView { index, letter: guess.char_at(index) })
}

/// Something tiles can be painted onto.
pub trait TileSurface {
    /// Apply `view` to the tile at `view.index`.
    ///
    /// # Errors
    ///
    /// Returns a [`TileError`] when the tile cannot be found or updated.
    fn paint(&mut self, view: &TileView) -> Result<(), TileError>;
}

/// A tile as last painted onto a [`MemoryTiles`] surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaintedTile {
    pub label: String,
    pub border_class: &'static str,
}

impl Default for PaintedTile {
    fn default() -> Self {
        Self { label: String::new(), border_class: EMPTY_BORDER_CLASS }
    }
}

/// In-memory tile surface, used when rendering without a browser.
///
/// Individual tiles can be marked missing to mimic a partially patched page.
#[derive(Debug, Clone)]
pub struct MemoryTiles {
    slots: Vec<Option<PaintedTile>>,
    paints: usize,
}

impl Default for MemoryTiles {
    fn default() -> Self {
        Self { slots: vec![Some(PaintedTile::default()); GUESS_LEN], paints: 0 }
    }
}

impl MemoryTiles {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A surface where the tiles at `missing` do not exist.
    #[must_use]
    pub fn with_missing(missing: &[usize]) -> Self {
        let mut tiles = Self::default();
        for &index in missing {
            if let Some(slot) = tiles.slots.get_mut(index) {
                *slot = None;
            }
        }
        tiles
    }

    /// The tile at `index`, or `None` if it is missing.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&PaintedTile> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Concatenated labels of all present tiles.
    #[must_use]
    pub fn text(&self) -> String {
        self.slots.iter().flatten().map(|tile| tile.label.as_str()).collect()
    }

    /// Number of successful tile paints so far.
    #[must_use]
    pub fn paint_count(&self) -> usize {
        self.paints
    }
}

impl TileSurface for MemoryTiles {
    fn paint(&mut self, view: &TileView) -> Result<(), TileError> {
        let slot = self
            .slots
            .get_mut(view.index)
            .and_then(Option::as_mut)
            .ok_or_else(|| TileError::Missing { id: view.id() })?;
        slot.label = view.label();
        slot.border_class = view.border_class();
        self.paints += 1;
        Ok(())
    }
}

/// Tiles looked up in a live document.
///
/// Lookups happen on every paint because a server patch may have replaced
/// the tile nodes since the last one.
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone)]
pub struct DocumentTiles {
    document: web_sys::Document,
}

#[cfg(feature = "hydrate")]
impl DocumentTiles {
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }
}

#[cfg(feature = "hydrate")]
impl TileSurface for DocumentTiles {
    fn paint(&mut self, view: &TileView) -> Result<(), TileError> {
        let id = view.id();
        let Some(tile) = self.document.get_element_by_id(&id) else {
            return Err(TileError::Missing { id });
        };
        let Some(label) = tile.first_element_child() else {
            return Err(TileError::NoLabel { id });
        };
        label.set_text_content(Some(&view.label()));

        let classes = tile.class_list();
        classes
            .remove_1(view.stale_border_class())
            .and_then(|()| classes.add_1(view.border_class()))
            .map_err(|err| TileError::Dom { id, message: format!("{err:?}") })
    }
}
