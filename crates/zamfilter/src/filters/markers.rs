//! Per-row hidden markers.
//!
//! Each filter dimension owns one bit. Applying a filter only touches its own
//! bit, so a row may be excluded for several reasons at once and stays hidden
//! until every one of them is lifted.

use super::FilterDimension;
use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct HiddenMarkers: u16 {
        const ARTICLE = 1 << 0;
        const MISSION = 1 << 1;
        const AUTEUR = 1 << 2;
        const AMENDEMENT = 1 << 3;
        const GOUVERNEMENTAL = 1 << 4;
        const OBJET = 1 << 5;
        const AVIS = 1 << 6;
        const REPONSE = 1 << 7;
        const TABLE = 1 << 8;
        const EMPTY_TABLE = 1 << 9;
        const MODIFIED = 1 << 10;
        const DOSSIER_DE_BANC = 1 << 11;
        const TAG = 1 << 12;
    }
}

impl HiddenMarkers {
    /// The marker owned by `dimension`.
    pub fn of(dimension: FilterDimension) -> Self {
        Self::from_bits_retain(1 << dimension as u16)
    }

    /// Dimensions currently excluding the row, in registry order.
    pub fn dimensions(self) -> impl Iterator<Item = FilterDimension> {
        FilterDimension::ALL
            .into_iter()
            .filter(move |d| self.contains(Self::of(*d)))
    }

    /// The `hidden-*` CSS classes matching these markers.
    pub fn classes(self) -> Vec<&'static str> {
        self.dimensions().map(|d| d.spec().marker_class).collect()
    }
}
