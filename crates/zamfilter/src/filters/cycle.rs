//! Cyclic filter buttons.
//!
//! Tri-state buttons step through all → with → without → all. The
//! dossier-de-banc button steps through `0 → 1 → 2 → 3 → 0`; a missing,
//! `-1` or unreadable value counts as "before 0".

use super::{FilterDimension, FilterMode};
use crate::error::{Result, ZamError};

/// The value following `current` for a tri-state button.
pub fn next_tri_state(current: &str) -> &'static str {
    match current.trim() {
        "1" => "0",
        "0" => "",
        _ => "1",
    }
}

/// The value following `current` for the four-position button.
pub fn next_quad_state(current: &str) -> &'static str {
    match current.trim().parse::<i64>() {
        Ok(-1) => "0",
        Ok(0) => "1",
        Ok(1) => "2",
        Ok(2) => "3",
        _ => "0",
    }
}

/// The value following `current` for a cyclic `dimension`.
pub fn next_value(dimension: FilterDimension, current: &str) -> Result<&'static str> {
    match dimension.mode() {
        FilterMode::TriState => Ok(next_tri_state(current)),
        FilterMode::QuadState => Ok(next_quad_state(current)),
        _ => Err(ZamError::UnsupportedOperation {
            filter: dimension.name(),
            operation: "cycling",
        }),
    }
}
