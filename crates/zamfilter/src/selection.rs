//! Checkbox selection for batch actions.
//!
//! Each filterable row has a checkbox; a "select all" box in the header sums
//! them up. Checked rows drive the group-action bar: exporting, batch editing
//! (only for amendments on the same article and mission) and copying
//! responses.

use crate::engine::FilterEngine;
use crate::error::{Result, ZamError};
use crate::history::with_repeated_param;
use crate::model::Row;
use serde::Serialize;
use std::collections::BTreeSet;
use url::Url;

/// State of the "select all" checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckState {
    Unchecked,
    Checked,
    Indeterminate,
}

/// Which group actions are offered for the current selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupActions {
    pub visible: bool,
    pub batch_edit: bool,
    pub copy: bool,
    /// Amendement numbers passed to the action links, in page order.
    pub nums: Vec<String>,
}

impl GroupActions {
    /// `link` with its `nums` parameters replaced by the selection.
    pub fn link(&self, link: &Url) -> Url {
        with_repeated_param(link, "nums", &self.nums)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Selection {
    checked: BTreeSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check or uncheck a row's box.
    pub fn set(&mut self, engine: &FilterEngine, row_id: &str, checked: bool) -> Result<()> {
        let row = engine
            .page()
            .rows
            .iter()
            .find(|r| r.id == row_id && r.is_filterable())
            .ok_or_else(|| ZamError::RowNotFound(row_id.to_string()))?;
        if checked {
            self.checked.insert(row.id.clone());
        } else {
            self.checked.remove(&row.id);
        }
        Ok(())
    }

    pub fn is_checked(&self, row_id: &str) -> bool {
        self.checked.contains(row_id)
    }

    pub fn len(&self) -> usize {
        self.checked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checked.is_empty()
    }

    /// The "select all" box as derived from the individual boxes.
    pub fn status(&self, engine: &FilterEngine) -> CheckState {
        let boxes = engine.page().rows.iter().filter(|r| r.is_filterable()).count();
        match self.checked.len() {
            0 => CheckState::Unchecked,
            n if n == boxes => CheckState::Checked,
            _ => CheckState::Indeterminate,
        }
    }

    /// Click on the "select all" box, which the browser toggled to `checked`.
    ///
    /// An indeterminate box always unchecks. Only visible rows are affected.
    /// Returns the state that was applied.
    pub fn select_all(&mut self, engine: &FilterEngine, checked: bool) -> bool {
        let checked = checked && self.status(engine) != CheckState::Indeterminate;
        for row in engine.visible_rows() {
            if checked {
                self.checked.insert(row.id.clone());
            } else {
                self.checked.remove(&row.id);
            }
        }
        checked
    }

    fn checked_rows<'a>(&'a self, engine: &'a FilterEngine) -> Vec<&'a Row> {
        engine
            .page()
            .rows
            .iter()
            .filter(|r| self.checked.contains(&r.id))
            .collect()
    }

    pub fn group_actions(&self, engine: &FilterEngine) -> GroupActions {
        let rows = self.checked_rows(engine);
        let several = rows.len() >= 2;
        GroupActions {
            visible: !rows.is_empty(),
            batch_edit: several && same_article_and_mission(&rows),
            copy: several,
            nums: rows.iter().map(|r| r.amendement.clone()).collect(),
        }
    }
}

fn same_article_and_mission(rows: &[&Row]) -> bool {
    let Some(first) = rows.first() else {
        return false;
    };
    rows.iter()
        .all(|r| r.article.trim() == first.article.trim() && r.mission == first.mission)
}
