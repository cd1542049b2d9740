//! # Row Filter Engine
//!
//! The engine holds the rows of one amendment list, the current value of every
//! filter dimension, and one [`HiddenMarkers`] set per row.
//!
//! ## Recomputation
//!
//! Changing a filter evaluates **only that filter's predicate** on every
//! filterable row and sets or clears its marker bit. Markers set by other
//! filters are left alone, so a row becomes visible again only once every
//! dimension that excluded it lets it through. Since each bit depends only on
//! its own filter value, the final visible set does not depend on the order in
//! which filters were changed.
//!
//! ## Derived State
//!
//! After every change the caller can read:
//! - the [`AmendementCount`] (sum of group sizes over visible rows)
//! - whether the abandoned-amendments limit line should show
//! - the `filtered-*` classes for the table element
//! - the label of cyclic buttons
//!
//! The engine knows nothing about URLs beyond restoring from one; writing the
//! address bar is the job of [`crate::api::FilterApi`].

use crate::count::AmendementCount;
use crate::error::{Result, ZamError};
use crate::filters::{
    next_value, passes, passes_tags, state_label, FilterDimension, FilterMode, HiddenMarkers,
    StateLabel,
};
use crate::history::query_param;
use crate::model::{Page, Row, RowKind};
use crate::tags::normalize_selection;
use std::collections::BTreeMap;
use tracing::{debug, warn};
use url::Url;

#[derive(Debug, Clone)]
pub struct FilterEngine {
    page: Page,
    markers: Vec<HiddenMarkers>,
    values: BTreeMap<FilterDimension, String>,
    selected_tags: Vec<String>,
    panel_expanded: bool,
}

impl FilterEngine {
    pub fn new(page: Page) -> Self {
        let markers = vec![HiddenMarkers::empty(); page.rows.len()];
        Self {
            page,
            markers,
            values: BTreeMap::new(),
            selected_tags: Vec::new(),
            panel_expanded: false,
        }
    }

    /// Build an engine and restore the filters found in `url`.
    pub fn restored(page: Page, url: &Url) -> Self {
        let mut engine = Self::new(page);
        engine.restore(url);
        engine
    }

    /// Apply every persisted filter present (and non-empty) in `url`.
    ///
    /// Filters whose control sits in the "more filters" panel open the panel.
    /// Returns the dimensions that were restored.
    pub fn restore(&mut self, url: &Url) -> Vec<FilterDimension> {
        let mut restored = Vec::new();
        for dimension in FilterDimension::persisted() {
            let value = query_param(url, dimension.name());
            if value.is_empty() {
                continue;
            }
            if !in_cycle(dimension, &value) {
                warn!(
                    filter = %dimension,
                    value = %value,
                    "restored value outside the cycle, filter lets every row through"
                );
            }
            self.store(dimension, value);
            self.apply(dimension);
            if dimension.spec().in_more_panel {
                self.panel_expanded = true;
            }
            restored.push(dimension);
        }
        debug!(
            restored = restored.len(),
            visible = self.count().visible,
            "restored filters from url"
        );
        restored
    }

    /// Set a text or raw value. Text is trimmed; an empty value clears the filter.
    ///
    /// Tag selections go through [`FilterEngine::set_tags`].
    pub fn set_value(&mut self, dimension: FilterDimension, value: &str) -> Result<&str> {
        if dimension.mode() == FilterMode::TagSet {
            return Err(ZamError::UnsupportedOperation {
                filter: dimension.name(),
                operation: "text values",
            });
        }
        self.store(dimension, value.trim().to_string());
        self.apply(dimension);
        Ok(self.value(dimension))
    }

    /// Check or uncheck a checkbox filter.
    pub fn set_checked(&mut self, dimension: FilterDimension, checked: bool) -> Result<&str> {
        if dimension.mode() != FilterMode::Boolean {
            return Err(ZamError::UnsupportedOperation {
                filter: dimension.name(),
                operation: "checking",
            });
        }
        self.set_value(dimension, if checked { "1" } else { "" })
    }

    /// Activate a cyclic button, moving its filter to the next value.
    pub fn cycle(&mut self, dimension: FilterDimension) -> Result<&str> {
        let next = next_value(dimension, self.value(dimension))?;
        self.set_value(dimension, next)
    }

    /// Replace the tag selection. Returns the normalized selection.
    pub fn set_tags<I, S>(&mut self, tags: I) -> &[String]
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.selected_tags = normalize_selection(tags);
        self.apply(FilterDimension::Tag);
        &self.selected_tags
    }

    /// Attach `tag` to the rows keyed by `amendement` (their raw
    /// `data-amendement` value), then re-apply the tag filter.
    pub fn add_row_tag(&mut self, amendement: &str, tag: &str) -> Result<usize> {
        self.edit_row_tags(amendement, |row| row.tags.insert(tag))
    }

    /// Detach `tag` from the rows keyed by `amendement`.
    pub fn remove_row_tag(&mut self, amendement: &str, tag: &str) -> Result<usize> {
        self.edit_row_tags(amendement, |row| row.tags.remove(tag))
    }

    fn edit_row_tags(
        &mut self,
        amendement: &str,
        mut edit: impl FnMut(&mut Row) -> bool,
    ) -> Result<usize> {
        let mut found = false;
        let mut changed = 0;
        for row in self
            .page
            .rows
            .iter_mut()
            .filter(|r| r.is_filterable() && r.amendement == amendement)
        {
            found = true;
            if edit(row) {
                changed += 1;
            }
        }
        if !found {
            return Err(ZamError::RowNotFound(amendement.to_string()));
        }
        self.apply(FilterDimension::Tag);
        Ok(changed)
    }

    fn store(&mut self, dimension: FilterDimension, value: String) {
        if value.is_empty() {
            self.values.remove(&dimension);
        } else {
            self.values.insert(dimension, value);
        }
    }

    /// Re-evaluate one dimension's predicate on every filterable row.
    fn apply(&mut self, dimension: FilterDimension) {
        let marker = HiddenMarkers::of(dimension);
        let value = self.values.get(&dimension).map(String::as_str).unwrap_or("");
        let mut hidden = 0usize;
        for (row, markers) in self.page.rows.iter().zip(self.markers.iter_mut()) {
            if !row.is_filterable() {
                continue;
            }
            let keep = match dimension {
                FilterDimension::Tag => passes_tags(&self.selected_tags, row),
                _ => passes(dimension, value, row),
            };
            markers.set(marker, !keep);
            if !keep {
                hidden += 1;
            }
        }
        debug!(filter = %dimension, value, hidden, "applied filter");
    }

    /// The current value of a filter (empty when inactive). For tags, the
    /// selection joined with `|`.
    pub fn value(&self, dimension: FilterDimension) -> &str {
        self.values.get(&dimension).map(String::as_str).unwrap_or("")
    }

    pub fn selected_tags(&self) -> &[String] {
        &self.selected_tags
    }

    /// Whether a filter currently narrows the list.
    pub fn is_active(&self, dimension: FilterDimension) -> bool {
        match dimension {
            FilterDimension::Tag => !self.selected_tags.is_empty(),
            _ => self.values.contains_key(&dimension),
        }
    }

    /// Non-empty persisted filter values, in registry order.
    pub fn active_values(&self) -> impl Iterator<Item = (FilterDimension, &str)> {
        self.values.iter().map(|(d, v)| (*d, v.as_str()))
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn rows(&self) -> impl Iterator<Item = (&Row, HiddenMarkers)> {
        self.page.rows.iter().zip(self.markers.iter().copied())
    }

    pub fn visible_rows(&self) -> impl Iterator<Item = &Row> {
        self.rows()
            .filter(|(row, markers)| row.is_filterable() && markers.is_empty())
            .map(|(row, _)| row)
    }

    fn position(&self, id: &str) -> Result<usize> {
        self.page
            .rows
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| ZamError::RowNotFound(id.to_string()))
    }

    pub fn markers(&self, id: &str) -> Result<HiddenMarkers> {
        Ok(self.markers[self.position(id)?])
    }

    /// Whether the row is shown: filterable and excluded by nothing.
    pub fn is_visible(&self, id: &str) -> Result<bool> {
        let index = self.position(id)?;
        Ok(self.page.rows[index].is_filterable() && self.markers[index].is_empty())
    }

    pub fn count(&self) -> AmendementCount {
        AmendementCount {
            visible: self.visible_rows().map(Row::group_size).sum(),
            initial: self.page.initial_count,
            paginate: self.page.paginate,
        }
    }

    pub fn count_label(&self) -> String {
        self.count().label()
    }

    /// Whether the abandoned-amendments separator shows: only when some
    /// visible row is abandoned. `None` if the page has no separator.
    pub fn limit_line_visible(&self) -> Option<bool> {
        self.page
            .rows
            .iter()
            .any(|r| r.kind == RowKind::LimitLine)
            .then(|| self.visible_rows().any(|r| r.abandoned))
    }

    /// The `filtered-*` classes on the table element.
    pub fn table_classes(&self) -> Vec<&'static str> {
        FilterDimension::ALL
            .into_iter()
            .filter(|d| self.is_active(*d))
            .filter_map(|d| d.spec().table_class)
            .collect()
    }

    /// The label of a cyclic button for the current value.
    pub fn state_label(&self, dimension: FilterDimension) -> Option<StateLabel> {
        state_label(dimension, self.value(dimension))
    }

    pub fn panel_expanded(&self) -> bool {
        self.panel_expanded
    }

    /// Open or close the "more filters" panel. Returns the new state.
    pub fn toggle_panel(&mut self) -> bool {
        self.panel_expanded = !self.panel_expanded;
        self.panel_expanded
    }
}

/// Whether a cyclic filter's value is one its button can reach.
fn in_cycle(dimension: FilterDimension, value: &str) -> bool {
    match dimension.mode() {
        FilterMode::TriState => matches!(value, "0" | "1"),
        FilterMode::QuadState => matches!(value, "-1" | "0" | "1" | "2" | "3"),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{amendement_row, page_of, sample_page};

    fn visible_ids(engine: &FilterEngine) -> Vec<&str> {
        engine.visible_rows().map(|r| r.id.as_str()).collect()
    }

    fn url(query: &str) -> Url {
        Url::parse(&format!("http://zam.test/amendements{}", query)).unwrap()
    }

    #[test]
    fn unfiltered_page_shows_every_filterable_row() {
        let engine = FilterEngine::new(sample_page());
        assert_eq!(visible_ids(&engine), vec!["r1", "r2", "r3", "r4", "r5", "r6"]);
        assert_eq!(engine.count_label(), "10 amendements");
        assert!(engine.table_classes().is_empty());
    }

    #[test]
    fn text_filter_is_trimmed() {
        let mut engine = FilterEngine::new(sample_page());
        assert_eq!(engine.set_value(FilterDimension::Article, "  6 ").unwrap(), "6");
        assert_eq!(visible_ids(&engine), vec!["r2"]);
        assert_eq!(engine.count_label(), "2 amendements (10 au total)");
    }

    #[test]
    fn clearing_a_filter_lifts_only_its_marker() {
        let mut engine = FilterEngine::new(sample_page());
        engine.set_value(FilterDimension::Mission, "culture").unwrap();
        engine.set_value(FilterDimension::Auteur, "martin").unwrap();
        assert_eq!(visible_ids(&engine), vec!["r2"]);
        assert_eq!(
            engine.markers("r4").unwrap(),
            HiddenMarkers::MISSION
        );
        assert_eq!(
            engine.markers("r3").unwrap(),
            HiddenMarkers::MISSION | HiddenMarkers::AUTEUR
        );

        engine.set_value(FilterDimension::Mission, "").unwrap();
        assert_eq!(visible_ids(&engine), vec!["r2", "r4"]);
        assert_eq!(engine.markers("r3").unwrap(), HiddenMarkers::AUTEUR);
    }

    #[test]
    fn non_filterable_rows_never_get_markers() {
        let mut engine = FilterEngine::new(sample_page());
        engine.set_value(FilterDimension::Article, "nothing").unwrap();
        assert!(engine.markers("limit").unwrap().is_empty());
        assert!(!engine.is_visible("limit").unwrap());
    }

    #[test]
    fn nothing_visible_label() {
        let mut engine = FilterEngine::new(sample_page());
        engine.set_value(FilterDimension::Amendement, "999").unwrap();
        assert_eq!(engine.count_label(), "Aucun amendement (10 au total)");
        assert_eq!(engine.limit_line_visible(), Some(false));
    }

    #[test]
    fn paginated_label() {
        let page = page_of(
            vec![amendement_row("a", "1", "1"), amendement_row("b", "2", "2,3")],
            true,
        );
        let mut engine = FilterEngine::new(page);
        engine.set_value(FilterDimension::Article, "2").unwrap();
        assert_eq!(engine.count_label(), "2 amendements sur 3");
        engine.set_value(FilterDimension::Article, "3").unwrap();
        assert_eq!(engine.count_label(), "0 amendement sur 3");
    }

    #[test]
    fn checkbox_filters() {
        let mut engine = FilterEngine::new(sample_page());
        engine.set_checked(FilterDimension::Gouvernemental, true).unwrap();
        assert_eq!(visible_ids(&engine), vec!["r2"]);
        assert_eq!(engine.table_classes(), vec!["filtered-gouvernemental"]);
        engine.set_checked(FilterDimension::Gouvernemental, false).unwrap();
        assert_eq!(visible_ids(&engine).len(), 6);

        assert!(engine.set_checked(FilterDimension::Objet, true).is_err());
    }

    #[test]
    fn tri_state_button_cycles_through_with_without_all() {
        let mut engine = FilterEngine::new(sample_page());

        assert_eq!(engine.cycle(FilterDimension::Objet).unwrap(), "1");
        assert_eq!(visible_ids(&engine), vec!["r1", "r2", "r6"]);
        assert_eq!(engine.state_label(FilterDimension::Objet).unwrap().text, "Avec");

        assert_eq!(engine.cycle(FilterDimension::Objet).unwrap(), "0");
        assert_eq!(visible_ids(&engine), vec!["r3", "r4", "r5"]);
        assert_eq!(engine.state_label(FilterDimension::Objet).unwrap().text, "Sans");

        assert_eq!(engine.cycle(FilterDimension::Objet).unwrap(), "");
        assert_eq!(visible_ids(&engine).len(), 6);
        assert_eq!(engine.state_label(FilterDimension::Objet).unwrap().text, "Tous");
    }

    #[test]
    fn dossier_de_banc_button_cycles_four_positions() {
        let mut engine = FilterEngine::new(sample_page());
        let mut steps = Vec::new();
        for _ in 0..5 {
            let value = engine.cycle(FilterDimension::DossierDeBanc).unwrap().to_string();
            steps.push((value, visible_ids(&engine).len()));
        }
        assert_eq!(
            steps,
            vec![
                ("0".to_string(), 4),
                ("1".to_string(), 1),
                ("2".to_string(), 1),
                ("3".to_string(), 6),
                ("0".to_string(), 4),
            ]
        );
        assert_eq!(
            engine.state_label(FilterDimension::DossierDeBanc).unwrap().text,
            "Vide"
        );
    }

    #[test]
    fn tags_filter_requires_all_selected() {
        let mut engine = FilterEngine::new(sample_page());
        engine.set_tags(["Urgent"]);
        assert_eq!(visible_ids(&engine), vec!["r1", "r2"]);
        engine.set_tags(["urgent", "budget"]);
        assert_eq!(visible_ids(&engine), vec!["r1"]);
        engine.set_tags(Vec::<String>::new());
        assert_eq!(visible_ids(&engine).len(), 6);
        assert!(engine.set_value(FilterDimension::Tag, "urgent").is_err());
    }

    #[test]
    fn tagging_a_row_reapplies_the_tag_filter() {
        let mut engine = FilterEngine::new(sample_page());
        engine.set_tags(["budget"]);
        assert!(!engine.is_visible("r3").unwrap());

        assert_eq!(engine.add_row_tag("4", "Budget").unwrap(), 1);
        assert!(engine.is_visible("r3").unwrap());

        assert_eq!(engine.remove_row_tag("4", "budget").unwrap(), 1);
        assert!(!engine.is_visible("r3").unwrap());

        assert!(matches!(
            engine.add_row_tag("404", "budget"),
            Err(ZamError::RowNotFound(_))
        ));
    }

    #[test]
    fn limit_line_follows_visible_abandoned_rows() {
        let mut engine = FilterEngine::new(sample_page());
        assert_eq!(engine.limit_line_visible(), Some(true));

        engine.set_value(FilterDimension::Mission, "culture").unwrap();
        assert_eq!(engine.limit_line_visible(), Some(false));

        engine.set_value(FilterDimension::Mission, "").unwrap();
        engine.set_value(FilterDimension::Auteur, "petit").unwrap();
        assert_eq!(engine.limit_line_visible(), Some(true));
    }

    #[test]
    fn limit_line_absent_from_page() {
        let page = page_of(vec![amendement_row("a", "1", "1")], false);
        assert_eq!(FilterEngine::new(page).limit_line_visible(), None);
    }

    #[test]
    fn restore_applies_url_filters_and_opens_panel() {
        let engine = FilterEngine::restored(sample_page(), &url("?article=6+b&objet=0"));
        assert_eq!(engine.value(FilterDimension::Article), "6 b");
        assert_eq!(engine.value(FilterDimension::Objet), "0");
        assert_eq!(visible_ids(&engine), vec!["r3"]);
        assert!(engine.panel_expanded());
        assert_eq!(engine.table_classes(), vec!["filtered-objet"]);
    }

    #[test]
    fn restore_of_header_filters_keeps_panel_closed() {
        let mut engine = FilterEngine::new(sample_page());
        let restored = engine.restore(&url("?avis=1&dossierDeBanc=2&unknown=1&mission="));
        assert_eq!(
            restored,
            vec![FilterDimension::Avis, FilterDimension::DossierDeBanc]
        );
        assert!(!engine.panel_expanded());
        assert_eq!(visible_ids(&engine), vec!["r4"]);
    }

    #[test]
    fn restore_ignores_tag_parameter() {
        let engine = FilterEngine::restored(sample_page(), &url("?tag=urgent"));
        assert!(!engine.is_active(FilterDimension::Tag));
        assert_eq!(visible_ids(&engine).len(), 6);
    }

    #[test]
    fn unknown_row_is_an_error() {
        let engine = FilterEngine::new(sample_page());
        assert!(matches!(
            engine.is_visible("nope"),
            Err(ZamError::RowNotFound(_))
        ));
    }

    #[test]
    fn toggle_panel_flips_state() {
        let mut engine = FilterEngine::new(sample_page());
        assert!(engine.toggle_panel());
        assert!(!engine.toggle_panel());
    }
}
