//! # API Facade
//!
//! The API layer is a **thin facade** over the engine, and the single entry
//! point for UI clients (the CLI, a WebAssembly front-end, tests).
//!
//! ## Role and Responsibilities
//!
//! For every UI event, [`FilterApi::dispatch`]:
//! 1. updates one filter through the [`FilterEngine`]
//! 2. writes the filter's value to the address bar through the [`History`]
//! 3. returns an [`Outcome`] with everything the page must refresh
//!
//! All three happen within one call, so a filter change and its count/URL
//! update are never interleaved with another change.
//!
//! ## What the API Does NOT Do
//!
//! - **Matching logic**: that belongs in `filters/` and `engine.rs`
//! - **Rendering**: outcomes are data, not markup
//!
//! ## Generic Over History
//!
//! `FilterApi<H: History>` works with any address bar:
//! - [`MemoryHistory`](crate::history::MemoryHistory) records replacements
//! - [`FixedLocation`](crate::history::FixedLocation) refuses them, and the
//!   filters keep working without persistence

use crate::engine::FilterEngine;
use crate::error::{Result, ZamError};
use crate::filters::{FilterDimension, StateLabel};
use crate::history::{with_param, History};
use crate::model::Page;
use serde::Serialize;
use tracing::debug;
use url::Url;

/// A user interaction with the filter controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterEvent {
    /// Text typed into a filter input.
    Input {
        dimension: FilterDimension,
        value: String,
    },
    /// A filter checkbox changed.
    Checkbox {
        dimension: FilterDimension,
        checked: bool,
    },
    /// A cyclic button was activated.
    Cycle(FilterDimension),
    /// The tag widget selection changed.
    Tags(Vec<String>),
    /// The tag widget added a tag to an amendment.
    TagAdded { amendement: String, tag: String },
    /// The tag widget removed a tag from an amendment.
    TagRemoved { amendement: String, tag: String },
}

impl FilterEvent {
    pub fn dimension(&self) -> FilterDimension {
        match self {
            FilterEvent::Input { dimension, .. } | FilterEvent::Checkbox { dimension, .. } => {
                *dimension
            }
            FilterEvent::Cycle(dimension) => *dimension,
            FilterEvent::Tags(_) | FilterEvent::TagAdded { .. } | FilterEvent::TagRemoved { .. } => {
                FilterDimension::Tag
            }
        }
    }
}

/// What the page must refresh after an event.
#[derive(Debug, Clone, Serialize)]
pub struct Outcome {
    pub dimension: FilterDimension,
    /// The filter's new value (tags joined with `|`).
    pub value: String,
    pub count_label: String,
    pub limit_line_visible: Option<bool>,
    pub table_classes: Vec<&'static str>,
    /// The cyclic button label, for tri/quad-state filters.
    pub label: Option<StateLabel>,
    /// Whether the address bar now reflects the new value.
    pub persisted: bool,
    pub url: Url,
}

pub struct FilterApi<H: History> {
    engine: FilterEngine,
    history: H,
}

impl<H: History> FilterApi<H> {
    /// Mount on a page, restoring filters from the current location.
    pub fn mount(page: Page, history: H) -> Self {
        let engine = FilterEngine::restored(page, history.location());
        Self { engine, history }
    }

    pub fn engine(&self) -> &FilterEngine {
        &self.engine
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn location(&self) -> &Url {
        self.history.location()
    }

    pub fn dispatch(&mut self, event: FilterEvent) -> Result<Outcome> {
        let dimension = event.dimension();
        match event {
            FilterEvent::Input { value, .. } => {
                self.engine.set_value(dimension, &value)?;
            }
            FilterEvent::Checkbox { checked, .. } => {
                self.engine.set_checked(dimension, checked)?;
            }
            FilterEvent::Cycle(_) => {
                self.engine.cycle(dimension)?;
            }
            FilterEvent::Tags(tags) => {
                self.engine.set_tags(tags);
            }
            FilterEvent::TagAdded { amendement, tag } => {
                self.engine.add_row_tag(&amendement, &tag)?;
            }
            FilterEvent::TagRemoved { amendement, tag } => {
                self.engine.remove_row_tag(&amendement, &tag)?;
            }
        }
        let persisted = self.sync_url(dimension);
        Ok(self.outcome(dimension, persisted))
    }

    /// Set a filter by name: text for free-text filters, `"1"`/empty for
    /// checkboxes. Names follow the URL parameters.
    pub fn set(&mut self, name: &str, value: &str) -> Result<Outcome> {
        let dimension = dimension_by_name(name)?;
        self.dispatch(FilterEvent::Input {
            dimension,
            value: value.to_string(),
        })
    }

    /// Check or uncheck the named checkbox filter.
    pub fn check(&mut self, name: &str, checked: bool) -> Result<Outcome> {
        let dimension = dimension_by_name(name)?;
        self.dispatch(FilterEvent::Checkbox { dimension, checked })
    }

    /// Replace the tag selection.
    pub fn tags<I, S>(&mut self, tags: I) -> Result<Outcome>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dispatch(FilterEvent::Tags(tags.into_iter().map(Into::into).collect()))
    }

    /// Activate the cyclic button of the named filter.
    pub fn cycle(&mut self, name: &str) -> Result<Outcome> {
        let dimension = dimension_by_name(name)?;
        self.dispatch(FilterEvent::Cycle(dimension))
    }

    /// Write one filter's value to the address bar. Returns `false` when the
    /// history refused, or when the filter is not persisted.
    fn sync_url(&mut self, dimension: FilterDimension) -> bool {
        let Some(param) = dimension.spec().param() else {
            return false;
        };
        let url = with_param(
            self.history.location(),
            param,
            self.engine.value(dimension),
        );
        match self.history.replace_state(url) {
            Ok(()) => true,
            Err(err) => {
                debug!(filter = %dimension, %err, "filter state not persisted");
                false
            }
        }
    }

    fn outcome(&self, dimension: FilterDimension, persisted: bool) -> Outcome {
        let value = match dimension {
            FilterDimension::Tag => self.engine.selected_tags().join("|"),
            _ => self.engine.value(dimension).to_string(),
        };
        Outcome {
            dimension,
            value,
            count_label: self.engine.count_label(),
            limit_line_visible: self.engine.limit_line_visible(),
            table_classes: self.engine.table_classes(),
            label: self.engine.state_label(dimension),
            persisted,
            url: self.history.location().clone(),
        }
    }
}

fn dimension_by_name(name: &str) -> Result<FilterDimension> {
    FilterDimension::from_name(name).ok_or_else(|| ZamError::UnknownFilter(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::{FixedLocation, MemoryHistory};
    use crate::test_utils::sample_page;

    fn base() -> Url {
        Url::parse("http://zam.test/lecture/amendements").unwrap()
    }

    #[test]
    fn mount_restores_from_location() {
        let history = MemoryHistory::new(Url::parse("http://zam.test/a?auteur=martin").unwrap());
        let api = FilterApi::mount(sample_page(), history);
        assert_eq!(api.engine().count_label(), "5 amendements (10 au total)");
        assert_eq!(api.history().replacements(), 0);
    }

    #[test]
    fn input_event_updates_engine_and_url() {
        let mut api = FilterApi::mount(sample_page(), MemoryHistory::new(base()));
        let outcome = api
            .dispatch(FilterEvent::Input {
                dimension: FilterDimension::Article,
                value: " 6 b ".to_string(),
            })
            .unwrap();

        assert_eq!(outcome.value, "6 b");
        assert_eq!(outcome.count_label, "1 amendement (10 au total)");
        assert!(outcome.persisted);
        assert_eq!(outcome.url.query(), Some("article=6+b"));
        assert_eq!(api.history().replacements(), 1);
    }

    #[test]
    fn clearing_removes_parameter() {
        let history = MemoryHistory::new(Url::parse("http://zam.test/a?article=6&objet=1").unwrap());
        let mut api = FilterApi::mount(sample_page(), history);
        let outcome = api.set("article", "").unwrap();
        assert_eq!(outcome.url.query(), Some("objet=1"));
    }

    #[test]
    fn cycle_event_reports_label() {
        let mut api = FilterApi::mount(sample_page(), MemoryHistory::new(base()));
        let outcome = api.cycle("dossierDeBanc").unwrap();
        assert_eq!(outcome.value, "0");
        assert_eq!(outcome.label.unwrap().text, "Vide");
        assert_eq!(outcome.url.query(), Some("dossierDeBanc=0"));
        assert_eq!(outcome.table_classes, vec!["filtered-dossierDeBanc"]);
    }

    #[test]
    fn checkbox_event() {
        let mut api = FilterApi::mount(sample_page(), MemoryHistory::new(base()));
        let outcome = api
            .dispatch(FilterEvent::Checkbox {
                dimension: FilterDimension::EmptyTable,
                checked: true,
            })
            .unwrap();
        assert_eq!(outcome.url.query(), Some("emptytable=1"));
        assert_eq!(outcome.count_label, "1 amendement (10 au total)");
    }

    #[test]
    fn tag_events_are_not_persisted() {
        let mut api = FilterApi::mount(sample_page(), MemoryHistory::new(base()));
        let outcome = api
            .dispatch(FilterEvent::Tags(vec!["urgent".into(), "budget".into()]))
            .unwrap();
        assert_eq!(outcome.value, "urgent|budget");
        assert_eq!(outcome.count_label, "1 amendement (10 au total)");
        assert!(!outcome.persisted);
        assert_eq!(outcome.url.query(), None);

        let outcome = api
            .dispatch(FilterEvent::TagAdded {
                amendement: "2,3".into(),
                tag: "budget".into(),
            })
            .unwrap();
        assert_eq!(outcome.count_label, "3 amendements (10 au total)");
    }

    #[test]
    fn unsupported_history_keeps_filtering() {
        let mut api = FilterApi::mount(sample_page(), FixedLocation::new(base()));
        let outcome = api.set("mission", "culture").unwrap();
        assert!(!outcome.persisted);
        assert_eq!(outcome.url, base());
        assert_eq!(outcome.count_label, "3 amendements (10 au total)");
    }

    #[test]
    fn check_by_name() {
        let mut api = FilterApi::mount(sample_page(), MemoryHistory::new(base()));
        let outcome = api.check("gouvernemental", true).unwrap();
        assert_eq!(outcome.value, "1");
        assert_eq!(outcome.count_label, "2 amendements (10 au total)");

        let outcome = api.check("gouvernemental", false).unwrap();
        assert_eq!(outcome.url.query(), None);
        assert!(matches!(
            api.check("objet", true),
            Err(ZamError::UnsupportedOperation { .. })
        ));
    }

    #[test]
    fn tags_by_name_are_normalized() {
        let mut api = FilterApi::mount(sample_page(), MemoryHistory::new(base()));
        let outcome = api.tags(["Budget"]).unwrap();
        assert_eq!(outcome.value, "budget");
        assert_eq!(outcome.count_label, "4 amendements (10 au total)");
    }

    #[test]
    fn unknown_filter_name() {
        let mut api = FilterApi::mount(sample_page(), MemoryHistory::new(base()));
        assert!(matches!(
            api.set("nope", "1"),
            Err(ZamError::UnknownFilter(_))
        ));
        assert!(api.cycle("article").is_err());
    }
}
