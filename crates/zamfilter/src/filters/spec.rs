//! Filter specifications and registry.
//!
//! This module defines the schema for filter dimensions: how their values
//! behave, where their control lives on the page and how they show up in the
//! URL and on the table element.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One filterable dimension of the amendment list.
///
/// The declaration order matches [`FILTERS`], which is also the order in which
/// filters are restored from the URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterDimension {
    Article,
    Mission,
    Auteur,
    Amendement,
    Gouvernemental,
    Objet,
    Avis,
    Reponse,
    Table,
    #[serde(rename = "emptytable")]
    EmptyTable,
    Modified,
    DossierDeBanc,
    Tag,
}

/// How a filter's value is entered and compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// Text typed into an input (e.g., `article`, `auteur`)
    FreeText,

    /// A checkbox: `"1"` when checked, empty otherwise
    Boolean,

    /// A button cycling through all → with (`"1"`) → without (`"0"`)
    TriState,

    /// A button cycling through `0 → 1 → 2 → 3 → 0`
    QuadState,

    /// A set of tags picked in a multi-select widget, all required
    TagSet,
}

/// Specification for a single filter dimension.
#[derive(Debug, Clone)]
pub struct FilterSpec {
    pub dimension: FilterDimension,

    /// Stable key, used as the URL query parameter when persisted.
    pub name: &'static str,

    pub mode: FilterMode,

    /// CSS class put on rows excluded by this filter.
    pub marker_class: &'static str,

    /// CSS class put on the table while this filter is active.
    pub table_class: Option<&'static str>,

    /// Whether the value is written to the page URL.
    pub persisted: bool,

    /// Whether the control lives in the collapsible "more filters" panel.
    pub in_more_panel: bool,
}

impl FilterSpec {
    const fn new(
        dimension: FilterDimension,
        name: &'static str,
        mode: FilterMode,
        marker_class: &'static str,
    ) -> Self {
        Self {
            dimension,
            name,
            mode,
            marker_class,
            table_class: None,
            persisted: true,
            in_more_panel: false,
        }
    }

    const fn table_class(mut self, class: &'static str) -> Self {
        self.table_class = Some(class);
        self
    }

    const fn in_more_panel(mut self) -> Self {
        self.in_more_panel = true;
        self
    }

    const fn transient(mut self) -> Self {
        self.persisted = false;
        self
    }

    /// The URL query parameter, if this filter is persisted.
    pub fn param(&self) -> Option<&'static str> {
        self.persisted.then_some(self.name)
    }

    /// Whether activating the control steps through a fixed cycle of values.
    pub fn is_cyclic(&self) -> bool {
        matches!(self.mode, FilterMode::TriState | FilterMode::QuadState)
    }
}

use FilterDimension as D;
use FilterMode as M;

/// Registry of all filter dimensions.
///
/// Indexed by `FilterDimension as usize`; adding a dimension means adding an
/// enum variant and an entry here, in the same position.
pub const FILTERS: &[FilterSpec] = &[
    FilterSpec::new(D::Article, "article", M::FreeText, "hidden-article").in_more_panel(),
    FilterSpec::new(D::Mission, "mission", M::FreeText, "hidden-mission").in_more_panel(),
    FilterSpec::new(D::Auteur, "auteur", M::FreeText, "hidden-auteur").in_more_panel(),
    FilterSpec::new(D::Amendement, "amendement", M::FreeText, "hidden-amendement")
        .table_class("filtered-amendement")
        .in_more_panel(),
    FilterSpec::new(
        D::Gouvernemental,
        "gouvernemental",
        M::Boolean,
        "hidden-gouvernemental",
    )
    .table_class("filtered-gouvernemental")
    .in_more_panel(),
    FilterSpec::new(D::Objet, "objet", M::TriState, "hidden-objet").table_class("filtered-objet"),
    FilterSpec::new(D::Avis, "avis", M::TriState, "hidden-avis").table_class("filtered-avis"),
    FilterSpec::new(D::Reponse, "reponse", M::TriState, "hidden-reponse")
        .table_class("filtered-reponse"),
    FilterSpec::new(D::Table, "table", M::FreeText, "hidden-table")
        .table_class("filtered-table")
        .in_more_panel(),
    FilterSpec::new(D::EmptyTable, "emptytable", M::Boolean, "hidden-emptytable")
        .table_class("filtered-emptytable")
        .in_more_panel(),
    FilterSpec::new(D::Modified, "modified", M::TriState, "hidden-modified")
        .table_class("filtered-modified"),
    FilterSpec::new(
        D::DossierDeBanc,
        "dossierDeBanc",
        M::QuadState,
        "hidden-dossierDeBanc",
    )
    .table_class("filtered-dossierDeBanc"),
    FilterSpec::new(D::Tag, "tag", M::TagSet, "hidden-tag").transient(),
];

impl FilterDimension {
    pub const ALL: [FilterDimension; 13] = [
        D::Article,
        D::Mission,
        D::Auteur,
        D::Amendement,
        D::Gouvernemental,
        D::Objet,
        D::Avis,
        D::Reponse,
        D::Table,
        D::EmptyTable,
        D::Modified,
        D::DossierDeBanc,
        D::Tag,
    ];

    pub fn spec(self) -> &'static FilterSpec {
        &FILTERS[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.spec().name
    }

    pub fn mode(self) -> FilterMode {
        self.spec().mode
    }

    /// Look up a dimension by its stable name (case-sensitive, as in URLs).
    pub fn from_name(name: &str) -> Option<Self> {
        FILTERS
            .iter()
            .find(|spec| spec.name == name)
            .map(|spec| spec.dimension)
    }

    /// All dimensions persisted in the URL, in restore order.
    pub fn persisted() -> impl Iterator<Item = FilterDimension> {
        FILTERS
            .iter()
            .filter(|spec| spec.persisted)
            .map(|spec| spec.dimension)
    }
}

impl fmt::Display for FilterDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
