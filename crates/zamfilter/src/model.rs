//! # Page Model
//!
//! The amendment list is rendered server-side; every table row exposes its
//! filterable values as `data-*` attributes. A [`PageSnapshot`] is the raw
//! form of that markup (attribute names without the `data-` prefix), and
//! [`Page`] is the validated, typed form the engine works on.
//!
//! ## Markup Contract
//!
//! A row takes part in filtering when it carries `data-filtre="1"`. Such rows
//! must provide:
//!
//! | Attribute | Format |
//! |-----------|--------|
//! | `article` | free text (`"6"`, `"6 bis"`) |
//! | `amendement` | comma-separated numbers, one per grouped amendment |
//! | `gouvernemental`, `objet`, `avis`, `reponse`, `emptytable`, `modified` | `"0"` or `"1"` |
//! | `dossierdebanc` | `"0"`, `"1"` or `"2"` |
//!
//! and may provide `mission`, `auteur`, `table`, `tag` (pipe-delimited) and
//! `is-abandoned` (`"0"`/`"1"`).
//!
//! Violations are template regressions, not runtime conditions: loading fails
//! with [`ZamError::MissingAttribute`] or [`ZamError::InvalidAttribute`].
//!
//! A row with the `limit-derouleur` class is the layout-only line separating
//! abandoned amendments from the rest.

use crate::error::{Result, ZamError};
use crate::tags::TagSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

pub const LIMIT_LINE_CLASS: &str = "limit-derouleur";

/// A table row as rendered in the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowMarkup {
    pub id: String,
    #[serde(default)]
    pub class: String,
    #[serde(default)]
    pub dataset: BTreeMap<String, String>,
}

impl RowMarkup {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn data(mut self, name: &str, value: impl Into<String>) -> Self {
        self.dataset.insert(name.to_string(), value.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }
}

/// The amendment list page as rendered: rows plus the page-level attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSnapshot {
    /// Total number of amendments on the page before any filtering.
    pub initial_count: u32,
    #[serde(default)]
    pub paginate: bool,
    pub rows: Vec<RowMarkup>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowKind {
    /// Takes part in filtering and counting.
    Filterable,
    /// The abandoned-amendments separator.
    LimitLine,
    /// Anything else; never filtered.
    #[default]
    Static,
}

/// One (possibly grouped) amendment line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub id: String,
    pub kind: RowKind,
    pub article: String,
    pub mission: String,
    pub auteur: String,
    /// The raw `data-amendement` value, used as the row's key by collaborators.
    pub amendement: String,
    pub amendements: Vec<String>,
    pub gouvernemental: bool,
    pub objet: bool,
    pub avis: bool,
    pub reponse: bool,
    pub table: String,
    pub emptytable: bool,
    pub modified: bool,
    pub dossier_de_banc: u8,
    pub abandoned: bool,
    pub tags: TagSet,
}

impl Row {
    pub fn from_markup(markup: &RowMarkup) -> Result<Self> {
        let is_filterable = markup.dataset.get("filtre").map(|v| v.trim()) == Some("1");
        if !is_filterable {
            let kind = if markup.class.split_whitespace().any(|c| c == LIMIT_LINE_CLASS) {
                RowKind::LimitLine
            } else {
                RowKind::Static
            };
            return Ok(Self {
                id: markup.id.clone(),
                kind,
                ..Default::default()
            });
        }

        let attrs = Attributes { markup };
        let amendement = attrs.required("amendement")?.to_string();
        let amendements = amendement
            .split(',')
            .map(|num| num.trim().to_string())
            .collect();

        Ok(Self {
            id: markup.id.clone(),
            kind: RowKind::Filterable,
            article: attrs.required("article")?.trim().to_string(),
            mission: attrs.optional("mission").to_string(),
            auteur: attrs.optional("auteur").to_string(),
            amendement,
            amendements,
            gouvernemental: attrs.flag("gouvernemental")?,
            objet: attrs.flag("objet")?,
            avis: attrs.flag("avis")?,
            reponse: attrs.flag("reponse")?,
            table: attrs.optional("table").to_string(),
            emptytable: attrs.flag("emptytable")?,
            modified: attrs.flag("modified")?,
            dossier_de_banc: attrs.dossier_de_banc()?,
            abandoned: attrs.optional_flag("is-abandoned")?,
            tags: TagSet::parse(attrs.optional("tag")),
        })
    }

    pub fn is_filterable(&self) -> bool {
        self.kind == RowKind::Filterable
    }

    /// Number of amendments this row stands for.
    pub fn group_size(&self) -> u32 {
        self.amendements.len() as u32
    }
}

struct Attributes<'a> {
    markup: &'a RowMarkup,
}

impl<'a> Attributes<'a> {
    fn required(&self, attribute: &'static str) -> Result<&'a str> {
        self.markup
            .dataset
            .get(attribute)
            .map(String::as_str)
            .ok_or_else(|| ZamError::MissingAttribute {
                row: self.markup.id.clone(),
                attribute,
            })
    }

    fn optional(&self, attribute: &str) -> &'a str {
        self.markup
            .dataset
            .get(attribute)
            .map(String::as_str)
            .unwrap_or("")
    }

    fn invalid(&self, attribute: &'static str, value: &str) -> ZamError {
        ZamError::InvalidAttribute {
            row: self.markup.id.clone(),
            attribute,
            value: value.to_string(),
        }
    }

    fn flag(&self, attribute: &'static str) -> Result<bool> {
        let value = self.required(attribute)?;
        match value.trim() {
            "1" => Ok(true),
            "0" => Ok(false),
            _ => Err(self.invalid(attribute, value)),
        }
    }

    fn optional_flag(&self, attribute: &'static str) -> Result<bool> {
        let value = self.optional(attribute);
        match value.trim() {
            "1" => Ok(true),
            "0" | "" => Ok(false),
            _ => Err(self.invalid(attribute, value)),
        }
    }

    fn dossier_de_banc(&self) -> Result<u8> {
        let value = self.required("dossierdebanc")?;
        match value.trim() {
            "0" => Ok(0),
            "1" => Ok(1),
            "2" => Ok(2),
            _ => Err(self.invalid("dossierdebanc", value)),
        }
    }
}

/// The validated amendment list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub rows: Vec<Row>,
    pub initial_count: u32,
    pub paginate: bool,
}

impl Page {
    pub fn from_snapshot(snapshot: &PageSnapshot) -> Result<Self> {
        let rows = snapshot
            .rows
            .iter()
            .map(Row::from_markup)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            rows,
            initial_count: snapshot.initial_count,
            paginate: snapshot.paginate,
        })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: PageSnapshot = serde_json::from_str(json)?;
        Self::from_snapshot(&snapshot)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn has_limit_line(&self) -> bool {
        self.rows.iter().any(|r| r.kind == RowKind::LimitLine)
    }
}
