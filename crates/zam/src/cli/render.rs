//! # Rendering
//!
//! Plain functions from engine state to strings. Text output is a fixed-width
//! table followed by the count label, the active filters and the URL; `--json`
//! output serializes the same views.
//!
//! ## Table Layout
//!
//! - `num` ([`COL_NUM`]): the row's amendement number(s)
//! - `article` ([`COL_ARTICLE`])
//! - `mission` ([`COL_MISSION`])
//! - `auteur` ([`COL_AUTEUR`])
//! - tags, unbounded
//!
//! Widths are display widths (`unicode-width`), so accented names line up.

use super::styles;
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use url::Url;
use zamfilter::api::Outcome;
use zamfilter::engine::FilterEngine;
use zamfilter::filters::{HiddenMarkers, StateLabel};
use zamfilter::model::{Row, RowKind};
use zamfilter::selection::{CheckState, GroupActions};

pub const COL_NUM: usize = 10;
pub const COL_ARTICLE: usize = 8;
pub const COL_MISSION: usize = 14;
pub const COL_AUTEUR: usize = 22;
pub const LIMIT_LINE: &str = "──── hors dérouleur ────";

#[derive(Debug, Serialize)]
pub struct RowView<'a> {
    pub id: &'a str,
    pub amendement: &'a str,
    pub article: &'a str,
    pub mission: &'a str,
    pub auteur: &'a str,
    pub tags: &'a [String],
    pub abandoned: bool,
    pub visible: bool,
    /// `hidden-*` classes currently on the row.
    pub hidden: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct FilterView<'a> {
    pub name: &'static str,
    pub value: &'a str,
    pub label: Option<StateLabel>,
}

#[derive(Debug, Serialize)]
pub struct ListView<'a> {
    pub count: String,
    pub filters: Vec<FilterView<'a>>,
    pub tags: &'a [String],
    pub table_classes: Vec<&'static str>,
    pub limit_line_visible: Option<bool>,
    pub panel_expanded: bool,
    pub url: &'a str,
    pub rows: Vec<RowView<'a>>,
}

impl<'a> ListView<'a> {
    pub fn new(engine: &'a FilterEngine, url: &'a Url, all: bool) -> Self {
        let rows = engine
            .rows()
            .filter(|(row, markers)| row.is_filterable() && (all || markers.is_empty()))
            .map(|(row, markers)| RowView {
                id: &row.id,
                amendement: &row.amendement,
                article: &row.article,
                mission: &row.mission,
                auteur: &row.auteur,
                tags: row.tags.tags(),
                abandoned: row.abandoned,
                visible: markers.is_empty(),
                hidden: markers.classes(),
            })
            .collect();
        let filters = engine
            .active_values()
            .map(|(dimension, value)| FilterView {
                name: dimension.name(),
                value,
                label: engine.state_label(dimension),
            })
            .collect();
        Self {
            count: engine.count_label(),
            filters,
            tags: engine.selected_tags(),
            table_classes: engine.table_classes(),
            limit_line_visible: engine.limit_line_visible(),
            panel_expanded: engine.panel_expanded(),
            url: url.as_str(),
            rows,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SelectionView {
    pub checked: usize,
    pub status: CheckState,
    pub actions: GroupActions,
    pub link: Option<String>,
}

/// Pad or truncate `text` to exactly `width` display columns.
pub fn fit(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width <= width {
        return format!("{}{}", text, " ".repeat(width - text_width));
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    used += 1;
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

fn row_line(row: &Row, markers: HiddenMarkers) -> String {
    let columns = [
        fit(&row.amendement, COL_NUM),
        fit(&row.article, COL_ARTICLE),
        fit(&row.mission, COL_MISSION),
        fit(&row.auteur, COL_AUTEUR),
    ];
    let tags: Vec<String> = row.tags.tags().iter().map(|t| format!("#{}", t)).collect();

    if !markers.is_empty() {
        let plain = format!(
            "{} {} [{}]",
            columns.join(" "),
            tags.join(" "),
            markers.classes().join(" ")
        );
        return styles::muted().apply_to(plain).to_string();
    }

    let [num, article, mission, auteur] = columns;
    let tags: Vec<String> = tags
        .iter()
        .map(|t| styles::tag().apply_to(t).to_string())
        .collect();
    let line = format!(
        "{} {} {} {} {}",
        styles::number().apply_to(num),
        article,
        mission,
        auteur,
        tags.join(" ")
    );
    line.trim_end().to_string()
}

fn filters_line(view: &ListView) -> Option<String> {
    let mut parts: Vec<String> = view
        .filters
        .iter()
        .map(|f| match &f.label {
            Some(label) => format!(
                "{}: {}",
                f.name,
                styles::label(&label.classes).apply_to(label.text)
            ),
            None => format!("{}={}", f.name, f.value),
        })
        .collect();
    if !view.tags.is_empty() {
        parts.push(format!("tags: {}", view.tags.join(", ")));
    }
    (!parts.is_empty()).then(|| format!("Filters: {}", parts.join(" · ")))
}

/// The visible rows in page order, then count, filters and URL.
pub fn list_text(engine: &FilterEngine, url: &Url, all: bool) -> String {
    let view = ListView::new(engine, url, all);
    let show_limit = view.limit_line_visible == Some(true);
    let mut out = String::new();

    for (row, markers) in engine.rows() {
        match row.kind {
            RowKind::LimitLine if show_limit => {
                out.push_str(&styles::separator().apply_to(LIMIT_LINE).to_string());
                out.push('\n');
            }
            RowKind::Filterable if all || markers.is_empty() => {
                out.push_str(&row_line(row, markers));
                out.push('\n');
            }
            _ => {}
        }
    }

    out.push('\n');
    out.push_str(&styles::title().apply_to(&view.count).to_string());
    out.push('\n');
    if let Some(filters) = filters_line(&view) {
        out.push_str(&filters);
        out.push('\n');
    }
    out.push_str(&styles::url().apply_to(view.url).to_string());
    out.push('\n');
    out
}

pub fn list_json(engine: &FilterEngine, url: &Url, all: bool) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&ListView::new(engine, url, all)).map(|s| s + "\n")
}

/// One line describing what an event changed.
pub fn outcome_line(outcome: &Outcome) -> String {
    let name = outcome.dimension.name();
    let mut line = match (&outcome.label, outcome.value.as_str()) {
        (Some(label), _) => format!(
            "{} → {} ({})",
            name,
            styles::label(&label.classes).apply_to(label.text),
            label.title
        ),
        (None, "") => format!("{} cleared", name),
        (None, value) => format!("{} = {}", name, value),
    };
    if !outcome.persisted {
        line.push_str(&styles::muted().apply_to(" (not in URL)").to_string());
    }
    line
}

pub fn outcome_text(outcome: &Outcome, engine: &FilterEngine) -> String {
    format!(
        "{}\n\n{}",
        outcome_line(outcome),
        list_text(engine, &outcome.url, false)
    )
}

#[derive(Serialize)]
struct OutcomeView<'a> {
    outcome: &'a Outcome,
    list: ListView<'a>,
}

pub fn outcome_json(outcome: &Outcome, engine: &FilterEngine) -> serde_json::Result<String> {
    let view = OutcomeView {
        outcome,
        list: ListView::new(engine, &outcome.url, false),
    };
    serde_json::to_string_pretty(&view).map(|s| s + "\n")
}

pub fn selection_text(view: &SelectionView) -> String {
    let status = match view.status {
        CheckState::Unchecked => "none",
        CheckState::Checked => "all",
        CheckState::Indeterminate => "some",
    };
    let mut out = format!("Selected: {} ({})\n", view.checked, status);
    if !view.actions.visible {
        out.push_str("No group actions\n");
        return out;
    }

    let mut actions = vec!["export"];
    if view.actions.batch_edit {
        actions.push("batch edit");
    }
    if view.actions.copy {
        actions.push("copy responses");
    }
    out.push_str(&format!("Actions: {}\n", actions.join(", ")));
    out.push_str(&format!(
        "Nums: {}\n",
        styles::number().apply_to(view.actions.nums.join(" · "))
    ));
    if let Some(link) = &view.link {
        out.push_str(&format!("Link: {}\n", styles::url().apply_to(link)));
    }
    out
}

pub fn selection_json(view: &SelectionView) -> serde_json::Result<String> {
    serde_json::to_string_pretty(view).map(|s| s + "\n")
}
