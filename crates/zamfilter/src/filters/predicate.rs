//! Filter predicates.
//!
//! Each dimension decides, for one row and one filter value, whether the row
//! may stay visible. An empty value never excludes anything.

use super::FilterDimension;
use crate::model::Row;

/// Check whether `row` passes the `dimension` filter set to `value`.
///
/// `value` is expected trimmed. The tag dimension is matched by
/// [`passes_tags`] since its value is a selection, not a string.
pub fn passes(dimension: FilterDimension, value: &str, row: &Row) -> bool {
    if value.is_empty() {
        return true;
    }

    match dimension {
        FilterDimension::Article => article_matches(&row.article, value),
        FilterDimension::Mission => row.mission.to_lowercase().starts_with(&value.to_lowercase()),
        FilterDimension::Auteur => row.auteur.to_lowercase().contains(&value.to_lowercase()),
        FilterDimension::Amendement => row.amendements.iter().any(|num| num == value),
        FilterDimension::Table => row.table.to_lowercase().contains(&value.to_lowercase()),
        FilterDimension::Gouvernemental => flag(row.gouvernemental) == value,
        FilterDimension::EmptyTable => flag(row.emptytable) == value,
        FilterDimension::Objet => tri_state(row.objet, value),
        FilterDimension::Avis => tri_state(row.avis, value),
        FilterDimension::Reponse => tri_state(row.reponse, value),
        FilterDimension::Modified => tri_state(row.modified, value),
        FilterDimension::DossierDeBanc => match value {
            "0" | "1" | "2" => row.dossier_de_banc.to_string() == value,
            _ => true,
        },
        FilterDimension::Tag => passes_tags(&split_selection(value), row),
    }
}

/// Check whether `row` carries every selected tag.
pub fn passes_tags<S: AsRef<str>>(selected: &[S], row: &Row) -> bool {
    row.tags.contains_all(selected)
}

/// Article numbers match exactly, unless the query has a space: `"6 b"` is a
/// prefix of `"6 bis"`.
fn article_matches(article: &str, value: &str) -> bool {
    let article = article.to_lowercase();
    let value = value.to_lowercase();
    if value.contains(' ') {
        article.starts_with(&value)
    } else {
        article.trim() == value
    }
}

fn tri_state(present: bool, value: &str) -> bool {
    match value {
        "0" | "1" => flag(present) == value,
        _ => true,
    }
}

fn flag(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

fn split_selection(value: &str) -> Vec<&str> {
    value.split(crate::tags::TAG_SEPARATOR).collect()
}
