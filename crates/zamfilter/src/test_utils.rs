use crate::model::{Page, PageSnapshot, RowMarkup};

/// A filterable row with every required attribute set to its "off" value.
pub fn amendement_row(id: &str, article: &str, amendement: &str) -> RowMarkup {
    RowMarkup::new(id)
        .data("filtre", "1")
        .data("article", article)
        .data("amendement", amendement)
        .data("gouvernemental", "0")
        .data("objet", "0")
        .data("avis", "0")
        .data("reponse", "0")
        .data("emptytable", "0")
        .data("modified", "0")
        .data("dossierdebanc", "0")
}

/// Build a page whose initial count is the sum of the rows' group sizes.
pub fn page_of(rows: Vec<RowMarkup>, paginate: bool) -> Page {
    let initial_count = rows
        .iter()
        .filter(|r| r.dataset.get("filtre").map(String::as_str) == Some("1"))
        .filter_map(|r| r.dataset.get("amendement"))
        .map(|a| a.split(',').count() as u32)
        .sum();
    let snapshot = PageSnapshot {
        initial_count,
        paginate,
        rows,
    };
    Page::from_snapshot(&snapshot).expect("fixture rows are valid")
}

/// A small list covering every dimension: ten amendments over six rows plus
/// the abandoned-amendments separator.
pub fn sample_page() -> Page {
    page_of(
        vec![
            amendement_row("r1", "1", "1")
                .data("mission", "culture")
                .data("auteur", "Mme Dupont")
                .data("objet", "1")
                .data("avis", "1")
                .data("table", "Direction du budget")
                .data("tag", "urgent|budget"),
            amendement_row("r2", "6", "2,3")
                .data("mission", "culture")
                .data("auteur", "M. Martin")
                .data("gouvernemental", "1")
                .data("objet", "1")
                .data("reponse", "1")
                .data("modified", "1")
                .data("tag", "urgent"),
            amendement_row("r3", "6 bis", "4")
                .data("mission", "défense")
                .data("auteur", "Mme Durand")
                .data("emptytable", "1")
                .data("dossierdebanc", "1"),
            amendement_row("r4", "7", "5,6,7")
                .data("mission", "sport")
                .data("auteur", "M. Martin")
                .data("avis", "1")
                .data("table", "Cabinet")
                .data("dossierdebanc", "2")
                .data("tag", "budget"),
            RowMarkup::new("limit").class("limit-derouleur"),
            amendement_row("r5", "8", "8")
                .data("auteur", "Mme Petit")
                .data("is-abandoned", "1"),
            amendement_row("r6", "9", "9,10")
                .data("auteur", "M. Bernard")
                .data("objet", "1")
                .data("is-abandoned", "1"),
        ],
        false,
    )
}
