#![allow(dead_code)]

use proptest::prelude::*;
use proptest::sample::{select, subsequence};
use zamfilter::model::{Page, PageSnapshot, RowMarkup};

pub const ARTICLES: &[&str] = &["1", "6", "6 bis", "6 ter", "7"];
pub const MISSIONS: &[&str] = &["culture", "défense", "sport", ""];
pub const AUTEURS: &[&str] = &["Mme Dupont", "M. Martin", "Mme Durand", ""];
pub const TABLES: &[&str] = &["Direction du budget", "Cabinet", ""];
pub const TAGS: &[&str] = &["urgent", "budget", "senat"];

/// Generated attributes of one filterable row.
#[derive(Debug, Clone)]
pub struct RowSpec {
    pub article: &'static str,
    pub mission: &'static str,
    pub auteur: &'static str,
    pub table: &'static str,
    pub nums: Vec<u32>,
    /// gouvernemental, objet, avis, reponse, emptytable, modified, abandoned
    pub flags: [bool; 7],
    pub dossier_de_banc: u8,
    pub tags: Vec<&'static str>,
}

impl RowSpec {
    pub fn markup(&self, index: usize) -> RowMarkup {
        let flag = |b: bool| if b { "1" } else { "0" };
        let nums: Vec<String> = self.nums.iter().map(|n| n.to_string()).collect();
        RowMarkup::new(format!("row-{}", index))
            .data("filtre", "1")
            .data("article", self.article)
            .data("mission", self.mission)
            .data("auteur", self.auteur)
            .data("table", self.table)
            .data("amendement", nums.join(","))
            .data("gouvernemental", flag(self.flags[0]))
            .data("objet", flag(self.flags[1]))
            .data("avis", flag(self.flags[2]))
            .data("reponse", flag(self.flags[3]))
            .data("emptytable", flag(self.flags[4]))
            .data("modified", flag(self.flags[5]))
            .data("is-abandoned", flag(self.flags[6]))
            .data("dossierdebanc", self.dossier_de_banc.to_string())
            .data("tag", self.tags.join("|"))
    }
}

pub fn row_spec() -> impl Strategy<Value = RowSpec> {
    (
        select(ARTICLES),
        select(MISSIONS),
        select(AUTEURS),
        select(TABLES),
        prop::collection::vec(1u32..40, 1..4),
        prop::array::uniform7(any::<bool>()),
        0u8..3,
        subsequence(TAGS, 0..=TAGS.len()),
    )
        .prop_map(
            |(article, mission, auteur, table, nums, flags, dossier_de_banc, tags)| RowSpec {
                article,
                mission,
                auteur,
                table,
                nums,
                flags,
                dossier_de_banc,
                tags,
            },
        )
}

/// A page of generated rows with a limit line in the middle.
pub fn page_of(specs: &[RowSpec]) -> Page {
    let mut rows: Vec<RowMarkup> = specs
        .iter()
        .enumerate()
        .map(|(i, spec)| spec.markup(i))
        .collect();
    rows.insert(rows.len() / 2, RowMarkup::new("limit").class("limit-derouleur"));
    let initial_count = specs.iter().map(|s| s.nums.len() as u32).sum();
    Page::from_snapshot(&PageSnapshot {
        initial_count,
        paginate: false,
        rows,
    })
    .expect("generated rows are valid")
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
