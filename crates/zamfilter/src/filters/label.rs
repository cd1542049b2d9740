//! Labels shown on cyclic filter buttons.

use super::FilterDimension;
use serde::Serialize;

/// What a cyclic button displays for its current value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateLabel {
    pub text: &'static str,
    pub title: String,
    pub classes: Vec<&'static str>,
}

struct Wording {
    with: &'static str,
    without: &'static str,
    title_with: &'static str,
    title_without: &'static str,
    colour: &'static str,
}

fn wording(dimension: FilterDimension) -> Option<Wording> {
    let (with, without, title_with, title_without, colour) = match dimension {
        FilterDimension::Objet => ("Avec", "Sans", "avec objet", "sans objet", "blue"),
        FilterDimension::Avis => ("Avec", "Sans", "avec avis", "sans avis", "blue"),
        FilterDimension::Reponse => ("Avec", "Sans", "avec réponse", "sans réponse", "blue"),
        FilterDimension::Modified => ("Avec", "Sans", "modifiés", "non modifiés", "blue"),
        FilterDimension::DossierDeBanc => (
            "Sortis",
            "Vide",
            "qui ont été transférés en-dehors de la corbeille « Dossier de banc »",
            "qui ne sont jamais allés dans la corbeille « Dossier de banc »",
            "danger",
        ),
        _ => return None,
    };
    Some(Wording {
        with,
        without,
        title_with,
        title_without,
        colour,
    })
}

/// The label for a cyclic `dimension` set to `value`, or `None` if the
/// dimension has no button.
pub fn state_label(dimension: FilterDimension, value: &str) -> Option<StateLabel> {
    let wording = wording(dimension)?;
    let label = match value {
        "0" => StateLabel {
            text: wording.without,
            title: format!("Tous les amendements {}", wording.title_without),
            classes: vec!["status", "blue", "selected", "fond50"],
        },
        "1" => StateLabel {
            text: wording.with,
            title: format!("Tous les amendements {}", wording.title_with),
            classes: vec!["status", "selected", wording.colour],
        },
        "2" if dimension == FilterDimension::DossierDeBanc => StateLabel {
            text: "Banc",
            title: "Tous les amendements qui se situent dans la corbeille « Dossier de banc »"
                .to_string(),
            classes: vec!["status", "selected", "success"],
        },
        _ => StateLabel {
            text: "Tous",
            title: "Tous les amendements sans distinction".to_string(),
            classes: vec!["status", "blue"],
        },
    };
    Some(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tri_state_labels() {
        let with = state_label(FilterDimension::Reponse, "1").unwrap();
        assert_eq!(with.text, "Avec");
        assert_eq!(with.title, "Tous les amendements avec réponse");
        assert_eq!(with.classes, vec!["status", "selected", "blue"]);

        let without = state_label(FilterDimension::Reponse, "0").unwrap();
        assert_eq!(without.text, "Sans");
        assert!(without.classes.contains(&"fond50"));

        let all = state_label(FilterDimension::Reponse, "").unwrap();
        assert_eq!(all.text, "Tous");
    }

    #[test]
    fn modified_titles() {
        let label = state_label(FilterDimension::Modified, "0").unwrap();
        assert_eq!(label.title, "Tous les amendements non modifiés");
    }

    #[test]
    fn dossier_de_banc_has_a_bench_label() {
        let texts: Vec<_> = ["0", "1", "2", "3"]
            .iter()
            .map(|v| state_label(FilterDimension::DossierDeBanc, v).unwrap().text)
            .collect();
        assert_eq!(texts, vec!["Vide", "Sortis", "Banc", "Tous"]);

        let sortis = state_label(FilterDimension::DossierDeBanc, "1").unwrap();
        assert!(sortis.classes.contains(&"danger"));
    }

    #[test]
    fn two_is_not_special_for_tri_states() {
        assert_eq!(state_label(FilterDimension::Objet, "2").unwrap().text, "Tous");
    }

    #[test]
    fn non_cyclic_dimensions_have_no_label() {
        assert!(state_label(FilterDimension::Article, "1").is_none());
        assert!(state_label(FilterDimension::Tag, "").is_none());
    }
}
