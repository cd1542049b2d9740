//! Terminal styles for the zam CLI.
//!
//! Code refers to semantic names; the actual decoration lives here only.
//! `console` drops the escapes on its own when stdout is not a terminal.

use console::Style;

pub fn title() -> Style {
    Style::new().bold()
}

pub fn muted() -> Style {
    Style::new().dim()
}

pub fn number() -> Style {
    Style::new().yellow()
}

pub fn tag() -> Style {
    Style::new().cyan()
}

pub fn separator() -> Style {
    Style::new().red().dim()
}

pub fn url() -> Style {
    Style::new().underlined()
}

pub fn label(classes: &[&str]) -> Style {
    if classes.contains(&"danger") {
        Style::new().red()
    } else if classes.contains(&"success") {
        Style::new().green()
    } else if classes.contains(&"blue") {
        Style::new().blue()
    } else {
        Style::new()
    }
}
