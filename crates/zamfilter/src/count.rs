//! The "N amendements" summary above the list.

use serde::Serialize;
use std::fmt;

/// Visible and initial amendment totals, rendered with French plurals.
///
/// On a paginated list the total is given as "sur N"; otherwise as
/// "(N au total)". When everything is visible only the count is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AmendementCount {
    pub visible: u32,
    pub initial: u32,
    pub paginate: bool,
}

impl AmendementCount {
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AmendementCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            visible,
            initial,
            paginate,
        } = *self;

        if visible == 0 {
            return if paginate {
                write!(f, "0 amendement sur {}", initial)
            } else {
                write!(f, "Aucun amendement ({} au total)", initial)
            };
        }

        let plural = if visible > 1 { "s" } else { "" };
        write!(f, "{} amendement{}", visible, plural)?;
        if visible != initial {
            if paginate {
                write!(f, " sur {}", initial)?;
            } else {
                write!(f, " ({} au total)", initial)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(visible: u32, initial: u32, paginate: bool) -> String {
        AmendementCount {
            visible,
            initial,
            paginate,
        }
        .label()
    }

    #[test]
    fn everything_visible() {
        assert_eq!(label(10, 10, false), "10 amendements");
        assert_eq!(label(10, 10, true), "10 amendements");
        assert_eq!(label(1, 1, false), "1 amendement");
    }

    #[test]
    fn partial_non_paginated() {
        assert_eq!(label(3, 10, false), "3 amendements (10 au total)");
        assert_eq!(label(1, 10, false), "1 amendement (10 au total)");
    }

    #[test]
    fn partial_paginated() {
        assert_eq!(label(3, 10, true), "3 amendements sur 10");
        assert_eq!(label(1, 10, true), "1 amendement sur 10");
    }

    #[test]
    fn nothing_visible() {
        assert_eq!(label(0, 10, false), "Aucun amendement (10 au total)");
        assert_eq!(label(0, 10, true), "0 amendement sur 10");
    }
}
