//! # Filter System
//!
//! The amendment list can be narrowed along thirteen independent dimensions.
//! Instead of wiring each control ad-hoc, the filter system provides:
//!
//! - **Specifications**: a registry describing each dimension (URL parameter,
//!   marker class, where its control lives)
//! - **Predicates**: one matching rule per dimension
//! - **Markers**: a bitset per row recording which dimensions exclude it
//! - **Cycles and labels**: the fixed value sequences of the tri-state and
//!   dossier-de-banc buttons, and what those buttons display
//!
//! ## Filter Modes
//!
//! | Mode | Dimensions | Values |
//! |------|------------|--------|
//! | `FreeText` | article, mission, auteur, amendement, table | typed text |
//! | `Boolean` | gouvernemental, emptytable | `"1"` or empty |
//! | `TriState` | objet, avis, reponse, modified | empty → `"1"` → `"0"` → empty |
//! | `QuadState` | dossierDeBanc | `0 → 1 → 2 → 3 → 0` |
//! | `TagSet` | tag | selected tags, all required |
//!
//! Dimensions always combine with AND: a row is visible when no dimension
//! marks it hidden.

mod cycle;
mod label;
mod markers;
mod predicate;
mod spec;

pub use cycle::{next_quad_state, next_tri_state, next_value};
pub use label::{state_label, StateLabel};
pub use markers::HiddenMarkers;
pub use predicate::{passes, passes_tags};
pub use spec::{FilterDimension, FilterMode, FilterSpec, FILTERS};
