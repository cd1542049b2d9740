//! # Zam Filter Architecture
//!
//! Zamfilter is the **UI-agnostic filtering core** of the Zam amendment list.
//! The list page is rendered server-side; this library takes the rows it
//! rendered, lets the user narrow them along independent dimensions, and keeps
//! that state in the page URL so a filtered list can be reloaded or shared.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  UI Client (the `zam` CLI, a browser front-end, tests)      │
//! │  - Turns controls into FilterEvents, renders Outcomes       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - One event in, one Outcome out                            │
//! │  - Writes the changed filter to the address bar (History)   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Engine (engine.rs)                                         │
//! │  - Rows, filter values and per-row hidden markers           │
//! │  - Count, limit line, table classes                         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Filters (filters/)                                         │
//! │  - Registry of dimensions, predicates, cycles, labels       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Markup Is a Contract
//!
//! Rows arrive as `data-*` attributes ([`model::PageSnapshot`]). A missing or
//! malformed attribute is a template regression and fails loading loudly.
//! The one tolerated failure is the address bar: when history replacement is
//! unsupported, filters keep working and their state is simply not persisted.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade, entry point for UI events
//! - [`engine`]: Row visibility and derived state
//! - [`filters`]: Filter dimensions and their rules
//! - [`model`]: Rows and pages, parsed from markup
//! - [`history`]: Address bar abstraction and query-string helpers
//! - [`count`]: The "N amendements" label
//! - [`tags`]: Row tag sets
//! - [`selection`]: Checkbox selection and group actions
//! - [`guard`]: Duplicate-submission guard
//! - [`config`]: Configuration
//! - [`error`]: Error types

pub mod api;
pub mod config;
pub mod count;
pub mod engine;
pub mod error;
pub mod filters;
pub mod guard;
pub mod history;
pub mod model;
pub mod selection;
pub mod tags;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
