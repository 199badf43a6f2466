//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs` — client data, replacement table, report/output structs.
//! - `constants.rs` — template filename, fixed replacement rules, console text.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! Changes in the report structs affect `--json` output.

pub mod constants;
pub mod models;
