//! Service layer containing generation logic and side-effect helpers.
//!
//! ## Service map
//! - `files.rs` — template location, existence checks, load/parse/write.
//! - `replacements.rs` — client field lookup and default resolution.
//! - `substitute.rs` — ordered literal find-and-replace.
//! - `output.rs` — JSON/text output helpers.
//! - `logging.rs` — stderr tracing subscriber.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod files;
pub mod logging;
pub mod output;
pub mod replacements;
pub mod substitute;
