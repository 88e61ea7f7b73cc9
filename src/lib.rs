//! Extract fenced code blocks from Markdown documentation.
//!
//! This crate backs the `mdcode` build tool, which copies the contents of
//! every `~~~~cpp` ... `~~~~` region of a document into a source file so the
//! examples in the documentation can be compiled alongside the project.

pub mod cli_types;
pub mod exit_codes;
pub mod extract;
pub mod fence;

pub use crate::extract::{ExtractError, ExtractSummary, extract, extract_blocks, extract_with};
pub use crate::fence::{FenceMarkers, LineKind};
