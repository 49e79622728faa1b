//! Source file access for diagnostic excerpts.
//!
//! This crate provides [`SourceFile`] for loading a file and looking up its
//! 1-based lines, tab-aware visual column arithmetic used to align underlines
//! with displayed text, and path helpers for showing files relative to a base
//! directory.

#![warn(missing_docs)]

pub mod columns;
pub mod path;
pub mod source_file;

pub use columns::{count_digits, expand_tabs, visual_column, TAB_WIDTH};
pub use path::{absolutize, relative_to};
pub use source_file::SourceFile;
