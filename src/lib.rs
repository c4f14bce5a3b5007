//! # string-inspector
//!
//! A library for inspecting the Unicode code points and UTF-8 encoding of a
//! string, character by character.
//!
//! When a string misbehaves (mojibake, lookalike characters, invisible
//! formatting marks, stray combining accents) the raw bytes tell the story.
//! `string-inspector` reports, per character: the Unicode scalar value, the
//! byte offset within the input, the UTF-8 byte sequence, the Unicode
//! category flags that hold, and a link to an external reference page for
//! the code point.
//!
//! ## Features
//!
//! - **Per-character reports**: code point, byte offset, UTF-8 bytes
//! - **Category battery**: thirteen Unicode classifications evaluated from
//!   one fixed ordered list
//! - **ASCII filtering**: printable ASCII skipped by default so the
//!   interesting characters stand out
//! - **Lossy byte inspection**: malformed UTF-8 decodes to U+FFFD reports
//!   instead of failing
//! - **Presenters**: HTML table, plain text, JSON
//!
//! ## Example
//!
//! ```rust
//! use string_inspector::{inspect, Category};
//!
//! // 'a' is printable ASCII and skipped; the euro sign is reported
//! let reports = inspect("a€", false);
//! assert_eq!(reports.len(), 1);
//!
//! let euro = &reports[0];
//! assert_eq!(euro.codepoint, 0x20AC);
//! assert_eq!(euro.byte_offset, 1);
//! assert_eq!(euro.hex_bytes(), "e2 82 ac");
//! assert!(euro.has(Category::Symbol));
//! assert_eq!(
//!     euro.reference_link,
//!     "http://www.fileformat.info/info/unicode/char/20AC/index.htm"
//! );
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Report and category types
//! - [`inspect`]: The inspector itself
//! - [`render`]: HTML and plain text presenters
//! - [`cli`]: Command-line interface implementation
//! - [`web`]: Web server for browser-based inspection

pub mod cli;
pub mod core;
pub mod inspect;
pub mod render;
pub mod web;

// Re-export commonly used items for convenience
pub use crate::core::category::Category;
pub use crate::core::report::CharacterReport;
pub use crate::inspect::{inspect, inspect_bytes};
