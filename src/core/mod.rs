//! Core data types for character inspection.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`CharacterReport`]: Everything known about one decoded character
//!   (code point, byte offset, UTF-8 bytes, category flags, reference link)
//! - [`Category`]: One classification from the fixed battery applied to
//!   every character (control, digit, letter, ...)
//!
//! Reports are produced by the [`crate::inspect`] module and consumed by the
//! [`crate::render`] presenters; nothing mutates a report after creation.

pub mod category;
pub mod report;

pub use category::Category;
pub use report::CharacterReport;
