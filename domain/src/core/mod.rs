//! Core domain concepts shared across all subdomains.
//!
//! - [`language::Language`] - display language (English / Arabic) and its direction
//! - [`text::LocalizedText`] - a field with per-language variants
//! - [`error::DomainError`] - domain-level errors

pub mod error;
pub mod language;
pub mod text;
