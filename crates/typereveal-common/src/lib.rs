//! Common types and utilities for the typereveal inspections.
//!
//! This crate provides foundational types used across all typereveal crates:
//! - String interning (`Atom`, `Interner`)
//! - Source spans (`Span`)
//! - Position types for line/offset source locations (`LineMap`, `Position`)
//! - Diagnostic categories and records

// String interning for identifier deduplication
pub mod interner;
pub use interner::{Atom, Interner};

// Span - Source location tracking (byte offsets)
pub mod span;
pub use span::Span;

// Position types for line/offset source locations
pub mod position;
pub use position::{LineMap, Position};

// Recursion limits
pub mod limits;

pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory};
