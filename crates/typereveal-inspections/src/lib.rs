//! Missing property type inspection and annotation quick-fixes.
//!
//! This crate provides:
//! - `PropertyTypeInspection` - flags top-level and member properties that
//!   have no explicit type
//! - `AddPropertyTypeFix` - inserts one suggested type into the flagged
//!   declaration
//! - `render_supertype` - text form of a supertype for re-insertion into source
//! - Code fix conversion for editors (`CodeFixInfo`)

pub mod code_actions;
pub mod config;
pub mod inspection;
pub mod problems;
pub mod type_text;

pub use code_actions::{
    AddPropertyTypeFix, CodeFixFileChange, CodeFixInfo, CodeFixPosition, CodeFixTextChange,
    FixError, FixOutcome,
};
pub use config::{InspectionConfig, MessageStyle, Severity};
pub use inspection::{PropertyTypeInspection, suggest_types};
pub use problems::{ProblemDescriptor, ProblemsHolder};
pub use type_text::{render_supertype, render_type_text};
