//! typereveal: reveal properties declared without a type.
//!
//! The workspace is split the same way a front-end is:
//! - [`syntax`]: the host syntax tree and type-expression parser
//! - [`types`]: the type-query interface and a pre-computed type table
//! - [`inspections`]: the missing-type inspection and its quick-fixes
//!
//! This crate re-exports them and adds the ambient pieces a host needs:
//! configuration loading ([`config`]) and log setup ([`tracing_config`]).

pub use typereveal_common as common;
pub use typereveal_inspections as inspections;
pub use typereveal_syntax as syntax;
pub use typereveal_types as types;

pub mod config;
pub mod tracing_config;

pub use config::{CONFIG_FILE_NAME, TypeRevealConfig, find_config_file, load_config, parse_config};
pub use inspections::{
    AddPropertyTypeFix, FixError, FixOutcome, ProblemDescriptor, PropertyTypeInspection,
};

use syntax::{NodeArena, NodeIndex};
use types::TypeQuery;

/// Run every configured inspection over one file.
pub fn inspect_file(
    config: &TypeRevealConfig,
    arena: &NodeArena,
    root: NodeIndex,
    query: &dyn TypeQuery,
) -> Vec<ProblemDescriptor> {
    PropertyTypeInspection::new(config.property_type.clone()).check_file(arena, root, query)
}
