//! Quick-fixes offered by the inspections.

mod add_property_type;
mod code_action_fixes;

pub use add_property_type::{AddPropertyTypeFix, FixError, FixOutcome};
pub use code_action_fixes::{CodeFixFileChange, CodeFixInfo, CodeFixPosition, CodeFixTextChange};
