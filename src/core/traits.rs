//! Core trait definitions for plan rendering
//!
//! Every output mode turns a parsed plan into text through the same seam,
//! so the command layer can pick a renderer without knowing its format.

use crate::core::data::TerraformPlan;
use crate::utils::error::AppResult;

/// Rendering operations for plans
///
/// Implementors produce the complete output for a plan as a string. Writing
/// it to a terminal, pager, or file is left to the caller.
pub trait PlanRenderer {
    /// Render the plan in this renderer's format
    fn render(&self, plan: &TerraformPlan) -> AppResult<String>;
}
