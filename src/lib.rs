//! tfplan - format Terraform plan JSON for humans
//!
//! This library provides the plan model, attribute diffing, and the text,
//! interactive, and HTML renderers behind the `tfplan` binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod utils;

// Re-export core types and traits for easier use
pub use crate::core::{
    data::{Action, Change, PlanSummary, ResourceChange, TerraformPlan},
    diff::{attribute_changes, format_value, AttributeChange},
    operations::{PlanOperations, RenderOptions},
    traits::PlanRenderer,
};
pub use utils::export::HtmlRenderer;
pub use utils::output::TextRenderer;

/// Render a plan's JSON text as plain (uncolored) terminal output
pub fn format_plan_json(json: &str, collapsed: bool) -> utils::error::AppResult<String> {
    let plan = utils::input::parse_plan(json, "input")?;
    TextRenderer::new(collapsed, false).render(&plan)
}
