//! Core operations implementation
//!
//! This module ties the plan model to the renderers: loading and filtering a
//! plan, choosing a renderer for an output mode, and producing the output.

use crate::cli::Mode;
use crate::config::Config;
use crate::core::data::TerraformPlan;
use crate::core::traits::PlanRenderer;
use crate::utils::error::{AppError, AppResult};
use crate::utils::export::HtmlRenderer;
use crate::utils::input::PlanSource;
use crate::utils::output::TextRenderer;
use regex::Regex;
use tracing::{debug, warn};

/// Settings that shape one formatting run
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub collapsed: bool,
    pub color: bool,
    pub filter: Option<String>,
}

/// Main operations hub for formatting plans
pub struct PlanOperations {
    config: Config,
}

impl PlanOperations {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Read, parse, and filter a plan
    pub fn load_plan(&self, source: &PlanSource, filter: Option<&str>) -> AppResult<TerraformPlan> {
        debug!(source = %source.describe(), "reading plan");
        let mut plan = source.load_plan()?;
        debug!(
            resources = plan.resource_changes.len(),
            outputs = plan.output_changes.len(),
            terraform_version = plan.terraform_version.as_deref().unwrap_or("unknown"),
            "parsed plan"
        );

        for change in &plan.resource_changes {
            if !change.action().is_listed() && change.change.actions.iter().all(|a| a != "no-op") {
                warn!(address = %change.address, actions = ?change.change.actions, "unrecognized action list, skipping");
            }
        }

        if let Some(pattern) = filter {
            apply_filter(&mut plan, pattern)?;
        }
        Ok(plan)
    }

    /// Pick the renderer for a non-interactive mode
    pub fn renderer(&self, mode: Mode, options: &RenderOptions) -> Box<dyn PlanRenderer> {
        match mode {
            Mode::Html => Box::new(HtmlRenderer::new(self.config.html.title.clone())),
            Mode::Text | Mode::Interactive => {
                Box::new(TextRenderer::new(options.collapsed, options.color))
            }
        }
    }

    pub fn render(&self, plan: &TerraformPlan, mode: Mode, options: &RenderOptions) -> AppResult<String> {
        debug!(?mode, collapsed = options.collapsed, color = options.color, "rendering plan");
        self.renderer(mode, options).render(plan)
    }
}

/// Keep only resources whose address matches `pattern`
pub fn apply_filter(plan: &mut TerraformPlan, pattern: &str) -> AppResult<()> {
    let re = Regex::new(pattern)
        .map_err(|e| AppError::InvalidArgument(format!("Invalid filter '{}': {}", pattern, e)))?;
    let before = plan.resource_changes.len();
    plan.retain_matching(&re);
    debug!(pattern, kept = plan.resource_changes.len(), dropped = before - plan.resource_changes.len(), "applied filter");
    Ok(())
}
