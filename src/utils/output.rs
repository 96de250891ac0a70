use colored::*;
use crate::core::data::{Action, Change, PlanSummary, ResourceChange, TerraformPlan};
use crate::core::diff::{
    attribute_changes, format_value, AttributeChange, SENSITIVE_PLACEHOLDER, UNKNOWN_PLACEHOLDER,
};
use crate::core::traits::PlanRenderer;
use crate::utils::error::AppResult;
use serde_json::Value;
use std::fmt::Write;

pub const NO_CHANGES_MESSAGE: &str = "No changes. Your infrastructure matches the configuration.";

pub struct OutputStyle;

impl OutputStyle {
    pub fn header(text: &str) -> ColoredString {
        text.bold()
    }

    pub fn key(text: &str) -> ColoredString {
        text.bright_white()
    }

    pub fn old_value(text: &str) -> ColoredString {
        text.bright_red()
    }

    pub fn new_value(text: &str) -> ColoredString {
        text.bright_green()
    }

    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn info(text: &str) -> ColoredString {
        text.bright_cyan()
    }

    pub fn muted(text: &str) -> ColoredString {
        text.bright_black()
    }

    /// Color for an action's symbol and label
    pub fn action(text: &str, action: Action) -> ColoredString {
        match action {
            Action::Create => text.bright_green(),
            Action::Update | Action::Replace => text.bright_yellow(),
            Action::Delete => text.bright_red(),
            Action::Read => text.bright_cyan(),
            Action::NoOp | Action::Unknown => text.normal(),
        }
    }

    pub fn separator() -> String {
        "─".repeat(80)
    }
}

pub fn print_success(message: &str) {
    println!("✅ {}", OutputStyle::success(message));
}

/// Applies an `OutputStyle` only when color is enabled
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    enabled: bool,
}

impl Painter {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn paint(&self, text: &str, style: impl Fn(&str) -> ColoredString) -> String {
        if self.enabled {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn action(&self, text: &str, action: Action) -> String {
        self.paint(text, |t| OutputStyle::action(t, action))
    }

    pub fn symbol(&self, action: Action) -> String {
        self.paint(action.symbol(), |t| OutputStyle::action(t, action).bold())
    }
}

/// Write the indented attribute lines for one resource
pub fn write_attribute_lines(out: &mut String, lines: &[AttributeChange], painter: Painter) {
    for line in lines {
        let _ = match line {
            AttributeChange::Modified { key, before, after } => writeln!(
                out,
                "        {}: {} {} {}",
                painter.paint(key, OutputStyle::key),
                painter.paint(before, OutputStyle::old_value),
                painter.paint("=>", OutputStyle::muted),
                painter.paint(after, OutputStyle::new_value)
            ),
            AttributeChange::Added { key, value } => writeln!(
                out,
                "        {}: {}",
                painter.paint(key, OutputStyle::key),
                painter.paint(value, OutputStyle::new_value)
            ),
            AttributeChange::Removed { key, before } => writeln!(
                out,
                "        {}: {} {} {}",
                painter.paint(key, OutputStyle::key),
                painter.paint(before, OutputStyle::old_value),
                painter.paint("=>", OutputStyle::muted),
                painter.paint("null", OutputStyle::old_value)
            ),
        };
    }
}

/// The `{symbol} {address} will be {label}` part of a resource header
pub fn resource_headline(change: &ResourceChange, action: Action, painter: Painter) -> String {
    format!(
        "{} {} will be {}",
        painter.symbol(action),
        painter.paint(&change.address, OutputStyle::header),
        painter.action(action.label(), action)
    )
}

pub fn format_summary(summary: &PlanSummary, painter: Painter) -> String {
    if !summary.has_changes() {
        return format!("{}\n", painter.paint(NO_CHANGES_MESSAGE, OutputStyle::new_value));
    }
    format!(
        "{}: {} to add, {} to change, {} to destroy.\n",
        painter.paint("Plan", OutputStyle::header),
        painter.action(&summary.to_add().to_string(), Action::Create),
        painter.action(&summary.to_change().to_string(), Action::Update),
        painter.action(&summary.to_destroy().to_string(), Action::Delete)
    )
}

fn format_output_changes(outputs: &[(&str, Change)], painter: Painter) -> String {
    let mut out = String::new();
    if outputs.is_empty() {
        return out;
    }
    let _ = writeln!(out, "\n{}", painter.paint("Changes to Outputs:", OutputStyle::header));
    for (name, change) in outputs {
        let action = Action::from_actions(&change.actions);
        let value = match action {
            Action::Delete => "null".to_string(),
            _ => match (&change.after, &change.after_unknown, &change.after_sensitive) {
                (_, Some(Value::Bool(true)), _) => UNKNOWN_PLACEHOLDER.to_string(),
                (_, _, Some(Value::Bool(true))) => SENSITIVE_PLACEHOLDER.to_string(),
                (Some(after), _, _) => format_value(after),
                (None, _, _) => "null".to_string(),
            },
        };
        let _ = writeln!(out, "  {} {} = {}", painter.symbol(action), name, value);
    }
    out
}

/// Plain or colored terminal rendering
#[derive(Debug, Clone)]
pub struct TextRenderer {
    pub collapsed: bool,
    pub color: bool,
}

impl TextRenderer {
    pub fn new(collapsed: bool, color: bool) -> Self {
        Self { collapsed, color }
    }

    fn painter(&self) -> Painter {
        Painter::new(self.color)
    }

    pub fn format_resource_change(&self, change: &ResourceChange, action: Action) -> String {
        let painter = self.painter();
        let indicator = if self.collapsed { "▶" } else { "▼" };
        let mut out = format!(
            "{} {}\n",
            painter.paint(indicator, OutputStyle::muted),
            resource_headline(change, action, painter)
        );

        if !self.collapsed {
            write_attribute_lines(&mut out, &attribute_changes(&change.change, action), painter);
        }
        out.push('\n');
        out
    }
}

impl PlanRenderer for TextRenderer {
    fn render(&self, plan: &TerraformPlan) -> AppResult<String> {
        let painter = self.painter();
        let mut out = String::new();

        for (change, action) in plan.listed_changes() {
            out.push_str(&self.format_resource_change(change, action));
        }

        out.push('\n');
        out.push_str(&painter.paint(&OutputStyle::separator(), OutputStyle::muted));
        out.push_str("\n\n");
        out.push_str(&format_summary(&plan.summary(), painter));
        out.push_str(&format_output_changes(&plan.changed_outputs(), painter));

        Ok(out)
    }
}
