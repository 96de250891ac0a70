use crate::core::data::{Action, PlanSummary, ResourceChange, TerraformPlan};
use crate::core::diff::{attribute_changes, AttributeChange};
use crate::core::traits::PlanRenderer;
use crate::utils::error::{AppError, AppResult};
use crate::utils::format::{format_datetime, html_escape};
use crate::utils::output::NO_CHANGES_MESSAGE;
use std::fmt::Write;
use std::path::{Path, PathBuf};

const STYLE: &str = r#"
        body { font-family: 'Monaco', 'Menlo', monospace; background: #1e1e1e; color: #d4d4d4; padding: 20px; }
        .meta { color: #808080; margin-bottom: 20px; }
        .resource { margin: 10px 0; }
        .resource-header { cursor: pointer; padding: 8px; border-radius: 4px; background: #2d2d30; }
        .resource-header:hover { background: #3e3e42; }
        .create { color: #4ec9b0; }
        .update { color: #dcdcaa; }
        .destroy { color: #f44747; }
        .replace { color: #dcdcaa; }
        .read { color: #569cd6; }
        .details { margin-left: 20px; padding: 10px; background: #252526; border-radius: 4px; display: none; }
        .attribute { margin: 4px 0; }
        .key { color: #9cdcfe; }
        .value-old { color: #f44747; }
        .value-new { color: #4ec9b0; }
        .arrow { color: #808080; }
        .summary { margin-top: 20px; padding: 15px; background: #2d2d30; border-radius: 4px; border-top: 3px solid #007acc; }
        .expand-icon { display: inline-block; width: 12px; transition: transform 0.2s; }
        .expanded .expand-icon { transform: rotate(90deg); }
"#;

const SCRIPT: &str = r#"
        function toggleResource(id) {
            const details = document.getElementById('details-' + id);
            const header = document.getElementById('header-' + id);
            if (details.style.display === 'none' || details.style.display === '') {
                details.style.display = 'block';
                header.classList.add('expanded');
            } else {
                details.style.display = 'none';
                header.classList.remove('expanded');
            }
        }
"#;

/// Standalone HTML document with click-to-expand resources
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    pub title: String,
}

impl HtmlRenderer {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into() }
    }

    fn write_resource(out: &mut String, index: usize, change: &ResourceChange, action: Action) {
        let _ = write!(
            out,
            r#"    <div class="resource">
        <div class="resource-header {class}" id="header-{index}" onclick="toggleResource({index})">
            <span class="expand-icon">▶</span> {symbol} <strong>{address}</strong> will be {label}
        </div>
        <div class="details" id="details-{index}">
"#,
            class = action.css_class(),
            index = index,
            symbol = html_escape(action.symbol()),
            address = html_escape(&change.address),
            label = action.label(),
        );

        for line in attribute_changes(&change.change, action) {
            Self::write_attribute(out, &line);
        }

        out.push_str("        </div>\n    </div>\n");
    }

    fn write_attribute(out: &mut String, line: &AttributeChange) {
        let _ = match line {
            AttributeChange::Modified { key, before, after } => writeln!(
                out,
                r#"            <div class="attribute">
                <span class="key">{}:</span>
                <span class="value-old">{}</span>
                <span class="arrow">=&gt;</span>
                <span class="value-new">{}</span>
            </div>"#,
                html_escape(key),
                html_escape(before),
                html_escape(after)
            ),
            AttributeChange::Added { key, value } => writeln!(
                out,
                r#"            <div class="attribute">
                <span class="key">{}:</span>
                <span class="value-new">{}</span>
            </div>"#,
                html_escape(key),
                html_escape(value)
            ),
            AttributeChange::Removed { key, before } => writeln!(
                out,
                r#"            <div class="attribute">
                <span class="key">{}:</span>
                <span class="value-old">{}</span>
                <span class="arrow">=&gt;</span>
                <span class="value-old">null</span>
            </div>"#,
                html_escape(key),
                html_escape(before)
            ),
        };
    }

    fn write_summary(out: &mut String, summary: &PlanSummary) {
        out.push_str("    <div class=\"summary\">\n        <h3>Plan Summary</h3>\n");
        if summary.has_changes() {
            let _ = writeln!(
                out,
                r#"        <p><span class="create">{}</span> to add, <span class="update">{}</span> to change, <span class="destroy">{}</span> to destroy.</p>"#,
                summary.to_add(),
                summary.to_change(),
                summary.to_destroy()
            );
        } else {
            let _ = writeln!(out, "        <p>{}</p>", NO_CHANGES_MESSAGE);
        }
        out.push_str("    </div>\n");
    }
}

impl PlanRenderer for HtmlRenderer {
    fn render(&self, plan: &TerraformPlan) -> AppResult<String> {
        let title = html_escape(&self.title);
        let mut out = String::new();

        let _ = write!(
            out,
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <style>{STYLE}    </style>
</head>
<body>
    <h1>{title}</h1>
"#
        );

        let mut meta = format!("Generated {}", format_datetime(&chrono::Local::now()));
        if let Some(version) = &plan.terraform_version {
            meta.push_str(&format!(" · Terraform {}", html_escape(version)));
        }
        let _ = writeln!(out, r#"    <div class="meta">{}</div>"#, meta);

        for (index, (change, action)) in plan.listed_changes().into_iter().enumerate() {
            Self::write_resource(&mut out, index, change, action);
        }

        Self::write_summary(&mut out, &plan.summary());

        let _ = write!(
            out,
            r#"    <script>{SCRIPT}    </script>
</body>
</html>
"#
        );

        Ok(out)
    }
}

/// Write rendered output to `path`, creating parent directories
pub fn write_output(path: &Path, content: &str) -> AppResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| AppError::Io(format!("{}: {}", parent.display(), e)))?;
    }
    std::fs::write(path, content).map_err(|e| AppError::Io(format!("{}: {}", path.display(), e)))
}

/// Location for an HTML report that was not given an explicit output path
pub fn temp_report_path() -> PathBuf {
    std::env::temp_dir().join(format!("tfplan_{}.html", std::process::id()))
}

pub fn open_browser(path: &Path) -> AppResult<()> {
    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .arg("/C")
            .arg("start")
            .arg(path)
            .spawn()
            .map_err(|e| AppError::System(format!("Failed to open browser: {}", e)))?;
    }

    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open")
            .arg(path)
            .spawn()
            .map_err(|e| AppError::System(format!("Failed to open browser: {}", e)))?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open")
            .arg(path)
            .spawn()
            .map_err(|e| AppError::System(format!("Failed to open browser: {}", e)))?;
    }

    Ok(())
}
