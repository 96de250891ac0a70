use crate::cli::{FormatArgs, Mode};
use crate::config::Config;
use crate::core::operations::{PlanOperations, RenderOptions};
use crate::utils::error::AppError;
use crate::utils::export::{open_browser, temp_report_path, write_output};
use crate::utils::input::PlanSource;
use crate::utils::interactive::InteractiveSession;
use crate::utils::pagination::{get_terminal_size, paginate_static_content, should_paginate};
use crate::utils::print_success;
use anyhow::{Context, Result};
use std::io::{self, IsTerminal, Write};
use tracing::debug;

/// Colors are used only for a terminal that has not opted out
fn color_enabled(config: &Config, args: &FormatArgs) -> bool {
    config.general.color
        && !args.no_color
        && args.output.is_none()
        && std::env::var_os("NO_COLOR").is_none()
        && io::stdout().is_terminal()
}

pub fn handle_format_command(config: Config, args: &FormatArgs) -> Result<()> {
    let source = PlanSource::from_arg(args.file.as_deref());
    let mode = args.mode();

    if mode == Mode::Interactive && source.is_stdin() {
        return Err(AppError::InvalidArgument(
            "Interactive mode reads commands from stdin, so the plan must come from a file".to_string(),
        )
        .into());
    }

    let options = RenderOptions {
        collapsed: args.collapsed || config.general.collapsed,
        color: color_enabled(&config, args),
        filter: args.filter.clone(),
    };
    let ops = PlanOperations::new(config);

    let plan = ops
        .load_plan(&source, options.filter.as_deref())
        .with_context(|| format!("while loading {}", source.describe()))?;

    match mode {
        Mode::Interactive => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            let clear_screen = stdout.is_terminal();
            InteractiveSession::new(&plan, options.color).run(stdin.lock(), &mut stdout, clear_screen)?;
        }
        Mode::Html => {
            let html = ops.render(&plan, mode, &options)?;
            let open = args.open || ops.config().html.open_browser;
            match (&args.output, open) {
                (Some(path), _) => {
                    write_output(path, &html)?;
                    print_success(&format!("HTML report written to {}", path.display()));
                    if open {
                        open_browser(path)?;
                    }
                }
                (None, true) => {
                    let path = temp_report_path();
                    write_output(&path, &html)?;
                    debug!(path = %path.display(), "opening report");
                    open_browser(&path)?;
                }
                (None, false) => {
                    io::stdout().write_all(html.as_bytes())?;
                }
            }
        }
        Mode::Text => {
            let text = ops.render(&plan, mode, &options)?;
            if let Some(path) = &args.output {
                write_output(path, &text)?;
                return Ok(());
            }
            emit_text(&text, ops.config().general.pager && !args.no_pager)?;
        }
    }

    Ok(())
}

fn emit_text(text: &str, pager: bool) -> Result<()> {
    if pager && io::stdout().is_terminal() {
        let (rows, _) = get_terminal_size()?;
        if should_paginate(text, rows) {
            debug!(rows, "paging output");
            paginate_static_content(text)?;
            return Ok(());
        }
    }
    io::stdout().write_all(text.as_bytes())?;
    Ok(())
}
