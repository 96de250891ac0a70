use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use anyhow::Result;
use crate::config::Config;
use crate::commands::{configure, format};

#[derive(Parser)]
#[command(name = "tfplan")]
#[command(about = "Format Terraform plan output in human-readable format")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[arg(long, value_name = "FILE", env = "TFPLAN_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Print debug diagnostics to stderr")]
    pub debug: bool,

    #[command(flatten)]
    pub format: FormatArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    pub fn execute(self, config: Config) -> Result<()> {
        match self.command {
            Some(Commands::Config(args)) => {
                configure::handle_config_command(config, self.config.as_deref(), args.command)
            }
            None => format::handle_format_command(config, &self.format),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Configuration management
    Config(ConfigArgs),
}

#[derive(Args, Debug, Default)]
pub struct FormatArgs {
    /// Path to Terraform plan JSON file (use - for stdin)
    #[arg(value_name = "FILE")]
    pub file: Option<String>,

    /// Show collapsed view (only resource headers)
    #[arg(short, long)]
    pub collapsed: bool,

    /// Interactive mode - enter a number to expand/collapse resources
    #[arg(short, long)]
    pub interactive: bool,

    /// Output as HTML with expandable sections
    #[arg(long)]
    pub html: bool,

    /// Write the output to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Open the HTML report in the default browser
    #[arg(long, requires = "html")]
    pub open: bool,

    /// Only show resources whose address matches this regex
    #[arg(short, long, value_name = "REGEX")]
    pub filter: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Never page long output
    #[arg(long)]
    pub no_pager: bool,
}

/// Output mode picked from the flags; HTML wins over interactive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Html,
    Interactive,
    Text,
}

impl FormatArgs {
    pub fn mode(&self) -> Mode {
        if self.html {
            Mode::Html
        } else if self.interactive {
            Mode::Interactive
        } else {
            Mode::Text
        }
    }
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: Option<ConfigCommands>,
}

#[derive(Subcommand, Clone, Debug, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Reset configuration to defaults
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}
