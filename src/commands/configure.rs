use crate::cli::ConfigCommands;
use crate::config::Config;
use crate::utils;
use anyhow::Result;
use std::path::Path;

pub fn handle_config_command(
    config: Config,
    custom_path: Option<&Path>,
    command: Option<ConfigCommands>,
) -> Result<()> {
    let path = custom_path
        .map(Path::to_path_buf)
        .unwrap_or_else(Config::config_file_path);

    match command {
        Some(ConfigCommands::Show) => handle_show_command(&config, &path),
        Some(ConfigCommands::Path) => {
            println!("{}", path.display());
            Ok(())
        }
        Some(ConfigCommands::Reset { force }) => handle_reset_command(&path, force),
        None => handle_config_help(&path),
    }
}

fn handle_show_command(config: &Config, path: &Path) -> Result<()> {
    println!("⚙️  tfplan Configuration");
    println!("======================");
    if !path.exists() {
        println!("{}", utils::OutputStyle::muted("(no config file, showing defaults)"));
    }

    println!("General:");
    println!("  Color: {}", config.general.color);
    println!("  Collapsed: {}", config.general.collapsed);
    println!("  Pager: {}", config.general.pager);

    println!("HTML:");
    println!("  Title: {}", config.html.title);
    println!("  Open browser: {}", config.html.open_browser);

    Ok(())
}

fn handle_config_help(path: &Path) -> Result<()> {
    println!("⚙️  Configuration Management");
    println!("==========================");
    println!("Available configuration commands:");
    println!("  tfplan config show     - Show current configuration");
    println!("  tfplan config path     - Print the configuration file location");
    println!("  tfplan config reset    - Reset configuration to defaults");
    println!();
    println!("Configuration file location: {}", path.display());
    Ok(())
}

fn handle_reset_command(path: &Path, force: bool) -> Result<()> {
    if !force
        && !utils::prompt_yes_no(
            "Are you sure you want to reset configuration to defaults? This will overwrite your current settings.",
        )?
    {
        println!("Reset cancelled.");
        return Ok(());
    }

    Config::default().save_to(path)?;
    utils::print_success(&format!("Configuration reset to defaults ({})", path.display()));
    Ok(())
}
