//! Command dispatch

use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::{load_network, misis_network, run_demo, ApplicationError, Summary};
use crate::application::demo::TARGET_HOST;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings, TreeStyle};
use crate::domain::{Collection, Network, Render, ToTermTree};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Render { file, style }) => cmd_render(file.as_deref(), *style),
        Some(Commands::Find { name, file, style }) => cmd_find(name, file.as_deref(), *style),
        Some(Commands::Summary { file }) => cmd_summary(file.as_deref()),
        Some(Commands::Demo) => cmd_demo(),
        Some(Commands::Config { command }) => cmd_config(command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
        None => Err(CliError::Usage(
            "no command given, see --help".to_string(),
        )),
    }
}

/// Load the manifest named on the command line or the configured one.
fn load_inventory(file: Option<&Path>, settings: &Settings) -> CliResult<Network> {
    let path: PathBuf = match file {
        Some(path) => path.to_path_buf(),
        None => settings.inventory.clone().ok_or_else(|| {
            CliError::Usage(
                "no inventory file given and none configured (set `inventory` or NETINV_INVENTORY)"
                    .to_string(),
            )
        })?,
    };
    debug!("inventory: {}", path.display());
    Ok(load_network(&path)?)
}

#[instrument]
fn cmd_render(file: Option<&Path>, style: Option<TreeStyle>) -> CliResult<()> {
    let settings = Settings::load()?;
    let network = load_inventory(file, &settings)?;
    match style.unwrap_or(settings.style) {
        TreeStyle::Ascii => output::info(&network.render()),
        TreeStyle::Unicode => print!("{}", network.to_term_tree()),
    }
    Ok(())
}

#[instrument]
fn cmd_find(name: &str, file: Option<&Path>, style: Option<TreeStyle>) -> CliResult<()> {
    let settings = Settings::load()?;
    let network = load_inventory(file, &settings)?;
    let computer = network
        .find(name)
        .ok_or_else(|| ApplicationError::HostNotFound(name.to_string()))?;
    match style.unwrap_or(settings.style) {
        TreeStyle::Ascii => print!("{}", computer.render("", true)),
        TreeStyle::Unicode => print!("{}", computer.to_term_tree()),
    }
    Ok(())
}

#[instrument]
fn cmd_summary(file: Option<&Path>) -> CliResult<()> {
    let settings = Settings::load()?;
    let network = load_inventory(file, &settings)?;
    output::header(&network);
    output::info(&Summary::of(&network));
    Ok(())
}

#[instrument]
fn cmd_demo() -> CliResult<()> {
    let network = misis_network();
    let report = run_demo(&network, TARGET_HOST)?;

    output::header("=== Network ===");
    output::info(&report.original);
    output::info("");
    output::header(&format!("=== Clone with SSD added to {TARGET_HOST} ==="));
    output::info(&report.modified_clone);
    output::info("");
    output::header("=== Network after modifying the clone ===");
    output::info(&report.original_after);
    output::info("");

    output::action(
        "components",
        &format!(
            "original {}, clone {}",
            report.original_components, report.clone_components
        ),
    );
    if report.is_independent() {
        output::success("clone is independent of the original");
        Ok(())
    } else {
        output::failure("modifying the clone changed the original");
        Err(CliError::CheckFailed(
            "original network changed after modifying its clone".to_string(),
        ))
    }
}

#[instrument]
fn cmd_config(command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load()?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Init { force } => {
            let path = global_config_path().ok_or_else(|| ApplicationError::Config {
                message: "cannot determine config directory".to_string(),
            })?;
            if path.exists() && !force {
                return Err(CliError::Usage(format!(
                    "config already exists: {} (use --force to overwrite)",
                    path.display()
                )));
            }
            write_template(&path)?;
            output::action("Created", &path.display());
        }
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => output::info("<no config directory>"),
        },
    }
    Ok(())
}

fn write_template(path: &Path) -> CliResult<()> {
    use crate::application::IoResultExt;

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).with_path_context("create config dir", dir)?;
    }
    std::fs::write(path, Settings::template()).with_path_context("write config", path)?;
    Ok(())
}
