//! Command dispatch

use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::services::RenderMode;
use crate::application::IoResultExt;
use crate::cli::args::{Cli, Commands, ConfigCommands, FormatArg};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, local_config_path, Settings};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

/// Execute the parsed command line.
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let command = match &cli.command {
        Some(command) => command,
        None => {
            return Err(CliError::Usage(
                "no command given, run `navtree --help`".to_string(),
            ))
        }
    };

    if let Commands::Completion { shell } = command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(*shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    let project_dir = resolve_project_dir(cli.project_dir.as_deref())?;
    let settings = Settings::load(Some(&project_dir))?;
    let container = ServiceContainer::new(settings);

    match command {
        Commands::Render {
            file,
            output,
            format,
            nav_only,
            stdout,
        } => {
            let mode = if *nav_only {
                RenderMode::NavOnly
            } else {
                RenderMode::Page
            };
            let target = if *stdout {
                None
            } else {
                output.clone().or_else(|| container.settings.output.clone())
            };
            cmd_render(&container, file, *format, mode, target.as_deref())
        }
        Commands::Tree { file, format } => cmd_tree(&container, file, *format),
        Commands::Config { command } => cmd_config(&container, &project_dir, command),
        Commands::Completion { .. } => Ok(()),
    }
}

fn resolve_project_dir(project_dir: Option<&Path>) -> CliResult<PathBuf> {
    match project_dir {
        Some(dir) => Ok(dir.to_path_buf()),
        None => std::env::current_dir()
            .map_err(|e| CliError::from(InfraError::io("resolve current directory", e))),
    }
}

#[instrument(level = "debug", skip(container))]
fn cmd_render(
    container: &ServiceContainer,
    file: &Path,
    format: Option<FormatArg>,
    mode: RenderMode,
    target: Option<&Path>,
) -> CliResult<()> {
    let ctx = container.nav.load(file, format.map(Into::into))?;
    if ctx.entry_count() == 0 {
        output::warning(&format!("no navigation entries in {}", file.display()));
    }
    let markup = container.nav.render(&ctx, mode);

    match target {
        Some(path) => {
            container.nav.write(path, &markup)?;
            output::action(
                "Rendered",
                &format!("{} entries -> {}", ctx.entry_count(), path.display()),
            );
        }
        None => output::info(markup.trim_end()),
    }
    Ok(())
}

#[instrument(level = "debug", skip(container))]
fn cmd_tree(container: &ServiceContainer, file: &Path, format: Option<FormatArg>) -> CliResult<()> {
    let ctx = container.nav.load(file, format.map(Into::into))?;
    output::info(&container.nav.outline(file, &ctx));
    Ok(())
}

fn config_target(project_dir: &Path, global: bool) -> CliResult<PathBuf> {
    if global {
        global_config_path().ok_or_else(|| {
            CliError::Usage("cannot determine global config directory".to_string())
        })
    } else {
        Ok(local_config_path(project_dir))
    }
}

fn cmd_config(
    container: &ServiceContainer,
    project_dir: &Path,
    command: &ConfigCommands,
) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            output::info(container.settings.to_toml()?.trim_end());
        }
        ConfigCommands::Path => {
            output::header("Config files (lowest to highest precedence)");
            let describe = |path: &Path| {
                let state = if container.fs.exists(path) {
                    "exists"
                } else {
                    "not found"
                };
                format!("{} ({})", path.display(), state)
            };
            match global_config_path() {
                Some(path) => output::detail(&format!("global: {}", describe(&path))),
                None => output::detail("global: unavailable"),
            }
            output::detail(&format!(
                "local:  {}",
                describe(&local_config_path(project_dir))
            ));
            output::detail("env:    NAVTREE_* variables");
        }
        ConfigCommands::Init { global } => {
            let path = config_target(project_dir, *global)?;
            if container.fs.exists(&path) {
                return Err(CliError::Usage(format!(
                    "config already exists: {}",
                    path.display()
                )));
            }
            debug!("config init: {}", path.display());
            container
                .fs
                .ensure_parent(&path)
                .and_then(|_| container.fs.write(&path, &Settings::template()))
                .with_path_context("write config template", &path)?;
            output::success(&format!("Created {}", path.display()));
        }
        ConfigCommands::Edit { global } => {
            let path = config_target(project_dir, *global)?;
            if !container.fs.exists(&path) {
                return Err(CliError::Usage(format!(
                    "no config at {}, run `navtree config init` first",
                    path.display()
                )));
            }
            container.editor.open(&path).map_err(|e| {
                CliError::from(InfraError::Editor {
                    message: e.to_string(),
                })
            })?;
        }
    }
    Ok(())
}
