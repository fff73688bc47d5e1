//! Command dispatch: resolve the request, transform the input, write the output

use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::acquire_input;
use crate::application::services::ReplaceRequest;
use crate::cli::args::Cli;
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::config::Settings;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::{InfraError, InfraResult};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    let settings = Settings::load(cli.config.as_deref())?;
    if cli.show_config {
        output::info(&settings.to_toml()?);
        return Ok(());
    }

    let container = ServiceContainer::new(settings);
    _replace(cli, &container)
}

/// Merge CLI flags over the loaded settings.
pub fn resolve_request(cli: &Cli, settings: &Settings) -> ReplaceRequest {
    ReplaceRequest {
        mappings: cli.mappings.clone(),
        replacements: cli.replacements.clone(),
        mapfile: cli.mapfile.clone().or_else(|| settings.mapfile.clone()),
        order: cli.order.map(Into::into).unwrap_or(settings.order),
    }
}

#[instrument(skip_all)]
fn _replace(cli: &Cli, container: &ServiceContainer) -> CliResult<()> {
    let request = resolve_request(cli, &container.settings);
    debug!("request: {:?}", request);

    // mapping errors are reported before blocking on stdin
    let mapping = container.replace_service().build_mapping(&request)?;

    let input = read_input(cli.input.as_deref())?;
    let result = mapping.apply_with(&input, request.order);
    write_output(&result)?;
    Ok(())
}

/// Positional input, or stdin when it is absent or empty.
fn read_input(given: Option<&str>) -> InfraResult<String> {
    acquire_input(given, io::stdin().lock()).map_err(|e| InfraError::io("read stdin", e))
}

fn write_output(text: &str) -> InfraResult<()> {
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.flush())
        .map_err(|e| InfraError::io("write stdout", e))
}
