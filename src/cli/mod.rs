//! Command-line front end: argument dispatch, interactive forms, and output
//! rendering over the service layer.

pub mod commands;
pub mod forms;
pub mod output;

use thiserror::Error;

use crate::core::services::ServiceError;
use crate::errors::AgroError;
use crate::storage::JsonStorage;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error(transparent)]
    Storage(#[from] AgroError),
    #[error("Entrada interrumpida: {0}")]
    Prompt(#[from] dialoguer::Error),
    #[error("{0}")]
    Uso(String),
}

pub type CliResult = Result<(), CliError>;

/// Entry point for the binary: dispatches on the supplied arguments and
/// renders any failure to stderr.
pub fn run(args: Vec<String>) -> std::process::ExitCode {
    crate::init();
    let formatter = output::Formatter::new();

    let storage = match JsonStorage::new_default() {
        Ok(storage) => storage,
        Err(err) => {
            formatter.print_error(format!("no se pudo abrir el almacenamiento: {err}"));
            return std::process::ExitCode::FAILURE;
        }
    };

    match commands::dispatch(&storage, &formatter, &args) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(CliError::Uso(mensaje)) => {
            formatter.print_error(mensaje);
            commands::print_help(&formatter);
            std::process::ExitCode::FAILURE
        }
        Err(err) => {
            formatter.print_error(err.to_string());
            std::process::ExitCode::FAILURE
        }
    }
}
