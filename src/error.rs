use std::path::PathBuf;

use thiserror::Error;

use crate::validate::SchemaIssue;

/// Errors that stop report generation.
/// Messages are shown to the user as-is.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("El archivo ingresado es inexistente: {}", .path.display())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("El archivo ingresado no tiene contenido")]
    EmptyInput,

    #[error("El archivo ingresado no es un JSON valido")]
    InvalidJson(#[source] serde_json::Error),

    #[error("El archivo se encuentra mal formado: {}", join_issues(.0))]
    Schema(Vec<SchemaIssue>),

    #[error("No se pudo escribir el informe {}", .path.display())]
    OutputUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn join_issues(issues: &[SchemaIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, ReportError>;
