//! Application-level errors.

use std::io;
use std::path::PathBuf;

use greencity_config::ConfigError;
use greencity_core::GreenCityError;
use thiserror::Error;

use crate::catalog::CatalogError;

/// Errors that end a `greencity` run.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("catalog not found: {}", .0.display())]
    CatalogNotFound(PathBuf),

    #[error(transparent)]
    Solver(#[from] GreenCityError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;
