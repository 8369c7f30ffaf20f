//! GreenCity - budgeted selection of sustainability devices.
//!
//! Loads a device catalog, finds the subset with the greatest
//! Σ(energy saved × sustainability score) that fits a budget, and reports
//! it on the console and as a text file.
//!
//! # Quick Start
//!
//! ```
//! use greencity::prelude::*;
//!
//! let catalog = parse_catalog(
//!     "DeviceName,Category,CostTRY,EnergySaved_kWh,SustainabilityScore\n\
//!      LED Retrofit,Lighting,320.50,85.5,3\n\
//!      Heat Pump,HVAC,12499.99,3100,5\n",
//!     &CatalogConfig::default(),
//! );
//!
//! let selection = KnapsackSolver::default().solve(&catalog, 1000.0).unwrap();
//! let report = Report::new(&selection);
//! assert_eq!(report.device_count(), 1);
//! assert!(report.render(&ReportConfig::default()).contains("LED Retrofit"));
//! ```

pub mod catalog;
pub mod cli;
pub mod error;
pub mod progress;
pub mod report;
pub mod session;

pub use catalog::{load_catalog, parse_catalog, CatalogError};
pub use error::{AppError, Result};
pub use progress::TracingProgressListener;
pub use report::Report;
pub use session::{BudgetPrompt, ScriptedPrompt, Session, SessionSummary, TerminalPrompt};

pub use greencity_config::{CatalogConfig, GreenCityConfig, OptimizerConfig, ReportConfig};
pub use greencity_core::{Device, GreenCityError, KnapsackItem};
pub use greencity_solver::{KnapsackSolver, ProgressListener, Selection};

pub mod prelude {
    pub use crate::catalog::{load_catalog, parse_catalog};
    pub use crate::report::Report;
    pub use crate::session::{BudgetPrompt, Session};
    pub use greencity_config::{CatalogConfig, GreenCityConfig, ReportConfig};
    pub use greencity_core::{Device, KnapsackItem};
    pub use greencity_solver::{KnapsackSolver, Selection};
}
