//! The budget prompt loop.
//!
//! A [`Session`] asks for a budget, runs the optimizer over the loaded
//! catalog, prints the report and saves it, then asks whether to go again.
//! Input comes through the [`BudgetPrompt`] seam so the loop runs the same
//! against a terminal, a list of budgets from the command line, or a test
//! script.

use std::collections::VecDeque;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use chrono::Local;
use dialoguer::{Confirm, Input};
use greencity_config::ReportConfig;
use greencity_core::Device;
use greencity_solver::KnapsackSolver;
use tracing::{error, info};

use crate::error::{AppError, Result};
use crate::report::Report;

/// Source of budgets for a [`Session`].
pub trait BudgetPrompt {
    /// Next budget, or `None` when there is no more input.
    fn read_budget(&mut self) -> io::Result<Option<f64>>;

    /// Whether to ask for another budget after a completed run.
    fn confirm_again(&mut self) -> io::Result<bool>;
}

/// Interactive prompt on the controlling terminal.
///
/// Unparseable budgets are rejected and asked for again by `dialoguer`.
#[derive(Debug, Clone)]
pub struct TerminalPrompt {
    currency_code: String,
    currency_symbol: String,
}

impl TerminalPrompt {
    pub fn new(report: &ReportConfig) -> Self {
        Self {
            currency_code: report.currency_code.clone(),
            currency_symbol: report.currency_symbol.clone(),
        }
    }

    /// Text shown when asking for a budget.
    pub fn budget_prompt(&self) -> String {
        format!(
            "Enter your available budget in {} (0 = exit) {}",
            self.currency_code, self.currency_symbol
        )
    }
}

impl BudgetPrompt for TerminalPrompt {
    fn read_budget(&mut self) -> io::Result<Option<f64>> {
        Input::<f64>::new()
            .with_prompt(self.budget_prompt())
            .interact_text()
            .map(Some)
            .map_err(io::Error::other)
    }

    fn confirm_again(&mut self) -> io::Result<bool> {
        Confirm::new()
            .with_prompt("Run another budget?")
            .default(false)
            .interact()
            .map_err(io::Error::other)
    }
}

/// A fixed list of budgets, answered in order without asking.
///
/// Used for `--budget` runs; keeps going while budgets remain.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompt {
    budgets: VecDeque<f64>,
}

impl ScriptedPrompt {
    pub fn new(budgets: impl IntoIterator<Item = f64>) -> Self {
        Self {
            budgets: budgets.into_iter().collect(),
        }
    }

    /// Budgets not yet consumed.
    pub fn remaining(&self) -> usize {
        self.budgets.len()
    }
}

impl BudgetPrompt for ScriptedPrompt {
    fn read_budget(&mut self) -> io::Result<Option<f64>> {
        Ok(self.budgets.pop_front())
    }

    fn confirm_again(&mut self) -> io::Result<bool> {
        Ok(!self.budgets.is_empty())
    }
}

/// Summary of a finished session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionSummary {
    /// Budgets that produced a report.
    pub completed: usize,
    /// Budgets the optimizer rejected.
    pub failed: usize,
    /// Report files written, in order.
    pub saved: Vec<PathBuf>,
}

/// Prompt loop over one loaded catalog.
pub struct Session<'a, P, W> {
    devices: &'a [Device],
    solver: &'a KnapsackSolver,
    report: &'a ReportConfig,
    prompt: P,
    out: W,
}

impl<'a, P, W: Write> Session<'a, P, W> {
    pub fn new(
        devices: &'a [Device],
        solver: &'a KnapsackSolver,
        report: &'a ReportConfig,
        prompt: P,
        out: W,
    ) -> Self {
        Self {
            devices,
            solver,
            report,
            prompt,
            out,
        }
    }

    /// Solves for one budget, prints the report and saves it.
    ///
    /// Returns the saved path, or `None` if the report could not be written.
    /// A failed write is logged and does not fail the run.
    ///
    /// # Errors
    ///
    /// Optimizer errors are returned as [`AppError::Solver`]; failing to
    /// print the report is [`AppError::Io`].
    pub fn run_budget(&mut self, budget: f64) -> Result<Option<PathBuf>> {
        info!("Budget entered: {}{budget:.2}", self.report.currency_symbol);

        let started = Instant::now();
        let selection = self.solver.solve(self.devices, budget)?;
        info!(
            event = "optimisation_finished",
            elapsed_ms = started.elapsed().as_millis() as u64,
        );

        let report = Report::new(&selection);
        let text = report.render(self.report);
        self.out.write_all(text.as_bytes())?;
        self.out.flush()?;

        match report.write(self.report, &text, Local::now().naive_local()) {
            Ok(path) => Ok(Some(path)),
            Err(err) => {
                error!("Could not write report: {err}");
                Ok(None)
            }
        }
    }

    /// Consumes the session, returning the prompt and the writer.
    pub fn into_parts(self) -> (P, W) {
        (self.prompt, self.out)
    }
}

impl<'a, P: BudgetPrompt, W: Write> Session<'a, P, W> {
    /// Runs until the prompt runs dry, a budget ≤ 0 is entered, or the
    /// user declines another round.
    ///
    /// Optimizer errors are logged and the loop asks for the next budget.
    ///
    /// # Errors
    ///
    /// Prompt and console I/O failures end the session.
    pub fn run(&mut self) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();

        while let Some(budget) = self.prompt.read_budget()? {
            if budget <= 0.0 {
                info!("Exit requested – terminating.");
                return Ok(summary);
            }

            match self.run_budget(budget) {
                Ok(saved) => {
                    summary.completed += 1;
                    summary.saved.extend(saved);
                }
                Err(AppError::Solver(err)) => {
                    error!("Optimisation failed: {err}");
                    summary.failed += 1;
                    continue;
                }
                Err(err) => return Err(err),
            }

            if !self.prompt.confirm_again()? {
                break;
            }
        }

        Ok(summary)
    }
}
