//! Human-readable result reports.
//!
//! A report lists the selected devices and their totals. It is echoed to
//! the console and persisted as a text file named after the spend, the
//! device count and the time it was produced, e.g.
//! `2000TL_with3device_20250314_092653.txt`.

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use greencity_config::ReportConfig;
use greencity_core::item::round_currency;
use greencity_core::Device;
use greencity_solver::Selection;
use tracing::info;

const HEADER: &str = "================ RESULTS ================";
const DIVIDER: &str = "-----------------------------------------";
const FOOTER: &str = "=========================================";

/// Totals for a set of selected devices.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    devices: Vec<Device>,
    total_cost: f64,
    total_energy_kwh: f64,
    total_value: f64,
}

impl Report {
    /// Builds a report for an optimizer selection.
    pub fn new(selection: &Selection<'_, Device>) -> Self {
        Self::from_devices(selection.iter())
    }

    /// Builds a report for any sequence of devices, in the given order.
    pub fn from_devices<'a>(devices: impl IntoIterator<Item = &'a Device>) -> Self {
        let devices: Vec<Device> = devices.into_iter().cloned().collect();
        Self {
            total_cost: total(&devices, Device::cost),
            total_energy_kwh: total(&devices, Device::energy_saved_kwh),
            total_value: total(&devices, Device::objective_value),
            devices,
        }
    }

    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    pub fn device_count(&self) -> usize {
        self.devices.len()
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    pub fn total_energy_kwh(&self) -> f64 {
        self.total_energy_kwh
    }

    /// Σ(energy × score) over the selected devices.
    pub fn total_value(&self) -> f64 {
        self.total_value
    }

    /// Renders the report block.
    pub fn render(&self, config: &ReportConfig) -> String {
        let mut out = String::new();
        let _ = writeln!(out);
        let _ = writeln!(out, "{HEADER}");
        for device in &self.devices {
            let _ = writeln!(out, " • {device}");
        }
        let _ = writeln!(out, "{DIVIDER}");
        let _ = writeln!(out, "Total devices:     {}", self.device_count());
        let _ = writeln!(
            out,
            "Total cost:        {}{:.2}",
            config.currency_symbol, self.total_cost
        );
        let _ = writeln!(
            out,
            "Energy saved:      {:.1} kWh / year",
            self.total_energy_kwh
        );
        let _ = writeln!(out, "Σ(energy×score):   {:.1}", self.total_value);
        let _ = writeln!(out, "{FOOTER}");
        let _ = writeln!(out);
        out
    }

    /// File name for this report produced at `timestamp`.
    pub fn file_name(&self, config: &ReportConfig, timestamp: NaiveDateTime) -> String {
        format!(
            "{}{}_with{}device_{}.txt",
            round_currency(self.total_cost),
            config.currency_code,
            self.device_count(),
            timestamp.format("%Y%m%d_%H%M%S")
        )
    }

    /// Writes `rendered` into `config.output_dir`, creating it if needed,
    /// and returns the written path.
    pub fn write(
        &self,
        config: &ReportConfig,
        rendered: &str,
        timestamp: NaiveDateTime,
    ) -> io::Result<PathBuf> {
        self.write_to(&config.output_dir, config, rendered, timestamp)
    }

    /// Like [`write`](Self::write) but into an explicit directory.
    pub fn write_to(
        &self,
        dir: &Path,
        config: &ReportConfig,
        rendered: &str,
        timestamp: NaiveDateTime,
    ) -> io::Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(self.file_name(config, timestamp));
        fs::write(&path, rendered)?;
        info!(event = "report_saved", path = %path.display());
        Ok(path)
    }
}

// Starts from +0.0: an empty f64 `sum()` is -0.0.
fn total(devices: &[Device], field: fn(&Device) -> f64) -> f64 {
    devices.iter().fold(0.0, |acc, device| acc + field(device))
}
