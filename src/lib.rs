/*
 * This file is part of hostprint.
 *
 * Copyright (C) 2025 hostprint contributors
 *
 * hostprint is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * hostprint is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with hostprint. If not, see <https://www.gnu.org/licenses/>.
 */

//! hostprint - stable hardware fingerprint of the local machine
//!
//! This library wires the fingerprint engine (`hp-core`) to the Linux
//! hardware probe (`hp-probe`) and provides the command line front end.

pub mod cli;
pub mod config;
pub mod logger;
pub mod report;

#[cfg(test)]
pub mod test_utils;

use std::time::Instant;

use hp_core::{FingerprintCalculator, HardwareInfoSource};
use hp_error::Result;
use hp_probe::SysfsSource;
use tracing::info;

use config::RunConfig;
use report::RunReport;

/// Fingerprint the host (or the tree under `config.root`)
pub fn run(config: &RunConfig) -> Result<RunReport> {
    let calculator = FingerprintCalculator::new(SysfsSource::with_root(&config.root));
    run_with(&calculator, config)
}

/// Fingerprint using an already configured calculator.
///
/// The salted value is derived from the raw value just computed, which for
/// the full provider set equals `compute_with_salt`.
pub fn run_with<S>(calculator: &FingerprintCalculator<S>, config: &RunConfig) -> Result<RunReport>
where
    S: HardwareInfoSource + Sync,
{
    let started = Instant::now();

    let report = if config.parallel {
        calculator.compute_report_parallel(config.providers)?
    } else {
        calculator.compute_report(config.providers)?
    };
    let salted = config
        .salt
        .as_deref()
        .map(|salt| calculator.saltify(report.fingerprint.as_str(), salt));

    let elapsed = started.elapsed();
    info!(
        providers = %config.providers,
        contributing = report.contributing().count(),
        elapsed_ms = elapsed.as_millis() as u64,
        "Fingerprint computed"
    );

    Ok(RunReport {
        providers: config.providers,
        raw: config.display(&report.fingerprint),
        salted: salted.map(|s| config.display(&s)),
        parallel: config.parallel,
        elapsed_ms: elapsed.as_secs_f64() * 1000.0,
        contributions: config.explain.then_some(report.contributions),
    })
}
