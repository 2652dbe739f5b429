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

//! Output of a fingerprint run, as text or JSON

use std::fmt::Write as _;

use hp_core::{ProviderContribution, ProviderSet};
use hp_error::Result;
use serde::Serialize;

use crate::cli::OutputFormat;

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub providers: ProviderSet,
    /// Raw fingerprint in display form
    pub raw: String,
    /// Salted fingerprint in display form
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salted: Option<String>,
    pub parallel: bool,
    pub elapsed_ms: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contributions: Option<Vec<ProviderContribution>>,
}

impl RunReport {
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.render_text()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Raw:     {}", self.raw);
        if let Some(salted) = &self.salted {
            let _ = writeln!(out, "Salted:  {}", salted);
        }
        let _ = writeln!(out, "Elapsed: {:.1} ms", self.elapsed_ms);

        if let Some(contributions) = &self.contributions {
            let _ = writeln!(out);
            let _ = writeln!(out, "Providers:");
            for c in contributions {
                let hash = c.hash.as_deref().unwrap_or("(no data)");
                let _ = writeln!(out, "  {:<22} {}", c.kind.name(), hash);
            }
        }
        out
    }
}
