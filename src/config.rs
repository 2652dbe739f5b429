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

//! Run configuration
//!
//! The parsed command line turned into a validated, typed description of
//! one fingerprint run.

use std::path::PathBuf;

use hp_core::constants::format::{DELIMITER, DIGEST_HEX_LEN, GROUP_SIZE};
use hp_core::ProviderSet;
use hp_error::{FingerprintError, Result};

use crate::cli::{Cli, OutputFormat};

/// Salt applied when none is given on the command line
pub const DEFAULT_SALT: &str = "3t67gh#$z56A";

const MAX_DELIMITER_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub providers: ProviderSet,
    /// `None` skips the salted value
    pub salt: Option<String>,
    pub parallel: bool,
    pub explain: bool,
    pub format: OutputFormat,
    pub group_size: usize,
    pub delimiter: String,
    pub root: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            providers: ProviderSet::all(),
            salt: Some(DEFAULT_SALT.to_string()),
            parallel: false,
            explain: false,
            format: OutputFormat::Text,
            group_size: GROUP_SIZE,
            delimiter: DELIMITER.to_string(),
            root: PathBuf::from("/"),
        }
    }
}

impl RunConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = Self {
            providers: ProviderSet::parse_list(&cli.providers)?,
            salt: (!cli.no_salt).then(|| cli.salt.clone()),
            parallel: cli.parallel,
            explain: cli.explain,
            format: cli.format,
            group_size: cli.group_size,
            delimiter: cli.delimiter.clone(),
            root: cli.root.clone(),
        };
        validate_run_config(&config)?;
        Ok(config)
    }

    /// Display form of a fingerprint under this configuration
    pub fn display(&self, fingerprint: &hp_core::FormattedFingerprint) -> String {
        fingerprint.regroup(self.group_size, &self.delimiter)
    }
}

/// Basic validation of a run configuration
pub fn validate_run_config(cfg: &RunConfig) -> Result<()> {
    if cfg.group_size > DIGEST_HEX_LEN {
        return Err(FingerprintError::invalid_config(
            "group_size",
            format!("must be between 0 and {}", DIGEST_HEX_LEN),
        ));
    }

    if cfg.group_size > 0 {
        if cfg.delimiter.is_empty() {
            return Err(FingerprintError::invalid_config("delimiter", "must not be empty"));
        }
        if cfg.delimiter.len() > MAX_DELIMITER_LEN {
            return Err(FingerprintError::invalid_config(
                "delimiter",
                format!("at most {} bytes", MAX_DELIMITER_LEN),
            ));
        }
        // Hex digits in the delimiter could not be told apart from the digest
        if cfg.delimiter.chars().any(|c| c.is_ascii_hexdigit()) {
            return Err(FingerprintError::invalid_config("delimiter", "must not contain hex digits"));
        }
    }

    if !cfg.root.is_absolute() {
        return Err(FingerprintError::invalid_config("root", "must be an absolute path"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use hp_core::ProviderKind;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_run_config(&RunConfig::default()).is_ok());
    }

    #[test]
    fn test_from_cli() {
        let cli = Cli::parse_from(["hostprint", "--providers", "bios,processor", "--no-salt"]);
        let cfg = RunConfig::from_cli(&cli).unwrap();
        assert_eq!(cfg.providers, ProviderKind::Processor | ProviderKind::Bios);
        assert_eq!(cfg.salt, None);

        let cli = Cli::parse_from(["hostprint", "--salt", "pepper"]);
        let cfg = RunConfig::from_cli(&cli).unwrap();
        assert!(cfg.providers.is_all());
        assert_eq!(cfg.salt.as_deref(), Some("pepper"));
    }

    #[test]
    fn test_unknown_provider_is_rejected() {
        let cli = Cli::parse_from(["hostprint", "--providers", "processor,fan"]);
        let err = RunConfig::from_cli(&cli).unwrap_err();
        assert!(matches!(err, FingerprintError::UnknownProvider(name) if name == "fan"));
    }

    #[test]
    fn test_group_size_bounds() {
        let mut cfg = RunConfig::default();
        cfg.group_size = DIGEST_HEX_LEN;
        assert!(validate_run_config(&cfg).is_ok());

        cfg.group_size = DIGEST_HEX_LEN + 1;
        assert!(matches!(
            validate_run_config(&cfg),
            Err(FingerprintError::InvalidConfig { field, .. }) if field == "group_size"
        ));
    }

    #[test]
    fn test_delimiter_rules() {
        let mut cfg = RunConfig::default();

        cfg.delimiter = "a".to_string();
        assert!(validate_run_config(&cfg).is_err());

        cfg.delimiter = String::new();
        assert!(validate_run_config(&cfg).is_err());

        // An empty delimiter is fine when no grouping happens
        cfg.group_size = 0;
        assert!(validate_run_config(&cfg).is_ok());

        cfg.group_size = 4;
        cfg.delimiter = " : ".to_string();
        assert!(validate_run_config(&cfg).is_ok());
    }

    #[test]
    fn test_relative_root_is_rejected() {
        let cfg = RunConfig {
            root: PathBuf::from("relative/tree"),
            ..RunConfig::default()
        };
        assert!(validate_run_config(&cfg).is_err());
    }

    #[test]
    fn test_display_regroups() {
        let cfg = RunConfig {
            group_size: 8,
            delimiter: ":".to_string(),
            ..RunConfig::default()
        };
        let fp = hp_core::saltify("", "");
        let shown = cfg.display(&fp);
        assert_eq!(shown.len(), 40 + 4);
        assert_eq!(shown.split(':').count(), 5);
    }
}
