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

//! Command Line Interface

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::DEFAULT_SALT;

#[derive(Parser, Debug)]
#[command(name = "hostprint")]
#[command(version)]
#[command(about = "hostprint - stable hardware fingerprint of this machine")]
#[command(long_about = "hostprint - stable hardware fingerprint of this machine

Hashes processor, BIOS, base board, video driver, system disk serial and
the MAC of the first active network adapter into a 40-digit fingerprint.
The system disk and network adapter are required; the other providers are
skipped when the hardware does not report them.

EXAMPLES:
    hostprint                                   Raw and salted fingerprint
    hostprint --providers processor,bios        Fingerprint over a subset
    hostprint --salt my-app --explain           Custom salt, per-provider hashes
    hostprint --format json                     Machine-readable report
    hostprint --root /mnt/image                 Read a captured sysfs/procfs tree

PROVIDERS:
    processor, bios, base_board, system_disk, video_card_driver,
    first_enabled_nic_mac (or: all)

ENVIRONMENT VARIABLES:
    RUST_LOG=debug         Overrides --log-level")]
pub struct Cli {
    /// Comma-separated providers to include
    #[arg(long, default_value = "all", value_name = "LIST")]
    pub providers: String,

    /// Salt mixed into the salted fingerprint
    #[arg(long, default_value = DEFAULT_SALT, conflicts_with = "no_salt")]
    pub salt: String,

    /// Only print the raw fingerprint
    #[arg(long)]
    pub no_salt: bool,

    /// Query providers concurrently
    #[arg(long)]
    pub parallel: bool,

    /// Print the hash contributed by each provider
    #[arg(long)]
    pub explain: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Characters per group when printing (0 prints one unbroken string)
    #[arg(long, default_value_t = 5, value_name = "N")]
    pub group_size: usize,

    /// Group delimiter when printing
    #[arg(long, default_value = "-", value_name = "D")]
    pub delimiter: String,

    /// Filesystem root to read hardware information from
    #[arg(long, default_value = "/", value_name = "DIR")]
    pub root: PathBuf,

    /// Log filter used when RUST_LOG is not set (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn", value_name = "LEVEL")]
    pub log_level: String,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}
