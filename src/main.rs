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

use anyhow::Context;
use clap::Parser;

use hostprint::cli::Cli;
use hostprint::config::RunConfig;
use hostprint::logger::init_logging;

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    if let Err(err) = try_main(&cli) {
        tracing::debug!(error = ?err, "Run failed");
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn try_main(cli: &Cli) -> anyhow::Result<()> {
    let config = RunConfig::from_cli(cli).context("invalid arguments")?;
    let report = hostprint::run(&config)?;
    print!("{}", report.render(config.format)?);
    if config.format == hostprint::cli::OutputFormat::Json {
        println!();
    }
    Ok(())
}
