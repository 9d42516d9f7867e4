// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use budget_tracker::client::ApiClient;
use budget_tracker::{cli, commands, config, logging};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    logging::init(matches.get_count("verbose"));

    let cfg_path = config::config_path()?;
    let cfg = config::load_from(&cfg_path)?;
    let flag = matches.get_one::<String>("base-url").map(String::as_str);
    let base_url = cfg.resolve_base_url(flag)?;
    let client = || ApiClient::new(&base_url);

    match matches.subcommand() {
        Some(("expenses", sub)) => commands::expenses::handle(&client()?, sub)?,
        Some(("savings", sub)) => commands::savings::handle(&client()?, sub)?,
        Some(("budget", sub)) => commands::budget::handle(&client()?, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&client()?, sub)?,
        Some(("config", sub)) => commands::config::handle(&cfg_path, sub)?,
        Some(("recurrence", _)) => commands::recurrence::handle(),
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
