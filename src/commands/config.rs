// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::{load_from, save_to, validate_base_url};
use anyhow::Result;
use std::path::Path;

pub fn handle(path: &Path, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", _)) => {
            let cfg = load_from(path)?;
            println!("Config file: {}", path.display());
            println!("base_url = {}", cfg.base_url);
        }
        Some(("set-base-url", sub)) => {
            let url = set_base_url(path, sub.get_one::<String>("url").unwrap())?;
            println!("Base URL set to {}", url);
        }
        _ => {}
    }
    Ok(())
}

pub fn set_base_url(path: &Path, url: &str) -> Result<String> {
    let mut cfg = load_from(path)?;
    cfg.base_url = validate_base_url(url)?;
    save_to(path, &cfg)?;
    Ok(cfg.base_url)
}
