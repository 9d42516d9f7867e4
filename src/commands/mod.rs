// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod budget;
pub mod config;
pub mod expenses;
pub mod exporter;
pub mod recurrence;
pub mod savings;

use crate::error::Error;
use crate::page::{LoadState, Page};
use anyhow::{anyhow, bail, Context, Result};

/// The loaded collections, or the load failure as the command's error so it
/// replaces the page output.
pub fn ready<D>(page: &Page<D>) -> Result<&D> {
    match page.state() {
        LoadState::Ready(d) => Ok(d),
        LoadState::Error(m) => Err(anyhow!("{}", m)),
        LoadState::Loading => Err(anyhow!("page was not loaded")),
    }
}

/// Keeps the page when its form was rejected: the failure is already the
/// page notice. Anything else fails the command outright.
pub fn submitted(result: Result<(), Error>, what: &'static str) -> Result<()> {
    match result {
        Ok(()) | Err(Error::Form(_)) => Ok(()),
        Err(e) => Err(e).context(what),
    }
}

/// Prints the page after a submit. A rejected submit shows up under the
/// page and still fails the command.
pub fn report<D>(page: &Page<D>, rendered: &str, what: &str) -> Result<()> {
    println!("{}", rendered);
    match page.notice() {
        Some(n) => bail!("{}: {}", what, n),
        None => Ok(()),
    }
}
