// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::client::Collections;
use crate::commands::ready;
use crate::pages::budget::BudgetPage;
use anyhow::Result;

pub fn handle<C: Collections>(client: &C, m: &clap::ArgMatches) -> Result<()> {
    if let Some(("show", _)) = m.subcommand() {
        let mut page = BudgetPage::new();
        page.mount(client);
        ready(&page.page)?;
        println!("{}", page.render());
    }
    Ok(())
}
