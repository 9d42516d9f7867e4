// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::client::Collections;
use crate::commands::{ready, report, submitted};
use crate::forms::TransactionForm;
use crate::pages::expenses::ExpensesPage;
use crate::utils::maybe_print_json;
use anyhow::Result;

pub fn handle<C: Collections>(client: &C, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", sub)) => show(client, sub)?,
        Some(("add", sub)) => {
            let page = add(client, sub)?;
            if page.page.notice().is_none() {
                if let Some(t) = page.transactions().last() {
                    println!(
                        "Added expense #{} '{}'",
                        t.id,
                        t.description.as_deref().unwrap_or_default()
                    );
                }
            }
            report(&page.page, &page.render(), "Failed to add expense")?;
        }
        _ => {}
    }
    Ok(())
}

fn arg(sub: &clap::ArgMatches, name: &str) -> String {
    sub.get_one::<String>(name).cloned().unwrap_or_default()
}

/// Fills the expense form from command-line fields, exactly as typed.
pub fn form_from_args(sub: &clap::ArgMatches) -> Result<TransactionForm> {
    let mut form = TransactionForm {
        description: arg(sub, "description"),
        category: arg(sub, "category"),
        subcategory: arg(sub, "subcategory"),
        amount: arg(sub, "amount"),
        date: arg(sub, "date"),
        ..Default::default()
    };
    form.set_recurring(&arg(sub, "recurring"))?;
    form.set_transaction_type(&arg(sub, "type"))?;
    Ok(form)
}

fn show<C: Collections>(client: &C, sub: &clap::ArgMatches) -> Result<()> {
    let mut page = ExpensesPage::new();
    page.mount(client);
    let data = ready(&page.page)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data.transactions)? {
        println!("{}", page.render());
    }
    Ok(())
}

/// Mounts the expenses page, fills its form and submits it. A rejected
/// submit comes back as the page's notice.
pub fn add<C: Collections>(client: &C, sub: &clap::ArgMatches) -> Result<ExpensesPage> {
    let mut page = ExpensesPage::new();
    page.form = form_from_args(sub)?;
    page.mount(client);
    ready(&page.page)?;
    submitted(page.submit(client), "Failed to add expense")?;
    Ok(page)
}
