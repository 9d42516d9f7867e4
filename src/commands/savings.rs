// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::client::Collections;
use crate::commands::{ready, report, submitted};
use crate::pages::savings::{FormType, SavingsForm, SavingsPage};
use crate::utils::{fmt_money, maybe_print_json};
use anyhow::Result;
use serde_json::json;

pub fn handle<C: Collections>(client: &C, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", sub)) => show(client, sub)?,
        Some(("add-account", sub)) => {
            let page = add_account(client, sub)?;
            if page.page.notice().is_none() {
                if let Some(a) = page.accounts().last() {
                    println!("Added savings account #{} '{}'", a.id, a.name);
                }
            }
            report(&page.page, &page.render(), "Failed to add savings account")?;
        }
        Some(("add-transaction", sub)) => {
            let page = add_transaction(client, sub)?;
            if page.page.notice().is_none() {
                if let Some(t) = page.savings_transactions().last() {
                    println!("Deposited {} into '{}'", fmt_money(t.amount), t.category);
                }
            }
            report(&page.page, &page.render(), "Failed to add savings transaction")?;
        }
        _ => {}
    }
    Ok(())
}

fn arg(sub: &clap::ArgMatches, name: &str) -> String {
    sub.get_one::<String>(name).cloned().unwrap_or_default()
}

fn show<C: Collections>(client: &C, sub: &clap::ArgMatches) -> Result<()> {
    let mut page = SavingsPage::new();
    page.mount(client);
    let data = ready(&page.page)?;
    let both = json!({
        "accounts": data.accounts,
        "savings_transactions": data.savings_transactions(),
    });
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &both)? {
        println!("{}", page.render());
    }
    Ok(())
}

/// Mounts the savings page, fills the account form and submits it. A
/// rejected submit comes back as the page's notice.
pub fn add_account<C: Collections>(client: &C, sub: &clap::ArgMatches) -> Result<SavingsPage> {
    let mut page = SavingsPage::new();
    page.mount(client);
    ready(&page.page)?;
    page.select_form(FormType::Savings)?;
    if let SavingsForm::Account(form) = page.form_mut() {
        form.name = arg(sub, "name");
        form.amount = arg(sub, "amount");
        form.goal = arg(sub, "goal");
        form.date = arg(sub, "date");
    }
    submitted(page.submit(client), "Failed to add savings account")?;
    Ok(page)
}

/// Mounts the savings page, switches to the deposit form and submits it.
pub fn add_transaction<C: Collections>(client: &C, sub: &clap::ArgMatches) -> Result<SavingsPage> {
    let mut page = SavingsPage::new();
    page.mount(client);
    ready(&page.page)?;
    page.select_form(FormType::Transaction)?;
    if let SavingsForm::Transaction(form) = page.form_mut() {
        form.account = arg(sub, "account");
        form.amount = arg(sub, "amount");
        form.date = arg(sub, "date");
        form.description = arg(sub, "description");
        form.set_recurring(&arg(sub, "recurring"))?;
    }
    submitted(page.submit(client), "Failed to add savings transaction")?;
    Ok(page)
}
