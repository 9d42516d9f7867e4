// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::builder::PossibleValuesParser;
use clap::{crate_version, Arg, ArgAction, Command};

use crate::recurrence::Recurrence;

fn required(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).long(name).required(true).num_args(1).help(help)
}

fn optional(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).long(name).num_args(1).help(help)
}

fn recurring_arg() -> Arg {
    optional("recurring", "How often it repeats (omit for no recurrence)").value_parser(
        PossibleValuesParser::new(Recurrence::ALL.iter().map(|r| r.as_str())),
    )
}

fn output_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print the collections as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON record per line"),
    )
}

fn export_target(name: &'static str, about: &'static str) -> Command {
    Command::new(name)
        .about(about)
        .arg(
            Arg::new("format")
                .long("format")
                .num_args(1)
                .default_value("csv")
                .value_parser(["csv", "json"]),
        )
        .arg(required("out", "Destination file"))
}

pub fn build_cli() -> Command {
    Command::new("budget-tracker")
        .version(crate_version!())
        .about("Track expenses and savings against the Budget Tracker backend")
        .arg(
            Arg::new("base-url")
                .long("base-url")
                .global(true)
                .num_args(1)
                .help("Backend address, e.g. http://localhost:5001"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("Log more to stderr (-v info, -vv debug)"),
        )
        .subcommand(
            Command::new("expenses")
                .about("Expenses page")
                .subcommand_required(true)
                .subcommand(output_args(
                    Command::new("show").about("List transactions and upcoming expenses"),
                ))
                .subcommand(
                    Command::new("add")
                        .about("Add an expense")
                        .arg(required("description", "What did you spend money on?"))
                        .arg(required("category", "Category"))
                        .arg(required("subcategory", "Subcategory"))
                        .arg(required("amount", "Amount in dollars, e.g. 12.50"))
                        .arg(required("date", "Date, YYYY-MM-DD"))
                        .arg(recurring_arg())
                        .arg(
                            optional("type", "income or expense (backend default: expense)")
                                .value_parser(["income", "expense"]),
                        ),
                ),
        )
        .subcommand(
            Command::new("savings")
                .about("Savings page")
                .subcommand_required(true)
                .subcommand(output_args(
                    Command::new("show").about("List accounts, deposits and goals"),
                ))
                .subcommand(
                    Command::new("add-account")
                        .about("Open a savings account")
                        .arg(required("name", "Account name"))
                        .arg(required("amount", "Amount saved so far"))
                        .arg(optional("goal", "Target amount"))
                        .arg(optional("date", "Date, YYYY-MM-DD")),
                )
                .subcommand(
                    Command::new("add-transaction")
                        .about("Deposit into an existing savings account")
                        .arg(required("account", "Name of the savings account"))
                        .arg(required("amount", "Amount deposited"))
                        .arg(required("date", "Date, YYYY-MM-DD"))
                        .arg(optional("description", "Note for the deposit"))
                        .arg(recurring_arg()),
                ),
        )
        .subcommand(
            Command::new("budget")
                .about("Budget page")
                .subcommand_required(true)
                .subcommand(Command::new("show").about("List categories and subcategories")),
        )
        .subcommand(
            Command::new("export")
                .about("Write a collection to a file")
                .subcommand_required(true)
                .subcommand(export_target("transactions", "Export all transactions"))
                .subcommand(export_target("savings", "Export all savings accounts")),
        )
        .subcommand(
            Command::new("config")
                .about("Show or change settings")
                .subcommand_required(true)
                .subcommand(Command::new("show").about("Print the config file and values"))
                .subcommand(
                    Command::new("set-base-url")
                        .about("Point the client at another backend")
                        .arg(Arg::new("url").required(true).num_args(1)),
                ),
        )
        .subcommand(Command::new("recurrence").about("List recurrence options"))
}
