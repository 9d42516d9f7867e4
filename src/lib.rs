// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
#[doc(hidden)]
pub mod fake;
pub mod forms;
pub mod logging;
pub mod models;
pub mod page;
pub mod pages;
pub mod recurrence;
pub mod utils;
pub mod views;
