// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::recurrence::options;
use crate::utils::pretty_table;

pub fn handle() {
    let rows = options()
        .into_iter()
        .map(|(value, label)| {
            let value = if value.is_empty() { "(omit)" } else { value };
            vec![value.to_string(), label.to_string()]
        })
        .collect();
    println!("{}", pretty_table(&["Value", "Label"], rows));
}
