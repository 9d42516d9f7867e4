// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::client::{Collections, Resource};
use crate::error::ClientError;
use crate::models::Category;
use crate::page::{Page, PageData};
use crate::views::categories_table;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BudgetData {
    pub categories: Vec<Category>,
}

impl PageData for BudgetData {
    fn load<C: Collections>(client: &C) -> Result<Self, ClientError> {
        Ok(Self {
            categories: client.list(Resource::Categories)?,
        })
    }
}

/// Read-only: categories and their subcategories as the backend knows them.
#[derive(Debug, Default)]
pub struct BudgetPage {
    pub page: Page<BudgetData>,
}

impl BudgetPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mount<C: Collections>(&mut self, client: &C) {
        self.page.mount(client);
    }

    pub fn render(&self) -> String {
        self.page.render(|data| {
            if data.categories.is_empty() {
                "Budget\nNo categories found".to_string()
            } else {
                format!("Budget\n{}", categories_table(&data.categories))
            }
        })
    }
}
