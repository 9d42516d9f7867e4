// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! In-memory stand-in for the REST backend. Stores records as JSON values,
//! assigns integer ids on create, and can be told to fail a resource.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};

use crate::client::{Collections, Resource};
use crate::error::ClientError;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List(Resource),
    Create(Resource, Value),
}

#[derive(Default)]
pub struct FakeBackend {
    records: RefCell<HashMap<Resource, Vec<Value>>>,
    failing: RefCell<HashSet<Resource>>,
    calls: RefCell<Vec<Call>>,
    next_id: Cell<i64>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self {
            next_id: Cell::new(1),
            ..Default::default()
        }
    }

    /// Seeds a collection. Records are returned by `list` in this order.
    pub fn with(self, resource: Resource, records: Vec<Value>) -> Self {
        for r in &records {
            if let Some(id) = r.get("id").and_then(Value::as_i64) {
                if id >= self.next_id.get() {
                    self.next_id.set(id + 1);
                }
            }
        }
        self.records.borrow_mut().insert(resource, records);
        self
    }

    /// Every later call on `resource` answers with a 500.
    pub fn fail(&self, resource: Resource) {
        self.failing.borrow_mut().insert(resource);
    }

    pub fn recover(&self, resource: Resource) {
        self.failing.borrow_mut().remove(&resource);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn posts(&self, resource: Resource) -> Vec<Value> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::Create(r, body) if *r == resource => Some(body.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn stored(&self, resource: Resource) -> Vec<Value> {
        self.records
            .borrow()
            .get(&resource)
            .cloned()
            .unwrap_or_default()
    }

    fn check(&self, resource: Resource) -> Result<(), ClientError> {
        if self.failing.borrow().contains(&resource) {
            return Err(ClientError::Status {
                url: format!("fake://{}", resource.path()),
                status: 500,
            });
        }
        Ok(())
    }
}

impl Collections for FakeBackend {
    fn list<T: DeserializeOwned>(&self, resource: Resource) -> Result<Vec<T>, ClientError> {
        self.calls.borrow_mut().push(Call::List(resource));
        self.check(resource)?;
        let url = format!("fake://{}", resource.path());
        self.stored(resource)
            .into_iter()
            .map(|v| serde_json::from_value(v).map_err(|e| ClientError::parse(&url, e)))
            .collect()
    }

    fn create<P: Serialize, T: DeserializeOwned>(
        &self,
        resource: Resource,
        payload: &P,
    ) -> Result<T, ClientError> {
        let url = format!("fake://{}", resource.path());
        let body = serde_json::to_value(payload).map_err(|e| ClientError::parse(&url, e))?;
        self.calls
            .borrow_mut()
            .push(Call::Create(resource, body.clone()));
        self.check(resource)?;

        let mut record = body;
        if let Some(obj) = record.as_object_mut() {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            obj.insert("id".into(), Value::from(id));
            if resource == Resource::Transactions && !obj.contains_key("transaction_type") {
                obj.insert("transaction_type".into(), Value::from("expense"));
            }
        }
        let created = serde_json::from_value(record.clone()).map_err(|e| ClientError::parse(&url, e))?;
        self.records
            .borrow_mut()
            .entry(resource)
            .or_default()
            .push(record);
        Ok(created)
    }
}
