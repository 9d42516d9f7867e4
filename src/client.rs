// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

use crate::error::ClientError;
use crate::utils::http_client;

/// A REST collection endpoint on the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Transactions,
    Savings,
    Categories,
}

impl Resource {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Transactions => "/api/transactions",
            Self::Savings => "/api/savings",
            Self::Categories => "/api/categories",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Transactions => "transactions",
            Self::Savings => "savings",
            Self::Categories => "categories",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fetch-and-post access to the backend's collections. One attempt per
/// call: no retry, no backoff.
pub trait Collections {
    /// GET the whole collection, in the order the backend returns it.
    fn list<T: DeserializeOwned>(&self, resource: Resource) -> Result<Vec<T>, ClientError>;

    /// POST one record as JSON and return what the backend stored.
    fn create<P: Serialize, T: DeserializeOwned>(
        &self,
        resource: Resource,
        payload: &P,
    ) -> Result<T, ClientError>;
}

pub struct ApiClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let http = http_client().map_err(|e| ClientError::transport(base_url, e))?;
        Ok(Self::with_http(base_url, http))
    }

    pub fn with_http(base_url: &str, http: reqwest::blocking::Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        }
    }

    fn url(&self, resource: Resource) -> String {
        format!("{}{}", self.base_url, resource.path())
    }

    fn read_json<T: DeserializeOwned>(
        url: &str,
        resp: reqwest::blocking::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "backend returned an error status");
            return Err(ClientError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        let body = resp.text().map_err(|e| ClientError::transport(url, e))?;
        serde_json::from_str(&body).map_err(|e| ClientError::parse(url, e))
    }
}

impl Collections for ApiClient {
    fn list<T: DeserializeOwned>(&self, resource: Resource) -> Result<Vec<T>, ClientError> {
        let url = self.url(resource);
        debug!(%url, "GET");
        let resp = self
            .http
            .get(&url)
            .send()
            .map_err(|e| ClientError::transport(&url, e))?;
        Self::read_json(&url, resp)
    }

    fn create<P: Serialize, T: DeserializeOwned>(
        &self,
        resource: Resource,
        payload: &P,
    ) -> Result<T, ClientError> {
        let url = self.url(resource);
        debug!(%url, "POST");
        // .json() sets Content-Type: application/json
        let resp = self
            .http
            .post(&url)
            .json(payload)
            .send()
            .map_err(|e| ClientError::transport(&url, e))?;
        Self::read_json(&url, resp)
    }
}
