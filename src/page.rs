// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Page controller shared by every page.
//!
//! A page starts in `Loading`, issues one GET per collection it needs when
//! mounted, and settles in `Ready` or `Error`. It never goes back to
//! `Loading`. Form submissions only ever append to the `Ready` collections.

use tracing::{debug, error};

use crate::client::Collections;
use crate::error::{ClientError, Error, PageError};
use crate::forms::CreationForm;

/// The collections a page needs, fetched together on mount.
pub trait PageData: Sized {
    fn load<C: Collections>(client: &C) -> Result<Self, ClientError>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<D> {
    Loading,
    Ready(D),
    Error(String),
}

/// Handed out when a load starts. A ticket from before an unmount no
/// longer matches and its result is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MountTicket(u64);

#[derive(Debug)]
pub struct Page<D> {
    state: LoadState<D>,
    generation: u64,
    mounted: bool,
    notice: Option<String>,
}

impl<D> Default for Page<D> {
    fn default() -> Self {
        Self {
            state: LoadState::Loading,
            generation: 0,
            mounted: false,
            notice: None,
        }
    }
}

impl<D: PageData> Page<D> {
    /// Loads every collection once. A page that already settled is left
    /// alone.
    pub fn mount<C: Collections>(&mut self, client: &C) {
        if !matches!(self.state, LoadState::Loading) {
            return;
        }
        let ticket = self.begin_load();
        let result = D::load(client);
        self.finish_load(ticket, result);
    }
}

impl<D> Page<D> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_load(&mut self) -> MountTicket {
        self.mounted = true;
        self.generation += 1;
        MountTicket(self.generation)
    }

    /// Applies a load result. Returns false when it was discarded because
    /// the page was unmounted, re-mounted, or had already settled.
    pub fn finish_load(&mut self, ticket: MountTicket, result: Result<D, ClientError>) -> bool {
        if !self.mounted || ticket.0 != self.generation {
            debug!("discarding load result for an unmounted page");
            return false;
        }
        if !matches!(self.state, LoadState::Loading) {
            return false;
        }
        self.state = match result {
            Ok(data) => LoadState::Ready(data),
            Err(e) => {
                error!(error = %e, "error loading page");
                LoadState::Error(e.to_string())
            }
        };
        true
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
        self.generation += 1;
    }

    pub fn state(&self) -> &LoadState<D> {
        &self.state
    }

    pub fn data(&self) -> Option<&D> {
        match &self.state {
            LoadState::Ready(d) => Some(d),
            _ => None,
        }
    }

    pub fn ready_mut(&mut self) -> Result<&mut D, PageError> {
        if !self.mounted {
            return Err(PageError::Unmounted);
        }
        match &mut self.state {
            LoadState::Ready(d) => Ok(d),
            LoadState::Loading => Err(PageError::Loading),
            LoadState::Error(m) => Err(PageError::Failed(m.clone())),
        }
    }

    /// Last submit failure, shown under the page until the next success.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Submits `form` and appends the stored record through `append`, the
    /// only write path into the page's collections.
    pub fn submit<F, C>(
        &mut self,
        form: &mut F,
        client: &C,
        append: impl FnOnce(&mut D, F::Record),
    ) -> Result<(), Error>
    where
        F: CreationForm,
        C: Collections,
    {
        let data = self.ready_mut()?;
        match form.submit(client, |record| append(data, record)) {
            Ok(()) => {
                self.notice = None;
                Ok(())
            }
            Err(e) => {
                self.notice = Some(e.to_string());
                Err(e.into())
            }
        }
    }

    /// Renders the page: a placeholder while loading, the error in place of
    /// the page, otherwise `body` followed by any submit notice.
    pub fn render(&self, body: impl FnOnce(&D) -> String) -> String {
        match &self.state {
            LoadState::Loading => "Loading...".to_string(),
            LoadState::Error(m) => format!("Error: {}", m),
            LoadState::Ready(d) => {
                let mut out = body(d);
                if let Some(n) = &self.notice {
                    out.push_str(&format!("\n\nError: {}", n));
                }
                out
            }
        }
    }
}
