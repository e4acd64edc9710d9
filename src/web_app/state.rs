// web_app/state.rs - Which fetch is allowed to update the page
//
// Each trigger gets a `FetchTicket`. Starting a new fetch supersedes every
// earlier ticket, so a slow response for an old base address cannot
// overwrite the state produced for the new one.

use crate::web_app::config::ApiBase;
use crate::web_app::error::FetchError;
use crate::web_app::model::{CatalogPage, ViewState};

/// Handle for one fetch attempt
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    base: ApiBase,
}

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn base(&self) -> &ApiBase {
        &self.base
    }
}

/// Owns the page's `ViewState` and the ticket of the latest trigger
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogController {
    state: ViewState,
    generation: u64,
    current: Option<FetchTicket>,
}

impl CatalogController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Start a fetch for `base`.
    ///
    /// Returns `None` when `base` is the address already fetched (or being
    /// fetched); the page only refetches when the address changes.
    pub fn begin(&mut self, base: &ApiBase) -> Option<FetchTicket> {
        if self.current.as_ref().is_some_and(|t| &t.base == base) {
            return None;
        }

        self.generation += 1;
        let ticket = FetchTicket {
            generation: self.generation,
            base: base.clone(),
        };

        tracing::debug!(generation = ticket.generation, base = %base, "Starting product fetch");
        self.state = ViewState::Loading;
        self.current = Some(ticket.clone());
        Some(ticket)
    }

    /// True while `ticket` is the latest trigger and has not completed
    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        self.state.is_loading() && self.current.as_ref() == Some(ticket)
    }

    /// Apply the outcome of `ticket`'s fetch. Stale outcomes are dropped.
    ///
    /// Returns true if the state changed.
    pub fn complete(
        &mut self,
        ticket: &FetchTicket,
        outcome: Result<CatalogPage, FetchError>,
    ) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(
                generation = ticket.generation,
                latest = self.generation,
                "Discarding response from superseded fetch"
            );
            return false;
        }

        self.state = ViewState::from(outcome);
        true
    }
}
