// src/tooltip_model.rs
//! Fetch lifecycle of a single feature tooltip.
//!
//! The model tracks which feature was last requested, and only lets a fetch
//! result through when it still belongs to that feature and the tooltip has
//! not been disposed. Fetches are never aborted; late results are dropped.

use crate::property_loader::PropertyResult;
use crate::tooltip_data::FeatureIdentity;
use crate::tooltip_property::TooltipProperty;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Loaded(Vec<TooltipProperty>),
    Failed(String),
}

/// What happened to a fetch completion handed to [`TooltipViewModel::on_fetched`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    Stale,
    Disposed,
}

#[derive(Debug)]
pub struct TooltipViewModel {
    requested: Option<FeatureIdentity>,
    load_state: LoadState,
    mounted: bool,
}

impl Default for TooltipViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl TooltipViewModel {
    pub fn new() -> Self {
        Self {
            requested: None,
            load_state: LoadState::Loading,
            mounted: true,
        }
    }

    /// Called with the host's current identity on every display. Returns the
    /// identity to fetch, or `None` when nothing needs loading.
    pub fn on_show(&mut self, identity: &FeatureIdentity) -> Option<FeatureIdentity> {
        if !self.mounted || self.requested.as_ref() == Some(identity) {
            return None;
        }

        self.requested = Some(identity.clone());
        self.load_state = LoadState::Loading;
        Some(identity.clone())
    }

    /// Applies the result of the fetch started for `request`.
    ///
    /// A result is stale when its layer or its feature differs from the
    /// currently requested identity.
    pub fn on_fetched(&mut self, request: &FeatureIdentity, result: PropertyResult) -> FetchOutcome {
        if !self.mounted {
            return FetchOutcome::Disposed;
        }
        if self.requested.as_ref() != Some(request) {
            return FetchOutcome::Stale;
        }

        self.load_state = match result {
            Ok(properties) => LoadState::Loaded(properties),
            Err(e) => LoadState::Failed(e.message),
        };
        FetchOutcome::Applied
    }

    pub fn on_dispose(&mut self) {
        self.mounted = false;
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    /// Properties to render; empty while loading or after a failure.
    pub fn properties(&self) -> &[TooltipProperty] {
        match &self.load_state {
            LoadState::Loaded(properties) => properties,
            _ => &[],
        }
    }
}

#[cfg(test)]
impl TooltipViewModel {
    pub fn requested(&self) -> Option<&FeatureIdentity> {
        self.requested.as_ref()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }
}
