//! Viewer commands and events.
//!
//! Hosts talk to a running viewer by sending [`ViewerCommand`]s through a
//! [`ViewerHandle`](crate::ViewerHandle) and observe it by subscribing to the
//! broadcast stream of [`ViewerEvent`]s.

use crate::engine::state::ViewState;
use std::fmt::Display;
use tokio::sync::oneshot;

/// Commands that can be sent to a running viewer
#[derive(Debug)]
pub enum ViewerCommand {
    /// Fetch the country list and select one at random. Supersedes a fetch
    /// that is still in flight.
    FetchRandomCountry,
    /// Stop the worker. In-flight fetches are abandoned.
    Shutdown { reply: oneshot::Sender<()> },
}

#[derive(Debug, Clone)]
pub enum ViewerEvent {
    // ****************************************
    // ** Viewer lifecycle
    /// Worker task has started
    ViewerStarted,
    /// Worker task has stopped
    ViewerShutdown { reason: String },

    // ****************************************
    // ** State
    /// The view state changed and should be re-rendered
    StateChanged { epoch: u64, state: ViewState },

    // ****************************************
    // ** Fetch outcome
    /// A country was picked
    CountrySelected { name: String },
    /// The fetch failed. `message` is the user-facing text.
    FetchFailed { message: String },
    /// An in-flight fetch was abandoned for a newer one
    FetchSuperseded,
}

impl ViewerEvent {
    /// The state snapshot carried by this event, if any.
    pub fn state(&self) -> Option<&ViewState> {
        match self {
            ViewerEvent::StateChanged { state, .. } => Some(state),
            _ => None,
        }
    }
}

impl Display for ViewerEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewerEvent::ViewerStarted => write!(f, "ViewerStarted"),
            ViewerEvent::ViewerShutdown { reason } => write!(f, "ViewerShutdown ({reason})"),
            ViewerEvent::StateChanged { epoch, state } => write!(
                f,
                "StateChanged #{epoch} (loading={}, error={}, selected={})",
                state.loading,
                state.error.is_some(),
                state
                    .selected
                    .as_ref()
                    .map(|c| c.common_name())
                    .unwrap_or("-"),
            ),
            ViewerEvent::CountrySelected { name } => write!(f, "CountrySelected ({name})"),
            ViewerEvent::FetchFailed { message } => write!(f, "FetchFailed ({message})"),
            ViewerEvent::FetchSuperseded => write!(f, "FetchSuperseded"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_is_only_carried_by_state_changed() {
        let ev = ViewerEvent::StateChanged {
            epoch: 3,
            state: ViewState {
                loading: true,
                ..Default::default()
            },
        };
        assert!(ev.state().unwrap().loading);
        assert!(ViewerEvent::FetchSuperseded.state().is_none());
    }

    #[test]
    fn display_is_compact() {
        let ev = ViewerEvent::StateChanged {
            epoch: 2,
            state: ViewState::default(),
        };
        assert_eq!(
            ev.to_string(),
            "StateChanged #2 (loading=false, error=false, selected=-)"
        );
        assert_eq!(
            ViewerEvent::CountrySelected { name: "Peru".into() }.to_string(),
            "CountrySelected (Peru)"
        );
    }
}
