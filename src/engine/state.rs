use crate::engine::country::CountryRecord;
use crate::engine::events::ViewerEvent;
use tokio::sync::{broadcast, watch};

/// State owned by a single viewer. Created empty, mutated only by a fetch
/// cycle and dropped together with the viewer.
///
/// `selected` and `error` are not cleared when a new fetch starts loading;
/// they keep describing the previous cycle until the new one settles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Last successfully fetched country
    pub selected: Option<CountryRecord>,
    /// True while a fetch is in flight
    pub loading: bool,
    /// User-facing failure message of the last cycle
    pub error: Option<String>,
}

/// Holds the view state and publishes every change to watchers and event
/// subscribers. All mutations go through [`StateCell::update`].
pub(crate) struct StateCell {
    state: ViewState,
    /// Bumped on every mutation
    epoch: u64,
    state_tx: watch::Sender<ViewState>,
    event_tx: broadcast::Sender<ViewerEvent>,
}

impl StateCell {
    pub(crate) fn new(event_tx: broadcast::Sender<ViewerEvent>) -> Self {
        let (state_tx, _rx) = watch::channel(ViewState::default());
        Self {
            state: ViewState::default(),
            epoch: 0,
            state_tx,
            event_tx,
        }
    }

    #[inline]
    pub(crate) fn state(&self) -> &ViewState {
        &self.state
    }

    #[inline]
    pub(crate) fn epoch(&self) -> u64 {
        self.epoch
    }

    pub(crate) fn watch(&self) -> watch::Receiver<ViewState> {
        self.state_tx.subscribe()
    }

    pub(crate) fn events(&self) -> &broadcast::Sender<ViewerEvent> {
        &self.event_tx
    }

    /// Apply a mutation and publish the resulting snapshot.
    pub(crate) fn update(&mut self, f: impl FnOnce(&mut ViewState)) {
        f(&mut self.state);
        self.epoch = self.epoch.wrapping_add(1);

        self.state_tx.send_replace(self.state.clone());
        // No subscribers is fine; nobody is rendering yet.
        let _ = self.event_tx.send(ViewerEvent::StateChanged {
            epoch: self.epoch,
            state: self.state.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_bumps_epoch_and_publishes() {
        let (tx, mut rx) = broadcast::channel(8);
        let mut cell = StateCell::new(tx);
        let watcher = cell.watch();

        assert_eq!(cell.epoch(), 0);
        cell.update(|s| s.loading = true);

        assert_eq!(cell.epoch(), 1);
        assert!(cell.state().loading);
        assert!(watcher.borrow().loading);

        match rx.try_recv().unwrap() {
            ViewerEvent::StateChanged { epoch, state } => {
                assert_eq!(epoch, 1);
                assert!(state.loading);
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn update_without_subscribers_does_not_fail() {
        let (tx, rx) = broadcast::channel(8);
        drop(rx);
        let mut cell = StateCell::new(tx);
        cell.update(|s| s.error = Some("boom".into()));
        assert_eq!(cell.state().error.as_deref(), Some("boom"));
    }
}
