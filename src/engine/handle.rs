use crate::engine::events::{ViewerCommand, ViewerEvent};
use crate::engine::state::ViewState;
use crate::render::{render_view, RenderList, RenderOptions};
use crate::ViewerError;
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc, oneshot, watch};

/// Cloneable handle to a running viewer.
///
/// Dropping every handle stops the worker, which abandons any fetch that is
/// still in flight.
#[derive(Clone)]
pub struct ViewerHandle {
    /// Command sender into the worker
    cmd_tx: mpsc::Sender<ViewerCommand>,
    /// Event sender, kept to hand out subscriptions
    event_tx: broadcast::Sender<ViewerEvent>,
    /// Latest state snapshot
    state_rx: watch::Receiver<ViewState>,
    render_options: Arc<RenderOptions>,
}

impl std::fmt::Debug for ViewerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewerHandle")
            .field("cmd_tx", &self.cmd_tx)
            .field("state", &*self.state_rx.borrow())
            .finish()
    }
}

impl ViewerHandle {
    pub(crate) fn new(
        cmd_tx: mpsc::Sender<ViewerCommand>,
        event_tx: broadcast::Sender<ViewerEvent>,
        state_rx: watch::Receiver<ViewState>,
        render_options: RenderOptions,
    ) -> Self {
        Self {
            cmd_tx,
            event_tx,
            state_rx,
            render_options: Arc::new(render_options),
        }
    }

    /// Ask the viewer to fetch a new random country. Returns as soon as the
    /// command is queued; observe the outcome through the state or events.
    pub async fn fetch_random_country(&self) -> Result<(), ViewerError> {
        self.cmd_tx
            .send(ViewerCommand::FetchRandomCountry)
            .await
            .map_err(|_| ViewerError::ChannelClosed)
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> ViewState {
        self.state_rx.borrow().clone()
    }

    /// Receiver that is notified on every state change.
    pub fn watch_state(&self) -> watch::Receiver<ViewState> {
        self.state_rx.clone()
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<ViewerEvent> {
        self.event_tx.subscribe()
    }

    /// Render the current state with the viewer's render options.
    pub fn render_list(&self) -> RenderList {
        render_view(&self.state_rx.borrow(), &self.render_options)
    }

    /// Stop the worker and wait until it acknowledged.
    pub async fn shutdown(&self) -> Result<(), ViewerError> {
        let (tx, rx) = oneshot::channel();

        self.cmd_tx
            .send(ViewerCommand::Shutdown { reply: tx })
            .await
            .map_err(|_| ViewerError::ChannelClosed)?;

        rx.await.map_err(|_| ViewerError::ChannelClosed)
    }
}
