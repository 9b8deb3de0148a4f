use crate::engine::context::ViewerContext;
use crate::engine::events::{ViewerCommand, ViewerEvent};
use crate::engine::handle::ViewerHandle;
use crate::engine::worker::ViewerWorker;
use crate::{ViewerConfig, ViewerError};
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Owner of a country viewer.
///
/// Subscribe to events before calling [`start`](Self::start) to see the
/// viewer's very first events.
pub struct CountryViewer {
    /// Configuration for the viewer
    config: ViewerConfig,
    /// Event sender, shared with the worker and every handle
    event_tx: broadcast::Sender<ViewerEvent>,
    /// Has the worker been spawned?
    running: bool,
}

impl CountryViewer {
    /// Create a new viewer.
    ///
    /// If `config` is `None`, [`ViewerConfig::default`] is used.
    ///
    /// ```
    /// let viewer = country_viewer::CountryViewer::new(None);
    /// assert_eq!(viewer.config().trigger_label, "Get a Country");
    /// ```
    pub fn new(config: Option<ViewerConfig>) -> Self {
        let config = config.unwrap_or_default();
        let (event_tx, _first_rx) = broadcast::channel::<ViewerEvent>(config.channel_capacity);

        Self {
            config,
            event_tx,
            running: false,
        }
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<ViewerEvent> {
        self.event_tx.subscribe()
    }

    /// Spawn the worker on the current tokio runtime and return a handle to it
    /// together with the worker's join handle.
    pub fn start(&mut self) -> Result<(ViewerHandle, JoinHandle<()>), ViewerError> {
        if self.running {
            return Err(ViewerError::AlreadyRunning);
        }

        let context = ViewerContext::new(self.config.clone(), self.event_tx.clone())?;
        let (cmd_tx, cmd_rx) = mpsc::channel::<ViewerCommand>(self.config.channel_capacity);

        let handle = ViewerHandle::new(
            cmd_tx,
            self.event_tx.clone(),
            context.watch_state(),
            self.config.render_options(),
        );
        let worker = ViewerWorker::new(context, cmd_rx, self.event_tx.clone());
        let join_handle = tokio::spawn(worker.run());

        self.running = true;
        log::info!("Viewer: started, endpoint {}", self.config.endpoint);

        Ok((handle, join_handle))
    }
}
