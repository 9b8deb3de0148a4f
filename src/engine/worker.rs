use crate::engine::context::ViewerContext;
use crate::engine::events::{ViewerCommand, ViewerEvent};
use tokio::sync::{broadcast, mpsc};

/// What interrupted an in-flight fetch.
enum Interrupt {
    /// Another command arrived before the fetch settled
    Command(ViewerCommand),
    /// Every handle is gone
    Closed,
}

/// Task loop that owns a [`ViewerContext`] and serves [`ViewerCommand`]s.
///
/// Commands are still read while a fetch is in flight. A new
/// `FetchRandomCountry` drops the running fetch before starting its own, so a
/// superseded response can never overwrite the state.
pub(crate) struct ViewerWorker {
    context: ViewerContext,
    cmd_rx: mpsc::Receiver<ViewerCommand>,
    event_tx: broadcast::Sender<ViewerEvent>,
}

impl ViewerWorker {
    pub(crate) fn new(
        context: ViewerContext,
        cmd_rx: mpsc::Receiver<ViewerCommand>,
        event_tx: broadcast::Sender<ViewerEvent>,
    ) -> Self {
        Self {
            context,
            cmd_rx,
            event_tx,
        }
    }

    pub(crate) async fn run(mut self) {
        log::debug!("Viewer: worker started");
        let _ = self.event_tx.send(ViewerEvent::ViewerStarted);

        let mut next = self.cmd_rx.recv().await;
        let reason = loop {
            match next.take() {
                None => break "all handles dropped",
                Some(ViewerCommand::Shutdown { reply }) => {
                    let _ = reply.send(());
                    break "shutdown requested";
                }
                Some(ViewerCommand::FetchRandomCountry) => match self.fetch_serving_commands().await {
                    None => next = self.cmd_rx.recv().await,
                    Some(Interrupt::Command(cmd)) => {
                        if matches!(cmd, ViewerCommand::FetchRandomCountry) {
                            log::info!("Viewer: in-flight fetch superseded");
                            let _ = self.event_tx.send(ViewerEvent::FetchSuperseded);
                        }
                        next = Some(cmd);
                    }
                    Some(Interrupt::Closed) => next = None,
                },
            }
        };

        log::debug!("Viewer: worker exiting ({reason})");
        let _ = self.event_tx.send(ViewerEvent::ViewerShutdown {
            reason: reason.to_string(),
        });
    }

    /// Runs one fetch cycle while listening for commands. Returns `None` once
    /// the fetch settled, or what interrupted it. An interrupted fetch is
    /// dropped before this returns.
    async fn fetch_serving_commands(&mut self) -> Option<Interrupt> {
        let fetch = self.context.fetch_random_country();
        tokio::pin!(fetch);

        tokio::select! {
            biased;
            cmd = self.cmd_rx.recv() => Some(match cmd {
                Some(cmd) => Interrupt::Command(cmd),
                None => Interrupt::Closed,
            }),
            _ = &mut fetch => None,
        }
    }
}
