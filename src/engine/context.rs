use crate::engine::config::ViewerConfig;
use crate::engine::country::CountryRecord;
use crate::engine::errors::ViewerError;
use crate::engine::events::ViewerEvent;
use crate::engine::state::{StateCell, ViewState};
use crate::net::fetch;
use crate::render::{render_view, RenderList};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::value::RawValue;
use tokio::sync::{broadcast, watch};
use url::Url;

/// Anything that can go wrong between issuing the request and picking a
/// country. Users only ever see [`FetchError::USER_MESSAGE`]; the variant
/// detail goes to the log.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error(transparent)]
    Net(#[from] reqwest::Error),
    #[error("request failed: {status} {reason}")]
    Status { status: u16, reason: String },
    #[error("cannot decode country list: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("country list is empty")]
    EmptyList,
}

impl FetchError {
    pub const USER_MESSAGE: &'static str = "Failed to load country data. Please try again.";

    pub fn user_message(&self) -> &'static str {
        Self::USER_MESSAGE
    }
}

/// The country viewer component.
///
/// A context owns the [`ViewState`] and the HTTP client, and exposes a single
/// mutation entry point: [`fetch_random_country`](Self::fetch_random_country).
/// Every mutation is published as a [`ViewerEvent::StateChanged`] on the event
/// channel and on the state watch.
pub struct ViewerContext {
    config: ViewerConfig,
    client: reqwest::Client,
    rng: StdRng,
    cell: StateCell,
}

impl ViewerContext {
    pub fn new(config: ViewerConfig, event_tx: broadcast::Sender<ViewerEvent>) -> Result<Self, ViewerError> {
        let mut builder = reqwest::Client::builder();
        if let Some(ua) = &config.user_agent {
            builder = builder.user_agent(ua.clone());
        }
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(Self {
            config,
            client,
            rng,
            cell: StateCell::new(event_tx),
        })
    }

    /// Fetch all countries and select one uniformly at random.
    ///
    /// - Sets `loading` and clears `error` before the request goes out. The
    ///   previous `selected` is kept.
    /// - On success `selected` becomes the picked country.
    /// - On any failure `error` is set to [`FetchError::USER_MESSAGE`] and
    ///   `selected` is left untouched.
    /// - `loading` is cleared once the cycle ends, also when this future is
    ///   dropped before completion.
    pub async fn fetch_random_country(&mut self) {
        let mut guard = LoadingGuard::begin(&mut self.cell);

        let result = load_random_country(&self.client, &self.config.endpoint, &mut self.rng).await;
        guard.settle(match result {
            Ok(country) => {
                log::info!("Viewer: selected {}", country.common_name());
                Outcome::Selected(country)
            }
            Err(e) => {
                log::warn!("Viewer: fetching {} failed: {e}", self.config.endpoint);
                Outcome::Failed(e.user_message())
            }
        });
    }

    #[inline]
    pub fn state(&self) -> &ViewState {
        self.cell.state()
    }

    /// Number of state mutations so far
    #[inline]
    pub fn scene_epoch(&self) -> u64 {
        self.cell.epoch()
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Receiver that always holds the latest state snapshot.
    pub fn watch_state(&self) -> watch::Receiver<ViewState> {
        self.cell.watch()
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<ViewerEvent> {
        self.cell.events().subscribe()
    }

    /// Render the current state.
    pub fn render_list(&self) -> RenderList {
        render_view(self.cell.state(), &self.config.render_options())
    }
}

enum Outcome {
    Selected(CountryRecord),
    Failed(&'static str),
}

/// Brackets a fetch cycle: `begin` raises the loading flag, and dropping the
/// guard lowers it again together with whatever outcome was settled.
struct LoadingGuard<'a> {
    cell: &'a mut StateCell,
    outcome: Option<Outcome>,
}

impl<'a> LoadingGuard<'a> {
    fn begin(cell: &'a mut StateCell) -> Self {
        cell.update(|s| {
            s.loading = true;
            s.error = None;
        });
        Self { cell, outcome: None }
    }

    fn settle(&mut self, outcome: Outcome) {
        self.outcome = Some(outcome);
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        let outcome = self.outcome.take();

        let follow_up = match &outcome {
            Some(Outcome::Selected(c)) => Some(ViewerEvent::CountrySelected {
                name: c.common_name().to_string(),
            }),
            Some(Outcome::Failed(msg)) => Some(ViewerEvent::FetchFailed {
                message: msg.to_string(),
            }),
            None => None,
        };

        self.cell.update(|s| {
            match outcome {
                Some(Outcome::Selected(c)) => s.selected = Some(c),
                Some(Outcome::Failed(msg)) => s.error = Some(msg.to_string()),
                None => {}
            }
            s.loading = false;
        });

        if let Some(ev) = follow_up {
            let _ = self.cell.events().send(ev);
        }
    }
}

async fn load_random_country(
    client: &reqwest::Client,
    endpoint: &Url,
    rng: &mut impl Rng,
) -> Result<CountryRecord, FetchError> {
    let resp = fetch(client, endpoint.clone()).await?;
    if !resp.is_success() {
        return Err(FetchError::Status {
            status: resp.status,
            reason: resp.status_text,
        });
    }

    // Entries stay raw text so only the picked one is decoded, with the
    // provider's key order intact.
    let countries: Vec<Box<RawValue>> = resp.json()?;
    let picked = pick_random(countries, rng)?;
    Ok(serde_json::from_str(picked.get())?)
}

/// Removes and returns one element chosen with a uniform index in `[0, len)`.
fn pick_random<T>(mut items: Vec<T>, rng: &mut impl Rng) -> Result<T, FetchError> {
    if items.is_empty() {
        return Err(FetchError::EmptyList);
    }
    let idx = rng.random_range(0..items.len());
    Ok(items.swap_remove(idx))
}
