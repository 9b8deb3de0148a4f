//! Fetches one random country and prints every frame as text.
//!
//! ```sh
//! cargo run --example random_country               # live restcountries.com
//! cargo run --example random_country -- <url> de   # other endpoint, German grouping
//! ```

use country_viewer::render::backend::RenderBackend;
use country_viewer::render::backends::text::TextBackend;
use country_viewer::render::{render_view, NumberLocale};
use country_viewer::{CountryViewer, ViewerConfig, ViewerEvent};
use tokio::sync::broadcast::error::RecvError;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let mut builder = ViewerConfig::builder();
    if let Some(endpoint) = args.next() {
        builder = builder.endpoint(endpoint);
    }
    if let Some(locale) = args.next() {
        builder = builder.locale(locale.parse::<NumberLocale>()?);
    }
    let config = builder.disable_trigger_while_loading(true).build()?;
    let options = config.render_options();

    let mut viewer = CountryViewer::new(Some(config));
    let mut events = viewer.subscribe_events();
    let (handle, join_handle) = viewer.start()?;

    let mut backend = TextBackend::stdout();
    backend.render(&handle.render_list())?;

    // Pressing the button
    handle.fetch_random_country().await?;

    loop {
        tokio::select! {
            ev = events.recv() => match ev {
                Ok(ViewerEvent::StateChanged { state, .. }) => {
                    backend.render(&render_view(&state, &options))?;
                    if !state.loading {
                        break;
                    }
                }
                Ok(other) => log::debug!("event: {other}"),
                Err(RecvError::Lagged(n)) => log::warn!("missed {n} events"),
                Err(RecvError::Closed) => break,
            },
            _ = tokio::signal::ctrl_c() => {
                log::info!("interrupted");
                break;
            }
        }
    }

    handle.shutdown().await?;
    join_handle.await?;
    log::info!("{} frames rendered by {}", backend.frames(), backend.name());
    Ok(())
}
