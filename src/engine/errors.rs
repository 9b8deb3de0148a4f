use crate::engine::config::ViewerConfigError;

#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    #[error("Viewer is already running")]
    AlreadyRunning,

    #[error("Viewer command channel is closed")]
    ChannelClosed,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ViewerConfigError),

    #[error("Cannot build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}
