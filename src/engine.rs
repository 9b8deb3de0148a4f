//! Country viewer engine.
//!
//! The engine owns a single [`ViewState`] and mutates it only through
//! [`ViewerContext::fetch_random_country`]. Hosts either drive a context
//! directly, or start a [`CountryViewer`] which runs the context inside a
//! worker task and hands out a cloneable [`ViewerHandle`].

pub mod config;
mod context;
pub mod country;
pub mod errors;
pub mod events;
mod handle;
mod state;
mod viewer;
mod worker;

pub use config::{ViewerConfig, ViewerConfigBuilder, ViewerConfigError};
pub use context::{FetchError, ViewerContext};
pub use country::{CountryFlags, CountryName, CountryRecord};
pub use errors::ViewerError;
pub use events::{ViewerCommand, ViewerEvent};
pub use handle::ViewerHandle;
pub use state::ViewState;
pub use viewer::CountryViewer;

/// Capacity of the command and event channels unless configured otherwise.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 64;
