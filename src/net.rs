//! Network layer.
//!
//! A single buffered GET is all the viewer needs; see [`fetch`].

mod fetch;
mod response;

pub use fetch::fetch;
pub use response::Response;
