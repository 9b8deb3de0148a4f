pub mod backend;
pub mod backends;

mod format;
pub use format::{format_population, NumberLocale, UnknownLocale};

mod render_list;
pub use render_list::*;

mod view;
pub use view::{render_view, CountryCard, RenderOptions, FLAG_ALT_FALLBACK, LOADING_TEXT, NOT_AVAILABLE};
