//! The render contract: a pure function from [`ViewState`] to [`RenderList`].

use crate::{CountryRecord, ViewState};
use crate::render::format::{format_population, NumberLocale};
use crate::render::{Color, DisplayItem, RenderList};

pub const FLAG_ALT_FALLBACK: &str = "Flag";
pub const NOT_AVAILABLE: &str = "N/A";
pub const LOADING_TEXT: &str = "Loading...";

const BACKGROUND: Color = Color::WHITE;
const TEXT_COLOR: Color = Color::new(0.2, 0.2, 0.2, 1.0);

/// Settings that shape the rendered view. Usually taken from
/// [`ViewerConfig::render_options`](crate::ViewerConfig::render_options).
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub title: String,
    pub trigger_label: String,
    pub locale: NumberLocale,
    pub disable_trigger_while_loading: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        crate::ViewerConfig::default().render_options()
    }
}

/// Display-ready strings for one country, with every fallback applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryCard {
    pub name: String,
    pub flag_src: String,
    pub flag_alt: String,
    pub capital: String,
    pub population: String,
    pub region: String,
    pub languages: String,
}

impl CountryCard {
    pub fn from_record(record: &CountryRecord, locale: NumberLocale) -> Self {
        let languages: Vec<&str> = record.language_names().collect();

        Self {
            name: record.common_name().to_string(),
            flag_src: record.flag_image_url().to_string(),
            flag_alt: non_empty_or(record.flag_alt_text(), FLAG_ALT_FALLBACK),
            capital: non_empty_or(record.first_capital(), NOT_AVAILABLE),
            population: format_population(record.population, locale),
            region: record.region.clone(),
            languages: if languages.is_empty() {
                NOT_AVAILABLE.to_string()
            } else {
                languages.join(", ")
            },
        }
    }
}

fn non_empty_or(value: Option<&str>, fallback: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => fallback.to_string(),
    }
}

/// Render the view for the given state.
///
/// Title and trigger are always present. The loading indicator, the error
/// message and the country card follow, each only when the state has them.
pub fn render_view(state: &ViewState, opts: &RenderOptions) -> RenderList {
    let mut list = RenderList::new();

    list.add_command(DisplayItem::Clear { color: BACKGROUND });
    list.add_command(DisplayItem::Heading {
        level: 1,
        text: opts.title.clone(),
    });
    list.add_command(DisplayItem::Button {
        label: opts.trigger_label.clone(),
        enabled: !(state.loading && opts.disable_trigger_while_loading),
    });

    if state.loading {
        list.add_command(DisplayItem::TextRun {
            text: LOADING_TEXT.to_string(),
            color: TEXT_COLOR,
        });
    }

    if let Some(error) = &state.error {
        list.add_command(DisplayItem::ErrorMessage { text: error.clone() });
    }

    if let Some(country) = &state.selected {
        let card = CountryCard::from_record(country, opts.locale);
        list.add_command(DisplayItem::Heading { level: 2, text: card.name });
        list.add_command(DisplayItem::Image {
            src: card.flag_src,
            alt: card.flag_alt,
        });
        for (label, value) in [
            ("Capital", card.capital),
            ("Population", card.population),
            ("Region", card.region),
            ("Languages", card.languages),
        ] {
            list.add_command(DisplayItem::Field {
                label: label.to_string(),
                value,
            });
        }
    }

    list
}
