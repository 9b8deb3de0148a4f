//! Render list and display items.
//!
//! The viewer does not draw anything itself. Rendering a [`ViewState`] produces
//! a [`RenderList`]: a flat, ordered sequence of [`DisplayItem`] commands that a
//! [`RenderBackend`] turns into pixels, terminal text or markup.
//!
//! # Example
//!
//! ```rust
//! use country_viewer::render::{Color, DisplayItem, RenderList};
//!
//! let mut list = RenderList::new();
//! list.add_command(DisplayItem::Clear { color: Color::from_u8(255, 255, 255, 255) });
//! list.add_command(DisplayItem::Field {
//!     label: "Region".into(),
//!     value: "Europe".into(),
//! });
//!
//! assert_eq!(list.field("Region"), Some("Europe"));
//! ```
//!
//! [`ViewState`]: crate::ViewState
//! [`RenderBackend`]: crate::render::backend::RenderBackend

/// RGBA color used for drawing commands.
///
/// Channels are represented as `f32` in the range `0.0 ..= 1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel
    pub r: f32,
    /// Green channel
    pub g: f32,
    /// Blue channel
    pub b: f32,
    /// Alpha channel (opacity)
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

    /// Creates a new color from `f32` channel values in the range `0.0 ..= 1.0`.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Color {
        Color { r, g, b, a }
    }

    /// Creates a new color from `u8` channel values in the range `0 ..= 255`.
    pub fn from_u8(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }
}

/// A single display item.
///
/// Items are appended to a [`RenderList`] in paint order.
#[derive(Clone, Debug, PartialEq)]
pub enum DisplayItem {
    /// Clear the entire surface with the given color.
    Clear {
        /// The color to clear the surface with.
        color: Color,
    },

    /// A heading. Level 1 is the page title, level 2 the country name.
    Heading { level: u8, text: String },

    /// The control that triggers a new fetch.
    Button {
        /// Text on the button.
        label: String,
        /// False when the control should not accept input.
        enabled: bool,
    },

    /// A plain run of text.
    TextRun { text: String, color: Color },

    /// A user-facing error message.
    ErrorMessage { text: String },

    /// An image reference.
    Image {
        /// Where the image lives.
        src: String,
        /// Accessibility text.
        alt: String,
    },

    /// A labelled value on the country card, e.g. `Capital: Lima`.
    Field { label: String, value: String },
}

/// A list of display items to be rendered.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderList {
    /// Sequence of drawing commands to execute.
    pub items: Vec<DisplayItem>,
}

impl RenderList {
    /// Creates a new, empty render list.
    pub fn new() -> Self {
        RenderList { items: Vec::new() }
    }

    /// Adds a new display item to the list.
    pub fn add_command(&mut self, command: DisplayItem) {
        self.items.push(command);
    }

    /// Clears all display items from the list.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Value of the first field with the given label.
    pub fn field(&self, label: &str) -> Option<&str> {
        self.items.iter().find_map(|item| match item {
            DisplayItem::Field { label: l, value } if l == label => Some(value.as_str()),
            _ => None,
        })
    }

    /// The trigger control, if present.
    pub fn button(&self) -> Option<(&str, bool)> {
        self.items.iter().find_map(|item| match item {
            DisplayItem::Button { label, enabled } => Some((label.as_str(), *enabled)),
            _ => None,
        })
    }

    /// Text of the first error message, if any.
    pub fn error_message(&self) -> Option<&str> {
        self.items.iter().find_map(|item| match item {
            DisplayItem::ErrorMessage { text } => Some(text.as_str()),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_u8_scales_channels() {
        let c = Color::from_u8(255, 0, 51, 255);
        assert_eq!(c, Color::new(1.0, 0.0, 0.2, 1.0));
    }

    #[test]
    fn lookups_find_first_match() {
        let mut list = RenderList::new();
        list.add_command(DisplayItem::Button { label: "Go".into(), enabled: false });
        list.add_command(DisplayItem::Field { label: "Region".into(), value: "Asia".into() });
        list.add_command(DisplayItem::Field { label: "Region".into(), value: "Other".into() });

        assert_eq!(list.button(), Some(("Go", false)));
        assert_eq!(list.field("Region"), Some("Asia"));
        assert_eq!(list.field("Capital"), None);
        assert_eq!(list.error_message(), None);

        list.clear();
        assert!(list.items.is_empty());
        assert_eq!(list.button(), None);
    }
}
