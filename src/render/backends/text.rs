//! Plain-text backend.
//!
//! Writes each frame as a block of lines to any [`Write`] sink, separated by a
//! rule. Useful for terminals, logs and tests.

use crate::render::backend::RenderBackend;
use crate::render::{DisplayItem, RenderList};
use anyhow::{Context, Result};
use std::io::{self, Write};

const FRAME_RULE: &str = "----------------------------------------";

pub struct TextBackend<W: Write> {
    out: W,
    frame_id: u64,
}

impl TextBackend<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TextBackend<W> {
    pub fn new(out: W) -> Self {
        Self { out, frame_id: 0 }
    }

    /// Give back the underlying sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderBackend for TextBackend<W> {
    fn name(&self) -> &str {
        "TextBackend"
    }

    fn render(&mut self, list: &RenderList) -> Result<()> {
        let frame = render_to_string(list);
        write_frame(&mut self.out, &frame).context("cannot write frame")?;

        self.frame_id = self.frame_id.wrapping_add(1);
        Ok(())
    }

    fn frames(&self) -> u64 {
        self.frame_id
    }
}

fn write_frame<W: Write>(out: &mut W, frame: &str) -> io::Result<()> {
    writeln!(out, "{FRAME_RULE}")?;
    out.write_all(frame.as_bytes())?;
    out.flush()
}

/// Text rendition of a render list, one line per visible item.
pub fn render_to_string(list: &RenderList) -> String {
    let mut out = String::new();
    for item in &list.items {
        let line = match item {
            DisplayItem::Clear { .. } => continue,
            DisplayItem::Heading { level, text } => {
                format!("{} {text}", "#".repeat(usize::from(*level).max(1)))
            }
            DisplayItem::Button { label, enabled: true } => format!("[ {label} ]"),
            DisplayItem::Button { label, enabled: false } => format!("[ {label} ] (disabled)"),
            DisplayItem::TextRun { text, .. } => text.clone(),
            DisplayItem::ErrorMessage { text } => format!("! {text}"),
            DisplayItem::Image { src, alt } => format!("[image: {alt}] {src}"),
            DisplayItem::Field { label, value } => format!("{label}: {value}"),
        };
        out.push_str(&line);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Color;

    fn sample() -> RenderList {
        RenderList {
            items: vec![
                DisplayItem::Clear { color: Color::WHITE },
                DisplayItem::Heading { level: 1, text: "Countries".into() },
                DisplayItem::Button { label: "Get a Country".into(), enabled: false },
                DisplayItem::TextRun { text: "Loading...".into(), color: Color::BLACK },
                DisplayItem::ErrorMessage { text: "Nope".into() },
                DisplayItem::Heading { level: 2, text: "Peru".into() },
                DisplayItem::Image { src: "pe.png".into(), alt: "Flag".into() },
                DisplayItem::Field { label: "Capital".into(), value: "Lima".into() },
            ],
        }
    }

    #[test]
    fn renders_one_line_per_item() {
        assert_eq!(
            render_to_string(&sample()),
            "# Countries\n\
             [ Get a Country ] (disabled)\n\
             Loading...\n\
             ! Nope\n\
             ## Peru\n\
             [image: Flag] pe.png\n\
             Capital: Lima\n"
        );
    }

    #[test]
    fn writes_frames_to_sink() {
        let mut backend = TextBackend::new(Vec::new());
        backend.render(&sample()).unwrap();
        backend.render(&RenderList::new()).unwrap();
        assert_eq!(backend.frames(), 2);

        let text = String::from_utf8(backend.into_inner()).unwrap();
        assert_eq!(text.matches(FRAME_RULE).count(), 2);
        assert!(text.contains("Capital: Lima"));
    }
}
