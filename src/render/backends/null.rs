use crate::render::backend::RenderBackend;
use crate::render::RenderList;
use anyhow::Result;

/// Null backend renderer that does not perform any rendering.
#[derive(Debug, Default)]
pub struct NullBackend {
    frame_id: u64,
}

impl NullBackend {
    /// Creates a new instance of the null backend.
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderBackend for NullBackend {
    fn name(&self) -> &str {
        "NullBackend"
    }

    fn render(&mut self, _list: &RenderList) -> Result<()> {
        self.frame_id = self.frame_id.wrapping_add(1);
        Ok(())
    }

    fn frames(&self) -> u64 {
        self.frame_id
    }
}
