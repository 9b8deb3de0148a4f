use crate::render::RenderList;

/// Core backend interface. A backend consumes complete render lists, one
/// frame at a time.
pub trait RenderBackend {
    /// Human readable backend name, used in logs.
    fn name(&self) -> &str;

    /// Present one frame.
    fn render(&mut self, list: &RenderList) -> anyhow::Result<()>;

    /// Number of frames presented so far.
    fn frames(&self) -> u64;
}
