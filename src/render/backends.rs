pub mod null;
pub mod text;
