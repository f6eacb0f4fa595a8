//! Data models shared by the config, preview and style layers.

pub mod color;

pub use color::HexColor;
