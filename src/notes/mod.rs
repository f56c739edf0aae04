//! Release notes rendering.

pub mod render;

pub use render::{render_html, render_markdown};
