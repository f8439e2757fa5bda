//! Procedural generator for the multi-resolution backup icon.

pub mod draw;
pub mod encode;
pub mod models;
pub mod render;

pub use encode::{encode_icon, render_all, write_icon, Report};
pub use models::{ICON_SIZES, OUTPUT_FILE};
pub use render::{render_icon, Layout};
