//! Shared drawing helpers for the section renderers.

pub mod loading_screen;
pub mod reveal_text;

pub use reveal_text::{cascade_text, faded_string, slide_up, SlideReveal};
