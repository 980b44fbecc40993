//! folio TUI - a single-page animated portfolio in the terminal
//!
//! Renders the portfolio document from `folio-core` as a scrollable page:
//! a hero section with a boot-style loading screen, typewriter terminal
//! block and particle backdrop, an experience timeline, a project grid and
//! a contact section, tied together by a persistent navigation bar.
//!
//! # Architecture
//!
//! - **Compositor**: z-ordered layers (particles, page document, nav,
//!   menu, loading overlay); the page layer is a tall document buffer
//!   windowed by the scroll offset
//! - **Sections**: pure functions content -> buffer region
//! - **Viewport**: scroll model and per-element visibility tracking that
//!   feeds the once-only scroll reveals
//! - **App**: event loop, frame tick and state hand-offs

pub mod app;
pub mod compositor;
pub mod nav;
pub mod particles;
pub mod sections;
pub mod theme;
pub mod viewport;
pub mod widgets;

pub use app::App;
