//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state and keyboard event loop
//! - **[`panes`]** — stateless render functions for each visible pane (state,
//!   explanation, reference code, status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a loaded
//! [`Session`] and call [`App::run`] to start the event loop. The panes read
//! snapshots only through the [`DisplayState`] view contract; all column math
//! happens here, never in the core.
//!
//! [`Session`]: crate::session::Session
//! [`DisplayState`]: crate::trace::view::DisplayState
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
