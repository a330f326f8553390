//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`controls`]: Algorithm selector and element count header
//! - [`bars`]: The dataset as colored bars
//! - [`status`]: Status bar with keybindings and run state
//!
//! Each pane module exports a `render_*` function taking a `*RenderData`
//! struct, so panes never reach into the controller themselves.

pub mod bars;
pub mod controls;
pub mod status;

pub use bars::{render_bars_pane, BarsRenderData};
pub use controls::{render_controls_pane, ControlsRenderData};
pub use status::{render_status_bar, StatusRenderData};
