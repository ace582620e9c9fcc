//! UI drawing module
//!
//! Organized into focused submodules:
//! - `components`: header, footer, diagnostic line
//! - `panels`: the two main panels (tool navigation, mounted tool panel)
//! - `styling`: color schemes and style constants

mod components;
mod panels;
pub mod styling;

pub use components::{render_footer, render_header};
pub use panels::{render_nav_panel, render_tool_panel};
