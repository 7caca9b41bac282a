//! Panel components

mod storey_panel;
mod viewer_layout;

pub use storey_panel::StoreyPanel;
pub use viewer_layout::{ResetButton, ViewerLayout};
