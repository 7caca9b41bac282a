//! Storey-Nav Yew UI Components
//!
//! The navigation panel for the storey navigator: a storey list with
//! visibility and isolation controls, room entries that fly the camera, and
//! a reset button. Components are pure rendering over [`state::PanelState`];
//! every engine effect is a callback prop supplied by the viewer crate.

pub mod components;
pub mod state;
pub mod utils;

// Re-exports
pub use components::*;
pub use state::{use_panel_state, PanelAction, PanelState, PanelStateContext, SpaceRow, StoreyRow};
