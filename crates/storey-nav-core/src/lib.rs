// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Storey-Nav Core - Scene indexing and navigation controllers
//!
//! This crate implements the navigator's behavior on top of the engine
//! contract defined in `storey-nav-model`:
//!
//! - **Scene indexing** - one startup walk over the engine scene graph,
//!   collecting storeys and their rooms into order-stable lookup tables
//! - **Visibility/isolation** - per-storey visibility flags plus a single
//!   isolated storey, translated into engine visibility calls
//! - **Navigation** - constant-duration camera travel toward rooms and the
//!   initial view
//! - **Session bootstrap** - the startup sequence that captures the initial
//!   pose and builds the index before any UI exists
//!
//! Everything is generic over the engine type, so the same code runs against
//! the wasm SDK bridge in the viewer crate and against mock engines in the
//! tests here.

mod indexer;
mod navigation;
mod picking;
mod session;
mod transform;
mod visibility;

#[cfg(test)]
mod mock;

pub use indexer::{
    index_scene, IndexedScene, SceneIndex, SPACE_CONTAINER_NAME, STOREY_CONTAINER_NAME,
};
pub use navigation::{Navigator, MIN_TRAVEL_DISTANCE, TRAVEL_SECONDS, VANTAGE_OFFSET};
pub use picking::ifc_class_of;
pub use session::{bootstrap, Viewer, PROJECT_ENTITY_NAME};
pub use transform::{apply_matrix, distance};
pub use visibility::VisibilityState;
