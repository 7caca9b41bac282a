// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Storey-Nav Model - Trait definitions and shared types for the storey navigator
//!
//! This crate provides the core abstractions for navigating a building model
//! that is rendered by an external, hosted engine. It defines the records the
//! scene indexer produces and the trait contract the rest of the navigator
//! uses to talk to the engine, so backends (the wasm SDK bridge, mock engines
//! in tests) can be swapped freely.
//!
//! # Architecture
//!
//! The crate is organized around several key traits:
//!
//! - [`SceneEntity`] - A handle to one entity in the engine's scene graph
//! - [`SceneGraph`] - Entity lookup by name or persistent id
//! - [`CameraControl`] - Camera pose queries and travel commands
//! - [`ScreenPicker`] - Screen-space ray casting
//! - [`Engine`] - Umbrella trait tying the above together over one entity type
//!
//! # Example
//!
//! ```ignore
//! use storey_nav_model::{Engine, SceneGraph};
//!
//! async fn storey_names<E: Engine>(engine: &E) -> Vec<String> {
//!     let container = engine
//!         .find_entities_by_name("IfcBuildingStorey")
//!         .await
//!         .unwrap();
//!     // ...
//! }
//! ```

pub mod error;
pub mod spatial;
pub mod traits;
pub mod types;

// Re-export all public types
pub use error::*;
pub use spatial::*;
pub use traits::*;
pub use types::*;
