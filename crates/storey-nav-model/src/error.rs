// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for scene indexing and navigation

use crate::Euid;
use thiserror::Error;

/// Result type alias for navigator operations
pub type Result<T> = std::result::Result<T, SceneError>;

/// Errors that can occur while indexing or navigating the scene
#[derive(Error, Debug)]
pub enum SceneError {
    /// A well-known container entity is missing from the scene graph.
    /// Fatal at startup: the panel must not be built without an index.
    #[error("expected entity \"{0}\" was not found in the scene graph")]
    ContainerNotFound(String),

    /// A persistent entity reference no longer resolves
    #[error("entity {0} not found")]
    EntityNotFound(Euid),

    /// An engine call failed
    #[error("engine call failed: {0}")]
    Engine(String),
}

impl SceneError {
    /// Create a new missing-container error
    pub fn container(name: impl Into<String>) -> Self {
        SceneError::ContainerNotFound(name.into())
    }

    /// Create a new engine-failure error
    pub fn engine(msg: impl Into<String>) -> Self {
        SceneError::Engine(msg.into())
    }
}
