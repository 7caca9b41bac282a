// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Session bootstrap
//!
//! The startup sequence after the engine session is connected: capture the
//! initial camera pose, aim the orbit point at the project's bounding-box
//! center, then index the scene. Only when all of that has succeeded is a
//! [`Viewer`] handed to the UI; an indexing failure aborts startup before
//! any panel exists.

use crate::indexer::{index_scene, IndexedScene};
use crate::navigation::Navigator;
use crate::transform::apply_matrix;
use crate::visibility::VisibilityState;
use storey_nav_model::{
    CameraControl, Engine, EntityOf, Euid, Result, SceneEntity, SceneError, SceneGraph,
};

/// Display name of the project root entity created by the IFC importer
pub const PROJECT_ENTITY_NAME: &str = "IfcProject";

/// Everything the panel and its event handlers operate on after startup
pub struct Viewer<E: Engine> {
    pub engine: E,
    pub scene: IndexedScene<EntityOf<E>>,
    pub visibility: VisibilityState,
    pub navigator: Navigator,
}

impl<E: Engine> std::fmt::Debug for Viewer<E>
where
    E: std::fmt::Debug,
    EntityOf<E>: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Viewer")
            .field("engine", &self.engine)
            .field("scene", &self.scene)
            .field("visibility", &self.visibility)
            .field("navigator", &self.navigator)
            .finish()
    }
}

impl<E: Engine> Viewer<E> {
    /// Flip one storey's visibility; returns the new flag
    pub fn toggle_storey_visibility(&mut self, index: usize) -> bool {
        self.visibility.toggle_visibility(&mut self.scene, index)
    }

    /// Isolate one storey or clear its isolation; returns the new state
    pub fn isolate_storey(&mut self, index: usize) -> Option<usize> {
        self.visibility.isolate(&mut self.scene, index)
    }

    /// Persistent id of the space at a flat-list index
    pub fn space_euid(&self, space_index: usize) -> Euid {
        self.scene.index.space(space_index).euid.clone()
    }
}

/// Connect-time bootstrap
///
/// Fails with [`SceneError::ContainerNotFound`] when the well-known project
/// or storeys container entities are missing; the caller must not build the
/// panel in that case.
pub async fn bootstrap<E: Engine>(engine: E) -> Result<Viewer<E>> {
    let initial_camera_position = engine.camera_position().await?;

    let project = engine
        .find_entities_by_name(PROJECT_ENTITY_NAME)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| SceneError::container(PROJECT_ENTITY_NAME))?;
    let aabb = project
        .local_aabb()
        .ok_or_else(|| SceneError::engine("project entity has no bounding box"))?;
    let base_orbit_point = apply_matrix(&project.global_matrix(), aabb.center());
    engine.set_orbit_point(base_orbit_point);

    let scene = index_scene(&engine).await?;
    log::info!(
        "scene ready: {} storeys, {} spaces",
        scene.index.storey_count(),
        scene.index.spaces().len()
    );

    Ok(Viewer {
        engine,
        scene,
        visibility: VisibilityState::default(),
        navigator: Navigator::new(initial_camera_position, base_orbit_point),
    })
}
