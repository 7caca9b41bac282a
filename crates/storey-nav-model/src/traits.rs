// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Engine contract traits
//!
//! These traits describe the slice of the hosted rendering SDK the navigator
//! relies on. The SDK itself owns the session lifecycle, rendering, camera
//! interpolation, and scene-graph storage; the navigator only issues the
//! calls below. Implemented by the wasm bridge in the viewer crate and by
//! mock engines in tests. Consumers are generic over the engine type, so the
//! async methods use native `async fn` rather than boxed futures.

#![allow(async_fn_in_trait)]

use crate::{Aabb, Euid, Result, Rtid};

/// Handle to one entity in the engine's scene graph
///
/// Handles are cheap to clone; they refer to engine-owned state rather than
/// owning any of it.
pub trait SceneEntity: Clone {
    /// Session-scoped runtime id
    fn rtid(&self) -> Rtid;

    /// Persistent global id
    fn euid(&self) -> Euid;

    /// Value of the display-name component
    fn name(&self) -> String;

    /// Local axis-aligned bounding box, if the entity carries one
    fn local_aabb(&self) -> Option<Aabb>;

    /// Global transform as a column-major 4x4 matrix
    fn global_matrix(&self) -> [f64; 16];

    /// Push a visibility flag to the engine (fire-and-forget)
    fn set_visibility(&self, visible: bool);

    /// Child entities
    async fn children(&self) -> Result<Vec<Self>>;

    /// Parent entity, `None` at the scene root
    async fn parent(&self) -> Result<Option<Self>>;
}

/// Scene-graph queries
pub trait SceneGraph {
    type Entity: SceneEntity;

    /// All entities whose display name equals `name`
    async fn find_entities_by_name(&self, name: &str) -> Result<Vec<Self::Entity>>;

    /// Entity with the given persistent id
    async fn find_entity_by_euid(&self, euid: &Euid) -> Result<Option<Self::Entity>>;
}

/// Camera queries and movement on the active viewport
pub trait CameraControl {
    /// Global position of the active viewport's camera
    async fn camera_position(&self) -> Result<[f64; 3]>;

    /// Start an animated transition toward `destination` at `speed` units per
    /// second (fire-and-forget; the engine serializes overlapping commands)
    fn travel(&self, destination: [f64; 3], orientation: [f64; 4], speed: f64);

    /// Set the orbit/look-at point the camera rotates around
    fn set_orbit_point(&self, point: [f64; 3]);
}

/// Result of a screen-space ray cast
#[derive(Clone, Debug)]
pub struct RayHit<E> {
    /// World-space hit position
    pub position: [f64; 3],
    /// Entity owning the hit geometry
    pub entity: E,
}

/// Screen-space picking
pub trait ScreenPicker {
    type Entity: SceneEntity;

    /// Cast a ray through 2D screen coordinates; `None` when nothing was hit
    async fn cast_screen_ray(&self, x: f64, y: f64) -> Result<Option<RayHit<Self::Entity>>>;
}

/// Umbrella trait for a full engine session
///
/// Blanket-implemented for any type providing all three capabilities over a
/// single entity type.
pub trait Engine:
    SceneGraph + CameraControl + ScreenPicker<Entity = <Self as SceneGraph>::Entity>
{
}

impl<T> Engine for T where
    T: SceneGraph + CameraControl + ScreenPicker<Entity = <T as SceneGraph>::Entity>
{
}

/// Entity type of an engine
pub type EntityOf<E> = <E as SceneGraph>::Entity;
