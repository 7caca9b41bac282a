// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Camera travel toward rooms and the initial view
//!
//! Travel speed is derived from the distance to the destination so that
//! every transition takes the same wall-clock time. The destination vantage
//! point sits slightly off the target's bounding-box center so the camera
//! does not stop inside geometry; the unoffset center becomes the orbit
//! point.

use crate::transform::{apply_matrix, distance};
use storey_nav_model::{
    CameraControl, Engine, Euid, Result, SceneEntity, SceneError, SceneGraph,
};

/// Wall-clock duration of every travel transition, in seconds
pub const TRAVEL_SECONDS: f64 = 3.0;

/// Per-axis offset of a room vantage point from the bounding-box center
pub const VANTAGE_OFFSET: f64 = 0.5;

/// Below this distance the camera counts as already arrived and no travel
/// command is issued (a zero speed would otherwise never complete)
pub const MIN_TRAVEL_DISTANCE: f64 = 1e-6;

/// Orientation pushed with every travel command
const IDENTITY_ORIENTATION: [f64; 4] = [0.0, 0.0, 0.0, 1.0];

/// Drives constant-duration camera transitions
///
/// Holds the camera position and orbit point captured at startup so the
/// initial view can be restored later.
#[derive(Clone, Debug)]
pub struct Navigator {
    initial_camera_position: [f64; 3],
    base_orbit_point: [f64; 3],
}

impl Navigator {
    pub fn new(initial_camera_position: [f64; 3], base_orbit_point: [f64; 3]) -> Self {
        Self {
            initial_camera_position,
            base_orbit_point,
        }
    }

    /// Travel toward `vantage`, orbiting `look_at` on arrival
    pub async fn travel_to<C: CameraControl>(
        &self,
        camera: &C,
        vantage: [f64; 3],
        look_at: [f64; 3],
    ) -> Result<()> {
        let from = camera.camera_position().await?;
        let travel_distance = distance(from, vantage);
        if travel_distance > MIN_TRAVEL_DISTANCE {
            camera.travel(
                vantage,
                IDENTITY_ORIENTATION,
                travel_distance / TRAVEL_SECONDS,
            );
        }
        camera.set_orbit_point(look_at);
        Ok(())
    }

    /// Return to the pose captured at startup
    pub async fn reset_to_initial_view<C: CameraControl>(&self, camera: &C) -> Result<()> {
        self.travel_to(camera, self.initial_camera_position, self.base_orbit_point)
            .await
    }

    /// Fly to a room's bounding-box center
    ///
    /// The room is resolved by its persistent id; its local center is lifted
    /// to global coordinates through the entity's global transform.
    pub async fn go_to_room<E: Engine>(&self, engine: &E, euid: &Euid) -> Result<()> {
        let room = engine
            .find_entity_by_euid(euid)
            .await?
            .ok_or_else(|| SceneError::EntityNotFound(euid.clone()))?;
        let aabb = room
            .local_aabb()
            .ok_or_else(|| SceneError::engine(format!("room {euid} has no bounding box")))?;
        let center = apply_matrix(&room.global_matrix(), aabb.center());
        let vantage = [
            center[0] + VANTAGE_OFFSET,
            center[1] + VANTAGE_OFFSET,
            center[2] + VANTAGE_OFFSET,
        ];
        self.travel_to(engine, vantage, center).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{translation_matrix, CallLog, EngineCall, MockEngine, MockEntity};

    #[test]
    fn test_speed_scales_linearly_with_distance() {
        let log = CallLog::default();
        let engine = MockEngine::new(Vec::new(), log.clone());
        let navigator = Navigator::new([0.0; 3], [0.0; 3]);

        pollster::block_on(navigator.travel_to(&engine, [9.0, 0.0, 0.0], [1.0, 2.0, 3.0]))
            .unwrap();

        assert_eq!(
            log.calls(),
            [
                EngineCall::Travel {
                    destination: [9.0, 0.0, 0.0],
                    orientation: [0.0, 0.0, 0.0, 1.0],
                    speed: 3.0,
                },
                EngineCall::SetOrbitPoint([1.0, 2.0, 3.0]),
            ]
        );
    }

    #[test]
    fn test_zero_distance_skips_travel() {
        let log = CallLog::default();
        let engine = MockEngine::new(Vec::new(), log.clone()).with_camera([5.0, 5.0, 5.0]);
        let navigator = Navigator::new([0.0; 3], [0.0; 3]);

        pollster::block_on(navigator.travel_to(&engine, [5.0, 5.0, 5.0], [5.0, 4.0, 5.0]))
            .unwrap();

        assert_eq!(log.calls(), [EngineCall::SetOrbitPoint([5.0, 4.0, 5.0])]);
    }

    #[test]
    fn test_reset_targets_initial_pose() {
        let log = CallLog::default();
        let engine = MockEngine::new(Vec::new(), log.clone()).with_camera([6.0, 0.0, 0.0]);
        let navigator = Navigator::new([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);

        pollster::block_on(navigator.reset_to_initial_view(&engine)).unwrap();

        assert_eq!(
            log.calls(),
            [
                EngineCall::Travel {
                    destination: [0.0, 0.0, 0.0],
                    orientation: [0.0, 0.0, 0.0, 1.0],
                    speed: 2.0,
                },
                EngineCall::SetOrbitPoint([1.0, 1.0, 1.0]),
            ]
        );
    }

    #[test]
    fn test_go_to_room_offsets_vantage_from_global_center() {
        let log = CallLog::default();
        let room = MockEntity::new(7, "Kitchen (IfcSpace)", &log)
            .with_aabb([0.0, 0.0, 0.0], [2.0, 4.0, 6.0])
            .with_matrix(translation_matrix(10.0, 0.0, 0.0));
        let engine = MockEngine::new(vec![room], log.clone()).with_camera([11.5, 2.5, -2.5]);
        let navigator = Navigator::new([0.0; 3], [0.0; 3]);

        pollster::block_on(navigator.go_to_room(&engine, &"euid-7".into())).unwrap();

        // Local center (1,2,3) translated to (11,2,3), vantage offset 0.5
        assert_eq!(
            log.calls(),
            [
                EngineCall::Travel {
                    destination: [11.5, 2.5, 3.5],
                    orientation: [0.0, 0.0, 0.0, 1.0],
                    speed: 2.0,
                },
                EngineCall::SetOrbitPoint([11.0, 2.0, 3.0]),
            ]
        );
    }

    #[test]
    fn test_go_to_unknown_room_fails() {
        let log = CallLog::default();
        let engine = MockEngine::new(Vec::new(), log);
        let navigator = Navigator::new([0.0; 3], [0.0; 3]);

        let error =
            pollster::block_on(navigator.go_to_room(&engine, &"euid-404".into())).unwrap_err();
        assert!(matches!(error, SceneError::EntityNotFound(_)));
    }
}
