// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mock engine for the unit tests
//!
//! Entities are plain values; every fire-and-forget engine mutation is
//! appended to a shared [`CallLog`] so tests can assert on the exact call
//! sequence the controllers issue.

use std::cell::RefCell;
use std::rc::Rc;
use storey_nav_model::{
    Aabb, CameraControl, Euid, RayHit, Result, Rtid, SceneEntity, SceneGraph, ScreenPicker,
};

/// One recorded engine mutation
#[derive(Clone, Debug, PartialEq)]
pub enum EngineCall {
    SetVisibility(Rtid, bool),
    Travel {
        destination: [f64; 3],
        orientation: [f64; 4],
        speed: f64,
    },
    SetOrbitPoint([f64; 3]),
}

/// Shared recording of engine mutations
#[derive(Clone, Default, Debug)]
pub struct CallLog(Rc<RefCell<Vec<EngineCall>>>);

impl CallLog {
    pub fn push(&self, call: EngineCall) {
        self.0.borrow_mut().push(call);
    }

    pub fn calls(&self) -> Vec<EngineCall> {
        self.0.borrow().clone()
    }

    pub fn count(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

pub fn identity_matrix() -> [f64; 16] {
    let mut matrix = [0.0; 16];
    matrix[0] = 1.0;
    matrix[5] = 1.0;
    matrix[10] = 1.0;
    matrix[15] = 1.0;
    matrix
}

/// Column-major translation matrix
pub fn translation_matrix(x: f64, y: f64, z: f64) -> [f64; 16] {
    let mut matrix = identity_matrix();
    matrix[12] = x;
    matrix[13] = y;
    matrix[14] = z;
    matrix
}

/// In-memory scene-graph entity
#[derive(Clone, Debug)]
pub struct MockEntity {
    rtid: u64,
    euid: Euid,
    name: String,
    aabb: Option<Aabb>,
    matrix: [f64; 16],
    children: Vec<MockEntity>,
    parent: Option<Box<MockEntity>>,
    log: CallLog,
}

impl MockEntity {
    pub fn new(rtid: u64, name: &str, log: &CallLog) -> Self {
        Self {
            rtid,
            euid: Euid(format!("euid-{rtid}")),
            name: name.to_string(),
            aabb: None,
            matrix: identity_matrix(),
            children: Vec::new(),
            parent: None,
            log: log.clone(),
        }
    }

    pub fn with_children(mut self, children: Vec<MockEntity>) -> Self {
        self.children = children;
        self
    }

    pub fn with_aabb(mut self, min: [f64; 3], max: [f64; 3]) -> Self {
        self.aabb = Some(Aabb::new(min, max));
        self
    }

    pub fn with_matrix(mut self, matrix: [f64; 16]) -> Self {
        self.matrix = matrix;
        self
    }

    pub fn with_parent(mut self, parent: MockEntity) -> Self {
        self.parent = Some(Box::new(parent));
        self
    }
}

impl SceneEntity for MockEntity {
    fn rtid(&self) -> Rtid {
        Rtid(self.rtid)
    }

    fn euid(&self) -> Euid {
        self.euid.clone()
    }

    fn name(&self) -> String {
        self.name.clone()
    }

    fn local_aabb(&self) -> Option<Aabb> {
        self.aabb
    }

    fn global_matrix(&self) -> [f64; 16] {
        self.matrix
    }

    fn set_visibility(&self, visible: bool) {
        self.log.push(EngineCall::SetVisibility(Rtid(self.rtid), visible));
    }

    async fn children(&self) -> Result<Vec<Self>> {
        Ok(self.children.clone())
    }

    async fn parent(&self) -> Result<Option<Self>> {
        Ok(self.parent.clone().map(|parent| *parent))
    }
}

/// In-memory engine session
#[derive(Debug)]
pub struct MockEngine {
    pub roots: Vec<MockEntity>,
    pub camera_position: [f64; 3],
    pub ray_hit: Option<([f64; 3], MockEntity)>,
    pub log: CallLog,
}

impl MockEngine {
    pub fn new(roots: Vec<MockEntity>, log: CallLog) -> Self {
        Self {
            roots,
            camera_position: [0.0; 3],
            ray_hit: None,
            log,
        }
    }

    pub fn with_camera(mut self, position: [f64; 3]) -> Self {
        self.camera_position = position;
        self
    }

    pub fn with_ray_hit(mut self, position: [f64; 3], entity: MockEntity) -> Self {
        self.ray_hit = Some((position, entity));
        self
    }

    fn collect_by_name(entity: &MockEntity, name: &str, found: &mut Vec<MockEntity>) {
        if entity.name == name {
            found.push(entity.clone());
        }
        for child in &entity.children {
            Self::collect_by_name(child, name, found);
        }
    }

    fn find_by_euid(entity: &MockEntity, euid: &Euid) -> Option<MockEntity> {
        if &entity.euid == euid {
            return Some(entity.clone());
        }
        entity
            .children
            .iter()
            .find_map(|child| Self::find_by_euid(child, euid))
    }
}

impl SceneGraph for MockEngine {
    type Entity = MockEntity;

    async fn find_entities_by_name(&self, name: &str) -> Result<Vec<MockEntity>> {
        let mut found = Vec::new();
        for root in &self.roots {
            Self::collect_by_name(root, name, &mut found);
        }
        Ok(found)
    }

    async fn find_entity_by_euid(&self, euid: &Euid) -> Result<Option<MockEntity>> {
        Ok(self
            .roots
            .iter()
            .find_map(|root| Self::find_by_euid(root, euid)))
    }
}

impl CameraControl for MockEngine {
    async fn camera_position(&self) -> Result<[f64; 3]> {
        Ok(self.camera_position)
    }

    fn travel(&self, destination: [f64; 3], orientation: [f64; 4], speed: f64) {
        self.log.push(EngineCall::Travel {
            destination,
            orientation,
            speed,
        });
    }

    fn set_orbit_point(&self, point: [f64; 3]) {
        self.log.push(EngineCall::SetOrbitPoint(point));
    }
}

impl ScreenPicker for MockEngine {
    type Entity = MockEntity;

    async fn cast_screen_ray(&self, _x: f64, _y: f64) -> Result<Option<RayHit<MockEntity>>> {
        Ok(self
            .ray_hit
            .clone()
            .map(|(position, entity)| RayHit { position, entity }))
    }
}
