// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scene indexing
//!
//! One startup walk over the engine scene graph: the children of the
//! well-known storeys container become the storey list, and each storey's
//! "IfcSpace" child (when present) contributes that storey's rooms to a flat
//! space list. All scene-graph reads are awaited sequentially; the index is
//! read-only once built.

use rustc_hash::FxHashMap;
use storey_nav_model::{
    Result, Rtid, SceneEntity, SceneError, SceneGraph, SpaceRecord, StoreyRecord,
};

/// Display name of the storeys container entity created by the IFC importer
pub const STOREY_CONTAINER_NAME: &str = "IfcBuildingStorey";

/// Display name marking a storey's room container child
pub const SPACE_CONTAINER_NAME: &str = "IfcSpace";

/// Read-only lookup tables produced by [`index_scene`]
///
/// Storeys are sorted by display name (case-sensitive codepoint order) and
/// carry contiguous indexes over `[0, storey_count)`. Spaces are stored in
/// one flat list, grouped per storey, so a storey's rooms are a contiguous
/// slice. Runtime-id maps point back into both lists.
#[derive(Clone, Debug, Default)]
pub struct SceneIndex {
    storeys: Vec<StoreyRecord>,
    spaces: Vec<SpaceRecord>,
    /// Per storey, the half-open range of its spaces in the flat list
    storey_spaces: Vec<(usize, usize)>,
    storey_by_rtid: FxHashMap<Rtid, usize>,
    space_by_rtid: FxHashMap<Rtid, usize>,
}

impl SceneIndex {
    /// All storeys in panel order
    pub fn storeys(&self) -> &[StoreyRecord] {
        &self.storeys
    }

    /// One storey by its order index
    pub fn storey(&self, index: usize) -> &StoreyRecord {
        &self.storeys[index]
    }

    pub(crate) fn storey_mut(&mut self, index: usize) -> &mut StoreyRecord {
        &mut self.storeys[index]
    }

    /// The global flat space list
    pub fn spaces(&self) -> &[SpaceRecord] {
        &self.spaces
    }

    /// One space by its flat-list index
    pub fn space(&self, index: usize) -> &SpaceRecord {
        &self.spaces[index]
    }

    /// The rooms of one storey; empty for a storey with no room container
    pub fn spaces_of(&self, storey_index: usize) -> &[SpaceRecord] {
        let (start, end) = self.storey_spaces[storey_index];
        &self.spaces[start..end]
    }

    /// Order index of the storey with the given runtime id
    pub fn storey_index_of(&self, rtid: Rtid) -> Option<usize> {
        self.storey_by_rtid.get(&rtid).copied()
    }

    /// Flat-list index of the space with the given runtime id
    pub fn space_index_of(&self, rtid: Rtid) -> Option<usize> {
        self.space_by_rtid.get(&rtid).copied()
    }

    pub fn storey_count(&self) -> usize {
        self.storeys.len()
    }
}

/// The index plus the live entity handles backing it
///
/// Entity vectors run parallel to the record lists, so a record index is
/// also the index of the entity the controllers issue calls against.
#[derive(Debug)]
pub struct IndexedScene<E: SceneEntity> {
    pub index: SceneIndex,
    pub storey_entities: Vec<E>,
    pub space_entities: Vec<E>,
}

/// Walk the scene graph once and build the storey/space index
///
/// Fails with [`SceneError::ContainerNotFound`] when the storeys container
/// is absent; a storey without a room container is not an error and simply
/// owns an empty space range.
pub async fn index_scene<G: SceneGraph>(graph: &G) -> Result<IndexedScene<G::Entity>> {
    let container = graph
        .find_entities_by_name(STOREY_CONTAINER_NAME)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| SceneError::container(STOREY_CONTAINER_NAME))?;

    let mut storey_entities = container.children().await?;
    // Panel order: alphabetical by display name, assigned before any index
    storey_entities.sort_by(|a, b| a.name().cmp(&b.name()));

    let mut storeys = Vec::with_capacity(storey_entities.len());
    let mut storey_spaces = Vec::with_capacity(storey_entities.len());
    let mut storey_by_rtid = FxHashMap::default();
    let mut spaces = Vec::new();
    let mut space_entities = Vec::new();
    let mut space_by_rtid = FxHashMap::default();

    for (storey_index, storey) in storey_entities.iter().enumerate() {
        storey_by_rtid.insert(storey.rtid(), storey_index);
        storeys.push(StoreyRecord {
            rtid: storey.rtid(),
            euid: storey.euid(),
            name: storey.name(),
            index: storey_index,
            visible: true,
        });

        let start = spaces.len();
        let children = storey.children().await?;
        let room_container = children
            .into_iter()
            .find(|child| child.name() == SPACE_CONTAINER_NAME);
        if let Some(room_container) = room_container {
            for space in room_container.children().await? {
                let space_index = spaces.len();
                space_by_rtid.insert(space.rtid(), space_index);
                spaces.push(SpaceRecord {
                    rtid: space.rtid(),
                    euid: space.euid(),
                    name: space.name(),
                    storey_index,
                    index: space_index,
                });
                space_entities.push(space);
            }
        }
        storey_spaces.push((start, spaces.len()));
    }

    log::debug!(
        "indexed {} storeys and {} spaces",
        storeys.len(),
        spaces.len()
    );

    Ok(IndexedScene {
        index: SceneIndex {
            storeys,
            spaces,
            storey_spaces,
            storey_by_rtid,
            space_by_rtid,
        },
        storey_entities,
        space_entities,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{CallLog, MockEngine, MockEntity};
    use storey_nav_model::Euid;

    fn building() -> MockEngine {
        let log = CallLog::default();
        let storeys = MockEntity::new(1, STOREY_CONTAINER_NAME, &log).with_children(vec![
            MockEntity::new(20, "Level 2 (IfcBuildingStorey)", &log).with_children(vec![
                MockEntity::new(21, SPACE_CONTAINER_NAME, &log).with_children(vec![
                    MockEntity::new(22, "Office (IfcSpace)", &log),
                    MockEntity::new(23, "Corridor (IfcSpace)", &log),
                ]),
            ]),
            MockEntity::new(10, "Level 1 (IfcBuildingStorey)", &log).with_children(vec![
                MockEntity::new(11, SPACE_CONTAINER_NAME, &log)
                    .with_children(vec![MockEntity::new(12, "Kitchen (IfcSpace)", &log)]),
                MockEntity::new(13, "IfcWall", &log),
            ]),
            // No room container at all on the roof
            MockEntity::new(30, "Roof (IfcBuildingStorey)", &log),
        ]);
        MockEngine::new(vec![storeys], log)
    }

    #[test]
    fn test_storeys_sorted_with_contiguous_indexes() {
        let engine = building();
        let scene = pollster::block_on(index_scene(&engine)).unwrap();

        let names: Vec<_> = scene
            .index
            .storeys()
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(
            names,
            [
                "Level 1 (IfcBuildingStorey)",
                "Level 2 (IfcBuildingStorey)",
                "Roof (IfcBuildingStorey)"
            ]
        );
        for (position, storey) in scene.index.storeys().iter().enumerate() {
            assert_eq!(storey.index, position);
            assert!(storey.visible);
            assert_eq!(scene.index.storey_index_of(storey.rtid), Some(position));
            assert_eq!(scene.storey_entities[position].rtid(), storey.rtid);
        }
    }

    #[test]
    fn test_indexing_twice_is_deterministic() {
        let engine = building();
        let first = pollster::block_on(index_scene(&engine)).unwrap();
        let second = pollster::block_on(index_scene(&engine)).unwrap();
        assert_eq!(first.index.storeys(), second.index.storeys());
        assert_eq!(first.index.spaces(), second.index.spaces());
    }

    #[test]
    fn test_spaces_grouped_per_storey() {
        let engine = building();
        let scene = pollster::block_on(index_scene(&engine)).unwrap();

        // Level 1 sorts first, so its single room opens the flat list
        let level1 = scene.index.spaces_of(0);
        assert_eq!(level1.len(), 1);
        assert_eq!(level1[0].name, "Kitchen (IfcSpace)");
        assert_eq!(level1[0].storey_index, 0);

        let level2 = scene.index.spaces_of(1);
        assert_eq!(level2.len(), 2);
        assert_eq!(level2[0].name, "Office (IfcSpace)");

        for space in scene.index.spaces() {
            assert!(space.storey_index < scene.index.storey_count());
            assert_eq!(scene.index.space(space.index), space);
            assert_eq!(scene.index.space_index_of(space.rtid), Some(space.index));
        }
    }

    #[test]
    fn test_storey_without_room_container_is_empty_not_error() {
        let engine = building();
        let scene = pollster::block_on(index_scene(&engine)).unwrap();
        assert!(scene.index.spaces_of(2).is_empty());
    }

    #[test]
    fn test_space_euid_resolves_by_flat_index() {
        let engine = building();
        let scene = pollster::block_on(index_scene(&engine)).unwrap();
        // Flat order: Kitchen, Office, Corridor
        assert_eq!(scene.index.space(2).euid, Euid::from("euid-23"));
    }

    #[test]
    fn test_missing_container_is_fatal() {
        let log = CallLog::default();
        let engine = MockEngine::new(vec![MockEntity::new(1, "IfcProject", &log)], log);
        let error = pollster::block_on(index_scene(&engine)).unwrap_err();
        assert!(matches!(
            error,
            SceneError::ContainerNotFound(name) if name == STOREY_CONTAINER_NAME
        ));
    }
}
