// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Storey visibility and isolation
//!
//! Each storey carries a stored visibility flag (the user's last explicit
//! choice, kept on its [`StoreyRecord`]); isolation is a single optional
//! storey index here. Isolating forces the engine state of every storey
//! without touching the stored flags, so un-isolating restores exactly the
//! state the user had built up.
//!
//! [`StoreyRecord`]: storey_nav_model::StoreyRecord

use crate::indexer::IndexedScene;
use storey_nav_model::SceneEntity;

/// Visibility/isolation controller state
///
/// At most one storey is isolated at any time, by construction.
#[derive(Clone, Debug, Default)]
pub struct VisibilityState {
    isolated: Option<usize>,
}

impl VisibilityState {
    /// Index of the isolated storey, if any
    pub fn isolated(&self) -> Option<usize> {
        self.isolated
    }

    pub fn is_isolated(&self, index: usize) -> bool {
        self.isolated == Some(index)
    }

    /// Flip one storey's stored flag and push the result to the engine
    ///
    /// Issues exactly one engine call. Returns the new flag.
    pub fn toggle_visibility<E: SceneEntity>(
        &mut self,
        scene: &mut IndexedScene<E>,
        index: usize,
    ) -> bool {
        let record = scene.index.storey_mut(index);
        record.visible = !record.visible;
        let visible = record.visible;
        scene.storey_entities[index].set_visibility(visible);
        log::debug!("storey {index} visibility set to {visible}");
        visible
    }

    /// Isolate one storey, or clear isolation when it is already isolated
    ///
    /// Isolating shows exactly `index` and hides every other storey;
    /// un-isolating restores every storey from its stored flag. Either way
    /// exactly one engine call per storey is issued. Isolating storey B while
    /// storey A is isolated clears A implicitly. Returns the new isolation
    /// state.
    pub fn isolate<E: SceneEntity>(
        &mut self,
        scene: &mut IndexedScene<E>,
        index: usize,
    ) -> Option<usize> {
        if self.isolated == Some(index) {
            self.isolated = None;
            for (record, entity) in scene
                .index
                .storeys()
                .iter()
                .zip(&scene.storey_entities)
            {
                entity.set_visibility(record.visible);
            }
            log::debug!("storey {index} un-isolated, stored visibility restored");
        } else {
            self.isolated = Some(index);
            for (position, entity) in scene.storey_entities.iter().enumerate() {
                entity.set_visibility(position == index);
            }
            log::debug!("storey {index} isolated");
        }
        self.isolated
    }
}
