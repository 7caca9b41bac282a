// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Storey and space records produced by scene indexing
//!
//! Both record types are created once when the scene graph is walked at
//! startup. [`SpaceRecord`] is immutable afterwards; only a storey's
//! `visible` flag is mutated, and only by the visibility controller.

use crate::{Euid, Rtid};
use serde::{Deserialize, Serialize};

/// One building storey as shown in the navigation panel
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoreyRecord {
    /// Session-scoped id of the storey entity
    pub rtid: Rtid,
    /// Persistent id of the storey entity
    pub euid: Euid,
    /// Display name, e.g. "Level 1 (IfcBuildingStorey)"
    pub name: String,
    /// Position after the alphabetical sort; unique and contiguous over the
    /// storey list for the whole session
    pub index: usize,
    /// Last explicitly requested visibility. Isolation forces the engine
    /// state without touching this flag, so un-isolating can restore it.
    pub visible: bool,
}

/// One room belonging to a storey
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpaceRecord {
    /// Session-scoped id of the room entity
    pub rtid: Rtid,
    /// Persistent id of the room entity, used to resolve it at travel time
    pub euid: Euid,
    /// Display name, e.g. "Kitchen (IfcSpace)"
    pub name: String,
    /// Index of the owning storey in the sorted storey list
    pub storey_index: usize,
    /// Position in the global flat space list
    pub index: usize,
}
