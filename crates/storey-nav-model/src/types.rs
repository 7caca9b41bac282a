// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core identifier and geometry types
//!
//! This module defines the fundamental types used throughout the navigator.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Session-scoped runtime entity identifier
///
/// Assigned by the rendering engine when the scene is loaded into a session;
/// only valid for the lifetime of that session. Persistent references use
/// [`Euid`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, Default)]
pub struct Rtid(pub u64);

impl fmt::Display for Rtid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Rtid {
    fn from(id: u64) -> Self {
        Rtid(id)
    }
}

impl From<Rtid> for u64 {
    fn from(id: Rtid) -> Self {
        id.0
    }
}

/// Globally unique entity identifier
///
/// Stable across sessions; the engine resolves it back to a live entity.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, Default)]
pub struct Euid(pub String);

impl Euid {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Euid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Euid {
    fn from(id: String) -> Self {
        Euid(id)
    }
}

impl From<&str> for Euid {
    fn from(id: &str) -> Self {
        Euid(id.to_string())
    }
}

/// Axis-aligned bounding box in entity-local coordinates
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Aabb {
    pub min: [f64; 3],
    pub max: [f64; 3],
}

impl Aabb {
    /// Create a new bounding box from min/max corners
    pub fn new(min: [f64; 3], max: [f64; 3]) -> Self {
        Self { min, max }
    }

    /// Per-axis arithmetic mean of the two corners
    pub fn center(&self) -> [f64; 3] {
        let mut center = [0.0; 3];
        for axis in 0..3 {
            center[axis] = (self.min[axis] + self.max[axis]) / 2.0;
        }
        center
    }
}
