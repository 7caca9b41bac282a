// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Resolving the IFC class of a picked entity
//!
//! The importer nests each element's geometry two levels below its class
//! container: `<IfcClass>` → element → geometry. A ray cast hits the
//! geometry leaf, so the class name is read from the grandparent.

use storey_nav_model::{Result, SceneEntity};

/// IFC class name of a picked entity, `None` when the ancestry is shorter
/// than two levels
pub async fn ifc_class_of<E: SceneEntity>(entity: &E) -> Result<Option<String>> {
    let Some(parent) = entity.parent().await? else {
        return Ok(None);
    };
    let Some(grandparent) = parent.parent().await? else {
        return Ok(None);
    };
    Ok(Some(grandparent.name()))
}
