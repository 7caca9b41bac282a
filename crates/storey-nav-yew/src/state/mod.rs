//! Panel state management
//!
//! Uses Yew's reducer pattern for predictable state updates. The rows mirror
//! the indexed records; record indexes are the only link back to the scene,
//! so the DOM never becomes a source of truth.

use crate::utils::split_type_tag;
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use storey_nav_model::{SpaceRecord, StoreyRecord};
use yew::prelude::*;

/// One storey row in the panel
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoreyRow {
    /// Index into the sorted storey list
    pub index: usize,
    /// Display name with any trailing "(IfcBuildingStorey)" marker split off
    pub label: String,
    /// The split-off marker, rendered dimmed
    pub type_tag: Option<String>,
    /// Stored visibility flag, mirrored from the record
    pub visible: bool,
    /// Whether the room list is unfolded
    pub expanded: bool,
}

impl From<&StoreyRecord> for StoreyRow {
    fn from(record: &StoreyRecord) -> Self {
        let (label, type_tag) = split_type_tag(&record.name);
        Self {
            index: record.index,
            label,
            type_tag,
            visible: record.visible,
            expanded: false,
        }
    }
}

/// One room row in a storey's list
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpaceRow {
    /// Index into the global flat space list
    pub index: usize,
    /// Index of the owning storey
    pub storey_index: usize,
    pub label: String,
    pub type_tag: Option<String>,
}

impl From<&SpaceRecord> for SpaceRow {
    fn from(record: &SpaceRecord) -> Self {
        let (label, type_tag) = split_type_tag(&record.name);
        Self {
            index: record.index,
            storey_index: record.storey_index,
            label,
            type_tag,
        }
    }
}

/// Main panel state
#[derive(Clone, Debug, PartialEq, Default)]
pub struct PanelState {
    /// Startup indexing still running
    pub loading: bool,
    /// Startup failed; the storey list is never shown
    pub error: Option<String>,
    pub storeys: Vec<StoreyRow>,
    pub spaces: Vec<SpaceRow>,
    /// Mirror of the controller's isolation state
    pub isolated: Option<usize>,
}

impl PanelState {
    /// Rooms of one storey, in flat-list order
    pub fn spaces_of(&self, storey_index: usize) -> impl Iterator<Item = &SpaceRow> {
        self.spaces
            .iter()
            .filter(move |space| space.storey_index == storey_index)
    }
}

/// State actions
pub enum PanelAction {
    SetLoading(bool),
    SetError(String),
    /// Replace the rows after indexing completes
    SetScene {
        storeys: Vec<StoreyRow>,
        spaces: Vec<SpaceRow>,
    },
    /// Fold or unfold one storey's room list
    ToggleExpanded(usize),
    /// Mirror a storey's stored visibility flag
    SetVisible(usize, bool),
    /// Mirror the controller's isolation state
    SetIsolated(Option<usize>),
}

impl Reducible for PanelState {
    type Action = PanelAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            PanelAction::SetLoading(loading) => {
                next.loading = loading;
            }
            PanelAction::SetError(error) => {
                log::error!("panel entered error state: {error}");
                next.error = Some(error);
                next.loading = false;
            }
            PanelAction::SetScene { storeys, spaces } => {
                next.storeys = storeys;
                next.spaces = spaces;
                next.isolated = None;
                next.error = None;
                next.loading = false;
            }
            PanelAction::ToggleExpanded(index) => {
                if let Some(row) = next.storeys.get_mut(index) {
                    row.expanded = !row.expanded;
                }
            }
            PanelAction::SetVisible(index, visible) => {
                if let Some(row) = next.storeys.get_mut(index) {
                    row.visible = visible;
                }
            }
            PanelAction::SetIsolated(isolated) => {
                next.isolated = isolated;
            }
        }

        Rc::new(next)
    }
}

/// Hook to use panel state
#[hook]
pub fn use_panel_state() -> UseReducerHandle<PanelState> {
    use_reducer(PanelState::default)
}

/// Context type for panel state
pub type PanelStateContext = UseReducerHandle<PanelState>;
