//! Storey panel - the storey/room list with visibility and isolation controls

use crate::state::{PanelAction, PanelStateContext, SpaceRow, StoreyRow};
use web_sys::MouseEvent;
use yew::prelude::*;

/// One storey entry: header with chevron, name and controls, plus the
/// unfoldable room list
#[derive(Properties, PartialEq)]
struct StoreyEntryProps {
    row: StoreyRow,
    spaces: Vec<SpaceRow>,
    isolated: bool,
    on_toggle_visibility: Callback<usize>,
    on_isolate: Callback<usize>,
    on_space_click: Callback<usize>,
}

#[function_component]
fn StoreyEntry(props: &StoreyEntryProps) -> Html {
    let state = use_context::<PanelStateContext>().expect("PanelStateContext not found");
    let row = &props.row;

    let on_expand = {
        let state = state.clone();
        let index = row.index;
        Callback::from(move |_: MouseEvent| {
            state.dispatch(PanelAction::ToggleExpanded(index));
        })
    };

    let on_eye = {
        let on_toggle_visibility = props.on_toggle_visibility.clone();
        let index = row.index;
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            on_toggle_visibility.emit(index);
        })
    };

    let on_isolate = {
        let on_isolate = props.on_isolate.clone();
        let index = row.index;
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            on_isolate.emit(index);
        })
    };

    html! {
        <li
            class={classes!(
                "storey",
                (!row.visible).then_some("hidden"),
                props.isolated.then_some("isolated")
            )}
        >
            <div class="summary">
                <div class="toggle-active" onclick={on_expand}>
                    <div class={classes!("chevron", row.expanded.then_some("open"))}></div>
                    <h3>
                        {&row.label}
                        if let Some(tag) = &row.type_tag {
                            <small>{tag}</small>
                        }
                    </h3>
                </div>
                <button
                    class={classes!("isolate-icon", props.isolated.then_some("active"))}
                    title={if props.isolated { "Show all storeys" } else { "Isolate storey" }}
                    onclick={on_isolate}
                >
                    {"◎"}
                </button>
                <button
                    class="visibility-icon"
                    title={if row.visible { "Hide storey" } else { "Show storey" }}
                    onclick={on_eye}
                >
                    {if row.visible { "👁" } else { "👁‍🗨" }}
                </button>
            </div>
            if row.expanded {
                <ul class="spaces">
                    if props.spaces.is_empty() {
                        <li class="empty-storey">{"No IfcSpace at this storey"}</li>
                    } else {
                        { for props.spaces.iter().map(|space| {
                            let on_space_click = props.on_space_click.clone();
                            let index = space.index;
                            html! {
                                <li
                                    key={space.index}
                                    class="space"
                                    onclick={Callback::from(move |_: MouseEvent| {
                                        on_space_click.emit(index);
                                    })}
                                >
                                    {&space.label}
                                    if let Some(tag) = &space.type_tag {
                                        <small>{tag}</small>
                                    }
                                </li>
                            }
                        })}
                    }
                </ul>
            }
        </li>
    }
}

/// Storey panel properties - every engine effect is a callback supplied by
/// the viewer crate
#[derive(Properties, PartialEq)]
pub struct StoreyPanelProps {
    pub on_toggle_visibility: Callback<usize>,
    pub on_isolate: Callback<usize>,
    pub on_space_click: Callback<usize>,
}

/// The storey list panel
#[function_component]
pub fn StoreyPanel(props: &StoreyPanelProps) -> Html {
    let state = use_context::<PanelStateContext>().expect("PanelStateContext not found");

    if state.loading {
        return html! {
            <div class="panel-status loading">{"Indexing model…"}</div>
        };
    }

    if let Some(error) = &state.error {
        return html! {
            <div class="panel-status error">
                <strong>{"Startup failed"}</strong>
                <p>{error}</p>
            </div>
        };
    }

    html! {
        <ul class="storeys">
            { for state.storeys.iter().map(|row| {
                let spaces: Vec<SpaceRow> = state.spaces_of(row.index).cloned().collect();
                html! {
                    <StoreyEntry
                        key={row.index}
                        row={row.clone()}
                        {spaces}
                        isolated={state.isolated == Some(row.index)}
                        on_toggle_visibility={props.on_toggle_visibility.clone()}
                        on_isolate={props.on_isolate.clone()}
                        on_space_click={props.on_space_click.clone()}
                    />
                }
            })}
        </ul>
    }
}
