//! Top-level layout: display canvas, storey panel and reset button

use crate::components::StoreyPanel;
use web_sys::MouseEvent;
use yew::prelude::*;

/// Reset button properties
#[derive(Properties, PartialEq)]
pub struct ResetButtonProps {
    pub on_reset: Callback<()>,
}

/// Returns the camera to the view captured at startup
#[function_component]
pub fn ResetButton(props: &ResetButtonProps) -> Html {
    let onclick = {
        let on_reset = props.on_reset.clone();
        Callback::from(move |_: MouseEvent| on_reset.emit(()))
    };

    html! {
        <button class="reset-button" {onclick}>{"Reset view"}</button>
    }
}

/// Layout properties
///
/// The canvas is the engine's display surface; clicks on it are forwarded as
/// client coordinates for ray casting.
#[derive(Properties, PartialEq)]
pub struct ViewerLayoutProps {
    pub canvas_id: String,
    pub on_toggle_visibility: Callback<usize>,
    pub on_isolate: Callback<usize>,
    pub on_space_click: Callback<usize>,
    pub on_reset: Callback<()>,
    pub on_canvas_click: Callback<(i32, i32)>,
}

/// The viewer layout
#[function_component]
pub fn ViewerLayout(props: &ViewerLayoutProps) -> Html {
    let on_canvas_click = {
        let on_canvas_click = props.on_canvas_click.clone();
        Callback::from(move |event: MouseEvent| {
            on_canvas_click.emit((event.client_x(), event.client_y()));
        })
    };

    html! {
        <div class="viewer">
            <canvas
                id={props.canvas_id.clone()}
                class="display-canvas"
                onclick={on_canvas_click}
            />
            <aside class="panel">
                <ResetButton on_reset={props.on_reset.clone()} />
                <StoreyPanel
                    on_toggle_visibility={props.on_toggle_visibility.clone()}
                    on_isolate={props.on_isolate.clone()}
                    on_space_click={props.on_space_click.clone()}
                />
            </aside>
        </div>
    }
}
