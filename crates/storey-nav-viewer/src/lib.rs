//! Storey-Nav Viewer
//!
//! Single WASM binding the hosted engine session to the storey panel. At
//! startup it joins the streaming session, bootstraps the scene index, and
//! mounts the Yew UI with callbacks wired into the visibility and navigation
//! controllers. Canvas clicks ray-cast into the scene and report the picked
//! entity's IFC class on the console.

mod config;
mod console;
mod sdk;

pub use config::ViewerConfig;
pub use sdk::{WebEngine, WebEntity};

use std::cell::RefCell;
use std::rc::Rc;
use storey_nav_core::{bootstrap, ifc_class_of, Viewer};
use storey_nav_model::ScreenPicker;
use storey_nav_yew::{
    use_panel_state, PanelAction, PanelStateContext, SpaceRow, StoreyRow, ViewerLayout,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

type SharedViewer = Rc<RefCell<Option<Viewer<WebEngine>>>>;

/// Panel rows for a freshly indexed scene
fn scene_rows(viewer: &Viewer<WebEngine>) -> (Vec<StoreyRow>, Vec<SpaceRow>) {
    let storeys = viewer
        .scene
        .index
        .storeys()
        .iter()
        .map(StoreyRow::from)
        .collect();
    let spaces = viewer
        .scene
        .index
        .spaces()
        .iter()
        .map(SpaceRow::from)
        .collect();
    (storeys, spaces)
}

/// Session start and scene bootstrap, feeding the panel state
///
/// Any failure here leaves the panel in its error state; the storey list is
/// only built from a complete index.
async fn start_viewer(config: ViewerConfig, shared: SharedViewer, state: PanelStateContext) {
    let engine = match WebEngine::connect(&config).await {
        Ok(engine) => engine,
        Err(error) => {
            console::log_error(&format!("session start failed: {error}"));
            state.dispatch(PanelAction::SetError(error.to_string()));
            return;
        }
    };

    match bootstrap(engine).await {
        Ok(viewer) => {
            let (storeys, spaces) = scene_rows(&viewer);
            *shared.borrow_mut() = Some(viewer);
            state.dispatch(PanelAction::SetScene { storeys, spaces });
        }
        Err(error) => {
            console::log_error(&format!("scene indexing failed: {error}"));
            state.dispatch(PanelAction::SetError(error.to_string()));
        }
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    config: ViewerConfig,
}

/// Main application component
#[function_component]
fn App(props: &AppProps) -> Html {
    let state = use_panel_state();
    let viewer: SharedViewer = use_mut_ref(|| None);

    // Connect and index once on mount
    {
        let state = state.clone();
        let viewer = viewer.clone();
        let config = props.config.clone();
        use_effect_with((), move |_| {
            state.dispatch(PanelAction::SetLoading(true));
            spawn_local(start_viewer(config, viewer, state));
        });
    }

    let on_toggle_visibility = {
        let state = state.clone();
        let viewer = viewer.clone();
        Callback::from(move |index: usize| {
            if let Some(viewer) = viewer.borrow_mut().as_mut() {
                let visible = viewer.toggle_storey_visibility(index);
                state.dispatch(PanelAction::SetVisible(index, visible));
            }
        })
    };

    let on_isolate = {
        let state = state.clone();
        let viewer = viewer.clone();
        Callback::from(move |index: usize| {
            if let Some(viewer) = viewer.borrow_mut().as_mut() {
                let isolated = viewer.isolate_storey(index);
                state.dispatch(PanelAction::SetIsolated(isolated));
            }
        })
    };

    let on_space_click = {
        let viewer = viewer.clone();
        Callback::from(move |index: usize| {
            // Clone what the flight needs so no borrow lives across the await
            let job = viewer
                .borrow()
                .as_ref()
                .map(|viewer| (viewer.engine, viewer.navigator.clone(), viewer.space_euid(index)));
            if let Some((engine, navigator, euid)) = job {
                spawn_local(async move {
                    if let Err(error) = navigator.go_to_room(&engine, &euid).await {
                        console::log_error(&format!("go to room failed: {error}"));
                    }
                });
            }
        })
    };

    let on_reset = {
        let viewer = viewer.clone();
        Callback::from(move |_: ()| {
            let job = viewer
                .borrow()
                .as_ref()
                .map(|viewer| (viewer.engine, viewer.navigator.clone()));
            if let Some((engine, navigator)) = job {
                spawn_local(async move {
                    if let Err(error) = navigator.reset_to_initial_view(&engine).await {
                        console::log_error(&format!("reset view failed: {error}"));
                    }
                });
            }
        })
    };

    let on_canvas_click = {
        let viewer = viewer.clone();
        Callback::from(move |(x, y): (i32, i32)| {
            let engine = viewer.borrow().as_ref().map(|viewer| viewer.engine);
            let Some(engine) = engine else { return };
            spawn_local(async move {
                match engine.cast_screen_ray(x as f64, y as f64).await {
                    Ok(Some(hit)) => {
                        console::log(&format!("picked at {:?}", hit.position));
                        match ifc_class_of(&hit.entity).await {
                            Ok(Some(class)) => console::log_info(&class),
                            Ok(None) => console::log("picked entity has no class ancestor"),
                            Err(error) => {
                                console::log_error(&format!("class lookup failed: {error}"));
                            }
                        }
                    }
                    Ok(None) => {}
                    Err(error) => console::log_error(&format!("ray cast failed: {error}")),
                }
            });
        })
    };

    html! {
        <ContextProvider<PanelStateContext> context={state.clone()}>
            <ViewerLayout
                canvas_id={props.config.canvas_id.clone()}
                {on_toggle_visibility}
                {on_isolate}
                {on_space_click}
                {on_reset}
                {on_canvas_click}
            />
        </ContextProvider<PanelStateContext>>
    }
}

/// WASM entry point
#[wasm_bindgen(start)]
pub fn run() {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize debug mode from URL (?debug=1) and the log facade
    console::init_debug_from_url();
    console::init_logger();

    let Some(config) = ViewerConfig::load() else {
        console::log_error("viewer not started: missing or invalid configuration");
        return;
    };

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
