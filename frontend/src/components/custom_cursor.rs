use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::device::DeviceCapabilities;

const INTERACTIVE: &str = "a, button, input, textarea, [data-interactive='true']";

fn place(node: &NodeRef, x: f64, y: f64, half: f64) {
    if let Some(el) = node.cast::<HtmlElement>() {
        let _ = el
            .style()
            .set_property("transform", &format!("translate({}px, {}px)", x - half, y - half));
    }
}

/// Ring and dot that follow the pointer. Renders nothing on touch devices
/// or when reduced motion is requested.
#[function_component(CustomCursor)]
pub fn custom_cursor() -> Html {
    let enabled = use_memo(|_| DeviceCapabilities::detect().custom_cursor_enabled(), ());
    let ring = use_node_ref();
    let dot = use_node_ref();
    let visible = use_state_eq(|| false);
    let over_interactive = use_state_eq(|| false);

    {
        let (ring, dot, visible) = (ring.clone(), dot.clone(), visible.clone());
        let enabled = *enabled;
        use_event_with_window("mousemove", move |e: MouseEvent| {
            if !enabled {
                return;
            }
            visible.set(true);
            let (x, y) = (e.client_x() as f64, e.client_y() as f64);
            place(&ring, x, y, 16.0);
            place(&dot, x, y, 4.0);
        });
    }
    {
        let over_interactive = over_interactive.clone();
        use_event_with_window("mouseover", move |e: MouseEvent| {
            let hit = e
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.closest(INTERACTIVE).ok().flatten())
                .is_some();
            over_interactive.set(hit);
        });
    }
    {
        let visible = visible.clone();
        use_event_with_window("mouseout", move |e: MouseEvent| {
            // Leaving the document has no related target
            if e.related_target().is_none() {
                visible.set(false);
            }
        });
    }

    if !*enabled {
        return html! {};
    }

    html! {
        <>
            <div
                ref={ring}
                class={classes!("cursor-ring", (*visible).then(|| "visible"), (*over_interactive).then(|| "grow"))}
                aria-hidden="true"
            />
            <div
                ref={dot}
                class={classes!("cursor-dot", (*visible).then(|| "visible"))}
                aria-hidden="true"
            />
            <style>
                {r#"
                @media (hover: hover) and (pointer: fine) {
                    * { cursor: none !important; }
                }
                "#}
            </style>
        </>
    }
}
