use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::content::NAV_ITEMS;

const SCROLLED_AFTER: f64 = 50.0;
const ACTIVE_LOOKAHEAD: f64 = 100.0;

/// The last section whose top is at or above `scroll_y + 100`. `sections`
/// is in page order; `None` offsets are sections that are not mounted.
pub fn active_section<'a>(sections: &[(&'a str, Option<f64>)], scroll_y: f64) -> Option<&'a str> {
    let line = scroll_y + ACTIVE_LOOKAHEAD;
    sections
        .iter()
        .rev()
        .find(|(_, top)| top.map_or(false, |top| top <= line))
        .map(|(id, _)| *id)
}

pub fn scroll_to_section(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

fn section_offsets() -> Vec<(&'static str, Option<f64>)> {
    let document = web_sys::window().and_then(|w| w.document());
    NAV_ITEMS
        .iter()
        .map(|item| {
            let top = document
                .as_ref()
                .and_then(|d| d.get_element_by_id(item.id))
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                .map(|el| el.offset_top() as f64);
            (item.id, top)
        })
        .collect()
}

#[function_component(Navigation)]
pub fn navigation() -> Html {
    let is_scrolled = use_state_eq(|| false);
    let menu_open = use_state(|| false);
    let active = use_state_eq(|| "home");

    {
        let is_scrolled = is_scrolled.clone();
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let on_scroll = {
                    let window = window.clone();
                    Closure::wrap(Box::new(move || {
                        let scroll_y = window
                            .as_ref()
                            .and_then(|w| w.scroll_y().ok())
                            .unwrap_or(0.0);
                        is_scrolled.set(scroll_y > SCROLLED_AFTER);
                        if let Some(id) = active_section(&section_offsets(), scroll_y) {
                            active.set(id);
                        }
                    }) as Box<dyn FnMut()>)
                };
                if let Some(window) = &window {
                    let _ = window
                        .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
                }
                move || {
                    if let Some(window) = &window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            on_scroll.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let go_to = {
        let menu_open = menu_open.clone();
        Callback::from(move |id: &'static str| {
            menu_open.set(false);
            scroll_to_section(id);
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let link = |id: &'static str, label: &'static str, class: &'static str| {
        let go_to = go_to.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            go_to.emit(id);
        });
        html! {
            <a
                href={format!("#{}", id)}
                class={classes!(class, (*active == id).then(|| "active"))}
                {onclick}
            >
                {label}
            </a>
        }
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                {link("home", "<DEV/>", "nav-logo")}
                <div class="nav-links">
                    { for NAV_ITEMS.iter().map(|item| link(item.id, item.label, "nav-link")) }
                </div>
                <button
                    class="nav-hire"
                    onclick={{
                        let go_to = go_to.clone();
                        Callback::from(move |_| go_to.emit("contact"))
                    }}
                >
                    {"Hire Me"}
                </button>
                <button class="burger-menu" aria-label="Menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            if *menu_open {
                <div class="mobile-menu">
                    { for NAV_ITEMS.iter().map(|item| link(item.id, item.label, "mobile-nav-link")) }
                </div>
            }
        </nav>
    }
}
