use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use super::engine::RevealOptions;
use super::runtime;

/// Reveals the element behind `node` when it scrolls into view. Registration
/// follows the component: it starts on mount and is torn down on unmount.
#[hook]
pub fn use_reveal(node: NodeRef, options: RevealOptions) {
    use_effect_with_deps(
        move |(node, options)| {
            let handle = node.cast::<HtmlElement>().and_then(|element| {
                runtime::with_runtime(|rt| rt.register(element.clone(), vec![element], options.clone()))
            });
            move || {
                if let Some(handle) = handle {
                    runtime::with_runtime(|rt| rt.unregister(handle));
                }
            }
        },
        (node, options),
    );
}

/// Reveals every element under `container` matching `selector`, staggered in
/// document order, triggered by the container itself. Bump `revision`
/// whenever the set of children changes.
#[hook]
pub fn use_reveal_batch(container: NodeRef, selector: &'static str, options: RevealOptions, revision: usize) {
    use_effect_with_deps(
        move |(container, selector, options, _)| {
            let handle = container.cast::<HtmlElement>().and_then(|root| {
                let targets = matching_children(&root, selector);
                if targets.is_empty() {
                    return None;
                }
                runtime::with_runtime(|rt| rt.register(root, targets, options.clone()))
            });
            move || {
                if let Some(handle) = handle {
                    runtime::with_runtime(|rt| rt.unregister(handle));
                }
            }
        },
        (container, selector, options, revision),
    );
}

fn matching_children(root: &Element, selector: &str) -> Vec<HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}
