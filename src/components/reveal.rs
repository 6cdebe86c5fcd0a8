use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use yew::prelude::*;

// Adds "visible" to every .reveal element once it scrolls into view. Listener
// lives for the page's lifetime and is removed in the destructor.
#[hook]
pub fn use_reveal_on_scroll() {
    use_effect_with_deps(
        move |_| {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();
            let window_clone = window.clone();

            let scroll_callback = Closure::wrap(Box::new(move || {
                let height = window_clone
                    .inner_height()
                    .ok()
                    .and_then(|h| h.as_f64())
                    .unwrap_or(0.0);
                if let Ok(nodes) = document.query_selector_all(".reveal") {
                    for i in 0..nodes.length() {
                        let Some(node) = nodes.get(i) else { continue };
                        let Ok(element) = node.dyn_into::<web_sys::Element>() else {
                            continue;
                        };
                        let classes = element.class_name();
                        if classes.contains("visible") {
                            continue;
                        }
                        if element.get_bounding_client_rect().top() < height * 0.85 {
                            element.set_class_name(&format!("{classes} visible"));
                        }
                    }
                }
            }) as Box<dyn FnMut()>);

            window
                .add_event_listener_with_callback(
                    "scroll",
                    scroll_callback.as_ref().unchecked_ref(),
                )
                .unwrap();

            // Reveal whatever is already on screen before the first scroll
            scroll_callback
                .as_ref()
                .unchecked_ref::<web_sys::js_sys::Function>()
                .call0(&JsValue::NULL)
                .unwrap();

            move || {
                window
                    .remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();
            }
        },
        (),
    );
}

// Every page calls this on mount so a route change starts at the top.
#[hook]
pub fn use_scroll_to_top() {
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );
}
