use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, Element, Event, WheelEvent, Window};
use yew::prelude::*;

use crate::config::HORIZONTAL_WHEEL_MULTIPLIER;

/// Horizontal distance a vertical wheel delta moves the rail.
pub fn horizontal_delta(delta_y: f64) -> f64 {
    delta_y * HORIZONTAL_WHEEL_MULTIPLIER
}

pub fn is_touch_device(window: &Window) -> bool {
    let has_touch_start =
        web_sys::js_sys::Reflect::has(window, &JsValue::from_str("ontouchstart")).unwrap_or(false);
    has_touch_start || window.navigator().max_touch_points() > 0
}

/// Turns vertical wheel input over `node` into horizontal scrolling.
/// Touch devices keep their native swipe.
#[hook]
pub fn use_horizontal_wheel(node: NodeRef) {
    use_effect_with_deps(
        move |node| {
            let window = web_sys::window();
            let container = node.cast::<Element>();
            let mut installed = None;

            if let (Some(window), Some(container)) = (window, container) {
                if is_touch_device(&window) {
                    debug!("touch device, keeping native rail scrolling");
                } else {
                    let target = container.clone();
                    let on_wheel = Closure::wrap(Box::new(move |event: Event| {
                        if let Some(wheel) = event.dyn_ref::<WheelEvent>() {
                            event.prevent_default();
                            target.scroll_by_with_x_and_y(horizontal_delta(wheel.delta_y()), 0.0);
                        }
                    }) as Box<dyn FnMut(Event)>);

                    let options = AddEventListenerOptions::new();
                    options.set_passive(false);
                    if container
                        .add_event_listener_with_callback_and_add_event_listener_options(
                            "wheel",
                            on_wheel.as_ref().unchecked_ref(),
                            &options,
                        )
                        .is_ok()
                    {
                        installed = Some((container, on_wheel));
                    }
                }
            }

            move || {
                if let Some((container, on_wheel)) = installed {
                    let _ = container.remove_event_listener_with_callback(
                        "wheel",
                        on_wheel.as_ref().unchecked_ref(),
                    );
                }
            }
        },
        node,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_delta_is_amplified() {
        assert_eq!(horizontal_delta(100.0), 250.0);
        assert_eq!(horizontal_delta(-4.0), -10.0);
        assert_eq!(horizontal_delta(0.0), 0.0);
    }
}
