use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use log::{debug, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    AddEventListenerOptions, Event, EventTarget, HtmlElement, KeyboardEvent, ScrollBehavior,
    ScrollToOptions, TouchEvent, WheelEvent, Window,
};
use yew::prelude::*;

use super::controller::{
    Gesture, NavKey, Navigation, Release, SectionBoundary, SectionId, SectionScrollController,
    Ticket, Viewport,
};
use crate::config::SETTLE_DELAY_MS;
use crate::motion::prefers_reduced_motion;

type SharedController = Rc<RefCell<SectionScrollController<HtmlElement>>>;

impl SectionBoundary for HtmlElement {
    fn offset_top(&self) -> f64 {
        HtmlElement::offset_top(self) as f64
    }
}

// (event, passive)
const LISTENED_EVENTS: [(&str, bool); 5] = [
    ("wheel", false),
    ("keydown", false),
    ("touchstart", true),
    ("touchmove", false),
    ("touchend", true),
];

fn read_viewport(window: &Window) -> Option<Viewport> {
    let scroll_top = window.scroll_y().ok()?;
    let height = window.inner_height().ok()?.as_f64()?;
    let document_height = window.document()?.body()?.scroll_height() as f64;
    Some(Viewport {
        scroll_top,
        height,
        document_height,
    })
}

fn query_sections(window: &Window, selector: &str) -> Vec<HtmlElement> {
    let Some(document) = window.document() else {
        return Vec::new();
    };
    let nodes = match document.query_selector_all(selector) {
        Ok(nodes) => nodes,
        Err(_) => {
            warn!("invalid section selector {}", selector);
            return Vec::new();
        }
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Whether the focused element keeps `key` for itself: text entry takes
/// every navigation key, and Space activates buttons, links and summaries.
fn target_claims_key(tag: &str, content_editable: bool, key: NavKey) -> bool {
    if content_editable || matches!(tag, "INPUT" | "TEXTAREA" | "SELECT") {
        return true;
    }
    key == NavKey::Space && matches!(tag, "BUTTON" | "A" | "SUMMARY")
}

fn focused_target_claims(target: Option<EventTarget>, key: NavKey) -> bool {
    target
        .and_then(|target| target.dyn_into::<HtmlElement>().ok())
        .map(|element| {
            target_claims_key(&element.tag_name(), element.is_content_editable(), key)
        })
        .unwrap_or(false)
}

fn gesture_from_event(event: &Event) -> Option<Gesture> {
    match event.type_().as_str() {
        "wheel" => event
            .dyn_ref::<WheelEvent>()
            .map(|wheel| Gesture::Wheel {
                delta_y: wheel.delta_y(),
            }),
        "keydown" => {
            let key = event.dyn_ref::<KeyboardEvent>()?;
            if key.ctrl_key() || key.meta_key() || key.alt_key() {
                return None;
            }
            let nav = NavKey::from_key(&key.key())?;
            if focused_target_claims(event.target(), nav) {
                return None;
            }
            Some(Gesture::Key(nav))
        }
        "touchstart" => event
            .dyn_ref::<TouchEvent>()?
            .touches()
            .get(0)
            .map(|touch| Gesture::TouchStart {
                y: touch.client_y() as f64,
            }),
        "touchmove" => Some(Gesture::TouchMove),
        "touchend" => event
            .dyn_ref::<TouchEvent>()?
            .changed_touches()
            .get(0)
            .map(|touch| Gesture::TouchEnd {
                y: touch.client_y() as f64,
            }),
        _ => None,
    }
}

/// Runs one scroll animation at a time and reports its end to the controller.
///
/// The end is the first of `scrollend` or the settle timeout, or only the
/// timeout when motion is reduced. Starting a new animation or cancelling
/// drops both, so only one timer is ever pending.
struct ScrollAnimator {
    window: Window,
    controller: Weak<RefCell<SectionScrollController<HtmlElement>>>,
    fallback: RefCell<Option<Timeout>>,
    scroll_end: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl ScrollAnimator {
    fn start(self: &Rc<Self>, navigation: Navigation) {
        self.cancel();

        let reduced = prefers_reduced_motion();
        let options = ScrollToOptions::new();
        options.set_top(navigation.target.top());
        options.set_behavior(if reduced {
            ScrollBehavior::Instant
        } else {
            ScrollBehavior::Smooth
        });
        self.window.scroll_with_scroll_to_options(&options);

        let ticket = navigation.ticket;
        if Release::for_motion(reduced) == Release::ScrollEndOrSettle {
            self.listen_for_scroll_end(ticket);
        }

        let animator = Rc::downgrade(self);
        let timeout = Timeout::new(SETTLE_DELAY_MS, move || {
            if let Some(animator) = animator.upgrade() {
                animator.finish(ticket);
            }
        });
        *self.fallback.borrow_mut() = Some(timeout);
    }

    fn listen_for_scroll_end(self: &Rc<Self>, ticket: Ticket) {
        let animator = Rc::downgrade(self);
        let on_end = Closure::wrap(Box::new(move || {
            if let Some(animator) = animator.upgrade() {
                animator.finish(ticket);
            }
        }) as Box<dyn FnMut()>);
        let listen_once = AddEventListenerOptions::new();
        listen_once.set_once(true);
        if self
            .window
            .add_event_listener_with_callback_and_add_event_listener_options(
                "scrollend",
                on_end.as_ref().unchecked_ref(),
                &listen_once,
            )
            .is_err()
        {
            debug!("scrollend unavailable, relying on settle timeout");
        }
        *self.scroll_end.borrow_mut() = Some(on_end);
    }

    fn finish(&self, ticket: Ticket) {
        self.cancel();
        if let Some(controller) = self.controller.upgrade() {
            match controller.try_borrow_mut() {
                Ok(mut controller) => {
                    controller.complete(ticket);
                }
                Err(_) => warn!("section scroll: controller busy at animation end"),
            }
        }
    }

    fn cancel(&self) {
        drop(self.fallback.borrow_mut().take());
        if let Some(on_end) = self.scroll_end.borrow_mut().take() {
            let _ = self
                .window
                .remove_event_listener_with_callback("scrollend", on_end.as_ref().unchecked_ref());
        }
    }
}

struct Attached {
    window: Window,
    controller: SharedController,
    animator: Rc<ScrollAnimator>,
    listeners: Vec<(&'static str, Closure<dyn FnMut(Event)>)>,
    next_id: u32,
}

impl Attached {
    fn listen(&mut self, event_type: &'static str, passive: bool) {
        let controller = self.controller.clone();
        let animator = self.animator.clone();
        let window = self.window.clone();

        let callback = Closure::wrap(Box::new(move |event: Event| {
            let Some(gesture) = gesture_from_event(&event) else {
                return;
            };
            let Some(viewport) = read_viewport(&window) else {
                return;
            };
            let outcome = controller.borrow_mut().handle(gesture, &viewport);
            if outcome.prevent_default {
                event.prevent_default();
            }
            if let Some(navigation) = outcome.navigation {
                animator.start(navigation);
            }
        }) as Box<dyn FnMut(Event)>);

        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        if let Err(err) = self
            .window
            .add_event_listener_with_callback_and_add_event_listener_options(
                event_type,
                callback.as_ref().unchecked_ref(),
                &options,
            )
        {
            warn!("failed to listen for {}: {:?}", event_type, err);
            return;
        }
        self.listeners.push((event_type, callback));
    }
}

/// Live section navigation on the window. Dropping it detaches.
pub struct SectionScrollHandle {
    attached: Option<Attached>,
}

impl SectionScrollHandle {
    /// Registers every element matching `selector` and starts listening.
    /// With no matching element nothing is installed and the handle is inert.
    pub fn attach(selector: &str) -> Self {
        let Some(window) = web_sys::window() else {
            warn!("section scroll: no window");
            return Self { attached: None };
        };

        let elements = query_sections(&window, selector);
        if elements.is_empty() {
            debug!("section scroll: nothing matches {}, staying inert", selector);
            return Self { attached: None };
        }

        let controller: SharedController = Rc::new(RefCell::new(SectionScrollController::new()));
        let mut next_id = 0;
        for element in elements {
            controller.borrow_mut().register_section(SectionId(next_id), element);
            next_id += 1;
        }

        let animator = Rc::new(ScrollAnimator {
            window: window.clone(),
            controller: Rc::downgrade(&controller),
            fallback: RefCell::new(None),
            scroll_end: RefCell::new(None),
        });

        let mut attached = Attached {
            window,
            controller,
            animator,
            listeners: Vec::with_capacity(LISTENED_EVENTS.len()),
            next_id,
        };
        for (event_type, passive) in LISTENED_EVENTS {
            attached.listen(event_type, passive);
        }

        info!("section scroll attached to {} sections", next_id);
        Self {
            attached: Some(attached),
        }
    }

    pub fn set_suspended(&self, suspended: bool) {
        if let Some(attached) = &self.attached {
            attached.controller.borrow_mut().set_suspended(suspended);
        }
    }

    /// Re-syncs the registered sections with the document.
    pub fn refresh(&mut self, selector: &str) {
        let Some(attached) = self.attached.as_mut() else {
            return;
        };
        let found = query_sections(&attached.window, selector);
        let mut controller = attached.controller.borrow_mut();

        let stale: Vec<SectionId> = controller
            .sections()
            .filter(|(_, element)| !element.is_connected() || !found.contains(*element))
            .map(|(id, _)| id)
            .collect();
        for id in stale {
            controller.unregister_section(id);
        }

        for element in found {
            if !controller.sections().any(|(_, known)| *known == element) {
                controller.register_section(SectionId(attached.next_id), element);
                attached.next_id += 1;
            }
        }
    }

    /// Removes every listener. Safe to call more than once.
    pub fn detach(&mut self) {
        let Some(attached) = self.attached.take() else {
            return;
        };
        for (event_type, callback) in &attached.listeners {
            let _ = attached
                .window
                .remove_event_listener_with_callback(event_type, callback.as_ref().unchecked_ref());
        }
        attached.controller.borrow_mut().detach();
        attached.animator.cancel();
        debug!("section scroll detached");
    }
}

impl Drop for SectionScrollHandle {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Section navigation for the lifetime of the calling component.
///
/// `suspended` lets overlays take over input; a change of `content_key`
/// rescans the sections after the page re-rendered.
#[hook]
pub fn use_section_scroll(selector: &'static str, suspended: bool, content_key: &'static str) {
    let handle = use_mut_ref(|| None::<SectionScrollHandle>);

    {
        let handle = handle.clone();
        use_effect_with_deps(
            move |_| {
                *handle.borrow_mut() = Some(SectionScrollHandle::attach(selector));
                move || {
                    if let Some(mut attached) = handle.borrow_mut().take() {
                        attached.detach();
                    }
                }
            },
            (),
        );
    }

    {
        let handle = handle.clone();
        use_effect_with_deps(
            move |suspended| {
                if let Some(attached) = handle.borrow().as_ref() {
                    attached.set_suspended(*suspended);
                }
                || ()
            },
            suspended,
        );
    }

    use_effect_with_deps(
        move |_| {
            if let Some(attached) = handle.borrow_mut().as_mut() {
                attached.refresh(selector);
            }
            || ()
        },
        content_key,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_entry_keeps_every_navigation_key() {
        for tag in ["INPUT", "TEXTAREA", "SELECT"] {
            for key in [NavKey::ArrowDown, NavKey::PageUp, NavKey::Space] {
                assert!(target_claims_key(tag, false, key), "{} {:?}", tag, key);
            }
        }
        assert!(target_claims_key("DIV", true, NavKey::ArrowUp));
    }

    #[test]
    fn space_on_a_focused_control_activates_it() {
        for tag in ["BUTTON", "A", "SUMMARY"] {
            assert!(target_claims_key(tag, false, NavKey::Space), "{}", tag);
            assert!(!target_claims_key(tag, false, NavKey::PageDown), "{}", tag);
            assert!(!target_claims_key(tag, false, NavKey::ArrowDown), "{}", tag);
        }
        assert!(!target_claims_key("BODY", false, NavKey::Space));
        assert!(!target_claims_key("SECTION", false, NavKey::Space));
    }
}
