//! Gesture to section navigation.
//!
//! The controller never touches the DOM. The host feeds it gestures together
//! with the current [`Viewport`], performs the scroll it asks for, and reports
//! back through [`SectionScrollController::complete`] once the animation ends.

use log::debug;

use crate::config::{FOOTER_PROXIMITY, TOUCH_THRESHOLD, WHEEL_THRESHOLD};

/// Something on the page with a vertical offset from the document top.
pub trait SectionBoundary {
    fn offset_top(&self) -> f64;
}

impl SectionBoundary for f64 {
    fn offset_top(&self) -> f64 {
        *self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SectionId(pub u32);

/// Window metrics, read fresh for every gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub scroll_top: f64,
    pub height: f64,
    pub document_height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    fn step(self) -> isize {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    ArrowDown,
    ArrowUp,
    PageDown,
    PageUp,
    Space,
}

impl NavKey {
    /// Maps a `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" => Some(NavKey::ArrowDown),
            "ArrowUp" => Some(NavKey::ArrowUp),
            "PageDown" => Some(NavKey::PageDown),
            "PageUp" => Some(NavKey::PageUp),
            " " | "Spacebar" => Some(NavKey::Space),
            _ => None,
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            NavKey::ArrowDown | NavKey::PageDown | NavKey::Space => Direction::Forward,
            NavKey::ArrowUp | NavKey::PageUp => Direction::Backward,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    Wheel { delta_y: f64 },
    Key(NavKey),
    TouchStart { y: f64 },
    TouchMove,
    TouchEnd { y: f64 },
}

/// Identifies one navigation. Only the in-flight ticket releases the guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollTarget {
    Section { index: usize, top: f64 },
    /// Past the last section: the bottom of the document.
    Footer { top: f64 },
}

impl ScrollTarget {
    pub fn top(&self) -> f64 {
        match *self {
            ScrollTarget::Section { top, .. } | ScrollTarget::Footer { top } => top,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Navigation {
    pub ticket: Ticket,
    pub target: ScrollTarget,
}

/// When the host releases the guard after starting a scroll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Release {
    /// First of `scrollend` or the settle delay.
    ScrollEndOrSettle,
    /// Settle delay only. An instant jump reports `scrollend` at once, while
    /// the rest of the gesture is still arriving.
    Settle,
}

impl Release {
    pub fn for_motion(reduced_motion: bool) -> Self {
        if reduced_motion {
            Release::Settle
        } else {
            Release::ScrollEndOrSettle
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureOutcome {
    pub prevent_default: bool,
    pub navigation: Option<Navigation>,
}

impl GestureOutcome {
    fn ignored() -> Self {
        Self::default()
    }

    fn prevented(navigation: Option<Navigation>) -> Self {
        Self {
            prevent_default: true,
            navigation,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NavigationState {
    pub is_animating: bool,
    pub accumulated_delta: f64,
}

pub struct SectionScrollController<B> {
    sections: Vec<(SectionId, B)>,
    state: NavigationState,
    touch_start_y: Option<f64>,
    generation: u64,
    suspended: bool,
    detached: bool,
}

impl<B: SectionBoundary> Default for SectionScrollController<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: SectionBoundary> SectionScrollController<B> {
    pub fn new() -> Self {
        Self {
            sections: Vec::new(),
            state: NavigationState::default(),
            touch_start_y: None,
            generation: 0,
            suspended: false,
            detached: false,
        }
    }

    /// Adds a section, replacing any boundary already registered under `id`.
    pub fn register_section(&mut self, id: SectionId, boundary: B) {
        match self.sections.iter_mut().find(|(existing, _)| *existing == id) {
            Some(slot) => slot.1 = boundary,
            None => self.sections.push((id, boundary)),
        }
    }

    pub fn unregister_section(&mut self, id: SectionId) -> bool {
        let before = self.sections.len();
        self.sections.retain(|(existing, _)| *existing != id);
        self.sections.len() != before
    }

    pub fn sections(&self) -> impl Iterator<Item = (SectionId, &B)> {
        self.sections.iter().map(|(id, boundary)| (*id, boundary))
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn is_animating(&self) -> bool {
        self.state.is_animating
    }

    /// While suspended every gesture passes through untouched.
    pub fn set_suspended(&mut self, suspended: bool) {
        self.suspended = suspended;
        if suspended {
            self.state.accumulated_delta = 0.0;
            self.touch_start_y = None;
        }
    }

    /// Permanently stops gesture handling.
    pub fn detach(&mut self) {
        self.detached = true;
        self.touch_start_y = None;
    }

    fn ordered_offsets(&self) -> Vec<f64> {
        let mut offsets: Vec<f64> = self
            .sections
            .iter()
            .map(|(_, boundary)| boundary.offset_top())
            .collect();
        offsets.sort_by(|a, b| a.total_cmp(b));
        offsets
    }

    /// Section the viewport logically sits in. Returns `section_count()` when
    /// the viewport is within reach of the document bottom.
    pub fn current_section_index(&self, viewport: &Viewport) -> usize {
        let offsets = self.ordered_offsets();
        if viewport.scroll_top + viewport.height >= viewport.document_height - FOOTER_PROXIMITY {
            return offsets.len();
        }

        let lead = viewport.scroll_top + viewport.height / 3.0;
        offsets
            .iter()
            .rposition(|offset| *offset <= lead)
            .unwrap_or(0)
    }

    pub fn navigate(&mut self, target: isize, viewport: &Viewport) -> Option<Navigation> {
        if self.state.is_animating || target < 0 {
            return None;
        }

        let offsets = self.ordered_offsets();
        let index = target as usize;
        let target = match offsets.get(index) {
            Some(top) => ScrollTarget::Section { index, top: *top },
            None => ScrollTarget::Footer {
                top: viewport.document_height,
            },
        };

        self.generation += 1;
        self.state.is_animating = true;
        self.state.accumulated_delta = 0.0;
        debug!("section scroll: navigating to {:?}", target);

        Some(Navigation {
            ticket: Ticket(self.generation),
            target,
        })
    }

    fn step(&mut self, direction: Direction, viewport: &Viewport) -> Option<Navigation> {
        let current = self.current_section_index(viewport) as isize;
        self.navigate(current + direction.step(), viewport)
    }

    /// Releases the guard if `ticket` belongs to the navigation in flight.
    pub fn complete(&mut self, ticket: Ticket) -> bool {
        if !self.state.is_animating || ticket.0 != self.generation {
            debug!("section scroll: ignoring stale completion {:?}", ticket);
            return false;
        }
        self.state.is_animating = false;
        self.state.accumulated_delta = 0.0;
        true
    }

    pub fn handle(&mut self, gesture: Gesture, viewport: &Viewport) -> GestureOutcome {
        if self.detached || self.suspended || self.sections.is_empty() {
            return GestureOutcome::ignored();
        }

        match gesture {
            Gesture::Wheel { delta_y } => {
                if self.state.is_animating {
                    return GestureOutcome::prevented(None);
                }
                self.state.accumulated_delta += delta_y;
                let accumulated = self.state.accumulated_delta;
                let direction = if accumulated > WHEEL_THRESHOLD {
                    Direction::Forward
                } else if accumulated < -WHEEL_THRESHOLD {
                    Direction::Backward
                } else {
                    return GestureOutcome::prevented(None);
                };
                // The gesture is spent even when the step lands out of range.
                self.state.accumulated_delta = 0.0;
                GestureOutcome::prevented(self.step(direction, viewport))
            }
            Gesture::Key(key) => {
                if self.state.is_animating {
                    return GestureOutcome::prevented(None);
                }
                GestureOutcome::prevented(self.step(key.direction(), viewport))
            }
            Gesture::TouchStart { y } => {
                self.touch_start_y = Some(y);
                GestureOutcome::ignored()
            }
            Gesture::TouchMove => GestureOutcome::prevented(None),
            Gesture::TouchEnd { y } => {
                let Some(start) = self.touch_start_y.take() else {
                    return GestureOutcome::ignored();
                };
                if self.state.is_animating {
                    return GestureOutcome::ignored();
                }
                let diff = start - y;
                let navigation = if diff > TOUCH_THRESHOLD {
                    self.step(Direction::Forward, viewport)
                } else if diff < -TOUCH_THRESHOLD {
                    self.step(Direction::Backward, viewport)
                } else {
                    None
                };
                GestureOutcome {
                    prevent_default: false,
                    navigation,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SETTLE_DELAY_MS;
    use proptest::prelude::*;

    const HEIGHT: f64 = 900.0;

    fn controller(count: u32) -> SectionScrollController<f64> {
        let mut controller = SectionScrollController::new();
        for i in 0..count {
            controller.register_section(SectionId(i), i as f64 * HEIGHT);
        }
        controller
    }

    /// Five full-height sections followed by a 400px footer.
    fn at(scroll_top: f64, count: u32) -> Viewport {
        Viewport {
            scroll_top,
            height: HEIGHT,
            document_height: count as f64 * HEIGHT + 400.0,
        }
    }

    #[test]
    fn current_index_tracks_one_third_lead() {
        let controller = controller(5);
        for k in 0..4u32 {
            let offset = k as f64 * HEIGHT;
            assert_eq!(controller.current_section_index(&at(offset, 5)), k as usize);
            assert_eq!(
                controller.current_section_index(&at(offset + HEIGHT / 3.0, 5)),
                k as usize
            );
        }
        // Section 1 counts as current a third of a viewport early.
        assert_eq!(controller.current_section_index(&at(HEIGHT - HEIGHT / 3.0, 5)), 1);
        assert_eq!(controller.current_section_index(&at(HEIGHT - HEIGHT / 3.0 - 1.0, 5)), 0);
    }

    #[test]
    fn near_bottom_reports_footer_index() {
        let controller = controller(5);
        let viewport = at(0.0, 5);
        let bottom = viewport.document_height - viewport.height;
        assert_eq!(controller.current_section_index(&at(bottom - 99.0, 5)), 5);
        assert_eq!(controller.current_section_index(&at(bottom - 100.0, 5)), 5);
        assert_eq!(controller.current_section_index(&at(bottom - 101.0, 5)), 4);
    }

    #[test]
    fn navigate_past_last_section_targets_document_bottom() {
        let mut controller = controller(5);
        let viewport = at(4.0 * HEIGHT, 5);
        let navigation = controller.navigate(5, &viewport).unwrap();
        assert_eq!(
            navigation.target,
            ScrollTarget::Footer {
                top: viewport.document_height
            }
        );
        assert!(controller.is_animating());
    }

    #[test]
    fn navigate_out_of_range_or_in_flight_is_noop() {
        let mut controller = controller(5);
        let viewport = at(0.0, 5);
        controller.state.accumulated_delta = 12.0;

        assert_eq!(controller.navigate(-1, &viewport), None);
        assert_eq!(
            controller.state(),
            NavigationState {
                is_animating: false,
                accumulated_delta: 12.0
            }
        );

        let first = controller.navigate(2, &viewport).unwrap();
        assert_eq!(first.target, ScrollTarget::Section { index: 2, top: 2.0 * HEIGHT });
        controller.state.accumulated_delta = 7.0;
        assert_eq!(controller.navigate(3, &viewport), None);
        assert_eq!(controller.state().accumulated_delta, 7.0);
    }

    #[test]
    fn wheel_fires_only_above_threshold() {
        let mut controller = controller(5);
        let viewport = at(0.0, 5);

        let outcome = controller.handle(Gesture::Wheel { delta_y: 30.0 }, &viewport);
        assert!(outcome.prevent_default);
        assert!(outcome.navigation.is_none());
        let outcome = controller.handle(Gesture::Wheel { delta_y: 20.0 }, &viewport);
        assert!(outcome.navigation.is_none());
        assert_eq!(controller.state().accumulated_delta, 50.0);

        let outcome = controller.handle(Gesture::Wheel { delta_y: 1.0 }, &viewport);
        let navigation = outcome.navigation.unwrap();
        assert_eq!(navigation.target, ScrollTarget::Section { index: 1, top: HEIGHT });
        assert_eq!(controller.state().accumulated_delta, 0.0);
    }

    #[test]
    fn wheel_is_swallowed_while_animating() {
        let mut controller = controller(5);
        let viewport = at(0.0, 5);
        controller.handle(Gesture::Wheel { delta_y: 120.0 }, &viewport);

        let outcome = controller.handle(Gesture::Wheel { delta_y: 120.0 }, &viewport);
        assert!(outcome.prevent_default);
        assert!(outcome.navigation.is_none());
        assert_eq!(controller.state().accumulated_delta, 0.0);
    }

    #[test]
    fn wheel_up_at_top_consumes_gesture() {
        let mut controller = controller(5);
        let viewport = at(0.0, 5);
        let outcome = controller.handle(Gesture::Wheel { delta_y: -80.0 }, &viewport);
        assert!(outcome.navigation.is_none());
        assert!(!controller.is_animating());
        assert_eq!(controller.state().accumulated_delta, 0.0);
    }

    #[test]
    fn touch_swipe_threshold() {
        let mut controller = controller(5);
        let viewport = at(HEIGHT, 5);

        let start = controller.handle(Gesture::TouchStart { y: 500.0 }, &viewport);
        assert!(!start.prevent_default);
        assert!(controller.handle(Gesture::TouchMove, &viewport).prevent_default);
        let short = controller.handle(Gesture::TouchEnd { y: 471.0 }, &viewport);
        assert!(short.navigation.is_none());

        controller.handle(Gesture::TouchStart { y: 500.0 }, &viewport);
        let up = controller.handle(Gesture::TouchEnd { y: 469.0 }, &viewport);
        assert_eq!(
            up.navigation.unwrap().target,
            ScrollTarget::Section { index: 2, top: 2.0 * HEIGHT }
        );
        controller.complete(up.navigation.unwrap().ticket);

        controller.handle(Gesture::TouchStart { y: 500.0 }, &viewport);
        let down = controller.handle(Gesture::TouchEnd { y: 531.0 }, &viewport);
        assert_eq!(
            down.navigation.unwrap().target,
            ScrollTarget::Section { index: 0, top: 0.0 }
        );
    }

    #[test]
    fn rapid_arrow_down_navigates_once() {
        let mut controller = controller(5);
        let viewport = at(0.0, 5);
        let key = Gesture::Key(NavKey::from_key("ArrowDown").unwrap());

        let navigations: Vec<_> = (0..3)
            .filter_map(|_| controller.handle(key, &viewport).navigation)
            .collect();
        assert_eq!(navigations.len(), 1);
        assert_eq!(navigations[0].target, ScrollTarget::Section { index: 1, top: HEIGHT });
    }

    #[test]
    fn keys_map_to_directions() {
        assert_eq!(NavKey::from_key(" ").map(NavKey::direction), Some(Direction::Forward));
        assert_eq!(NavKey::from_key("PageDown").map(NavKey::direction), Some(Direction::Forward));
        assert_eq!(NavKey::from_key("PageUp").map(NavKey::direction), Some(Direction::Backward));
        assert_eq!(NavKey::from_key("Enter"), None);
    }

    #[test]
    fn completion_requires_current_ticket() {
        let mut controller = controller(5);
        let viewport = at(0.0, 5);
        let first = controller.navigate(1, &viewport).unwrap();
        assert!(controller.complete(first.ticket));
        assert!(!controller.complete(first.ticket));

        let second = controller.navigate(2, &viewport).unwrap();
        assert!(!controller.complete(first.ticket));
        assert!(controller.is_animating());
        assert!(controller.complete(second.ticket));
        assert!(!controller.is_animating());
    }

    #[test]
    fn empty_controller_is_inert() {
        let mut controller = controller(0);
        let viewport = at(0.0, 0);
        let outcome = controller.handle(Gesture::Wheel { delta_y: 500.0 }, &viewport);
        assert_eq!(outcome, GestureOutcome::default());
        let outcome = controller.handle(Gesture::Key(NavKey::ArrowDown), &viewport);
        assert_eq!(outcome, GestureOutcome::default());
    }

    #[test]
    fn detach_mid_animation_stops_navigation() {
        let mut controller = controller(5);
        let viewport = at(0.0, 5);
        let navigation = controller.handle(Gesture::Key(NavKey::ArrowDown), &viewport).navigation;
        assert!(navigation.is_some());

        controller.detach();
        controller.complete(navigation.unwrap().ticket);
        for _ in 0..10 {
            let outcome = controller.handle(Gesture::Wheel { delta_y: 200.0 }, &viewport);
            assert_eq!(outcome, GestureOutcome::default());
        }
    }

    const FLING: [f64; 12] = [120.0, 110.0, 100.0, 90.0, 80.0, 70.0, 60.0, 50.0, 40.0, 30.0, 25.0, 20.0];

    /// Replays a trackpad fling, one wheel event per 16ms frame, against a
    /// host that jumps instantly and releases the guard per `release`.
    fn instant_fling(release: Release) -> Vec<ScrollTarget> {
        let mut controller = controller(5);
        let mut viewport = at(0.0, 5);
        let mut pending: Option<(Ticket, u32)> = None;
        let mut targets = Vec::new();

        for (frame, delta_y) in FLING.iter().enumerate() {
            let now = frame as u32 * 16;
            if let Some((ticket, deadline)) = pending {
                if now >= deadline {
                    controller.complete(ticket);
                    pending = None;
                }
            }
            let outcome = controller.handle(Gesture::Wheel { delta_y: *delta_y }, &viewport);
            if let Some(navigation) = outcome.navigation {
                targets.push(navigation.target);
                viewport.scroll_top = navigation
                    .target
                    .top()
                    .min(viewport.document_height - viewport.height);
                match release {
                    // scrollend follows an instant jump immediately.
                    Release::ScrollEndOrSettle => {
                        controller.complete(navigation.ticket);
                    }
                    Release::Settle => pending = Some((navigation.ticket, now + SETTLE_DELAY_MS)),
                }
            }
        }
        targets
    }

    #[test]
    fn reduced_motion_waits_for_settle_delay() {
        assert_eq!(Release::for_motion(true), Release::Settle);
        assert_eq!(Release::for_motion(false), Release::ScrollEndOrSettle);
    }

    #[test]
    fn instant_fling_moves_one_section() {
        let targets = instant_fling(Release::for_motion(true));
        assert_eq!(targets, vec![ScrollTarget::Section { index: 1, top: HEIGHT }]);

        // Releasing on scrollend alone lets one fling run to the footer.
        assert!(instant_fling(Release::ScrollEndOrSettle).len() > 1);
    }

    #[test]
    fn suspended_controller_passes_gestures_through() {
        let mut controller = controller(5);
        let viewport = at(0.0, 5);
        controller.handle(Gesture::Wheel { delta_y: 40.0 }, &viewport);
        controller.set_suspended(true);
        assert_eq!(
            controller.handle(Gesture::Wheel { delta_y: 40.0 }, &viewport),
            GestureOutcome::default()
        );
        controller.set_suspended(false);
        let outcome = controller.handle(Gesture::Wheel { delta_y: 40.0 }, &viewport);
        assert!(outcome.navigation.is_none());
    }

    #[test]
    fn registration_is_ordered_by_offset() {
        let mut controller = SectionScrollController::new();
        controller.register_section(SectionId(7), 1800.0);
        controller.register_section(SectionId(3), 0.0);
        controller.register_section(SectionId(5), 900.0);
        let viewport = Viewport {
            scroll_top: 900.0,
            height: HEIGHT,
            document_height: 5000.0,
        };
        assert_eq!(controller.current_section_index(&viewport), 1);

        controller.register_section(SectionId(5), 1200.0);
        assert_eq!(controller.section_count(), 3);
        assert!(controller.unregister_section(SectionId(3)));
        assert!(!controller.unregister_section(SectionId(3)));
        let navigation = controller.navigate(0, &viewport).unwrap();
        assert_eq!(navigation.target, ScrollTarget::Section { index: 0, top: 1200.0 });
    }

    #[derive(Clone, Debug)]
    enum Step {
        Input(Gesture),
        Finish,
        Jump(f64),
    }

    fn step_strategy() -> impl Strategy<Value = Step> {
        prop_oneof![
            (-200.0f64..200.0).prop_map(|delta_y| Step::Input(Gesture::Wheel { delta_y })),
            prop_oneof![
                Just(NavKey::ArrowDown),
                Just(NavKey::ArrowUp),
                Just(NavKey::PageDown),
                Just(NavKey::PageUp),
                Just(NavKey::Space),
            ]
            .prop_map(|key| Step::Input(Gesture::Key(key))),
            (0.0f64..800.0).prop_map(|y| Step::Input(Gesture::TouchStart { y })),
            (0.0f64..800.0).prop_map(|y| Step::Input(Gesture::TouchEnd { y })),
            Just(Step::Finish),
            (0.0f64..4900.0).prop_map(Step::Jump),
        ]
    }

    proptest! {
        #[test]
        fn at_most_one_navigation_in_flight(steps in prop::collection::vec(step_strategy(), 1..200)) {
            let mut controller = controller(5);
            let mut viewport = at(0.0, 5);
            let mut in_flight: Option<Ticket> = None;

            for step in steps {
                match step {
                    Step::Input(gesture) => {
                        let outcome = controller.handle(gesture, &viewport);
                        if let Some(navigation) = outcome.navigation {
                            prop_assert!(in_flight.is_none());
                            in_flight = Some(navigation.ticket);
                            viewport.scroll_top = navigation.target.top().min(viewport.document_height - viewport.height);
                        }
                    }
                    Step::Finish => {
                        if let Some(ticket) = in_flight.take() {
                            prop_assert!(controller.complete(ticket));
                        }
                    }
                    Step::Jump(top) => {
                        viewport.scroll_top = top.min(viewport.document_height - viewport.height);
                    }
                }
                prop_assert_eq!(controller.is_animating(), in_flight.is_some());
            }
        }
    }
}
