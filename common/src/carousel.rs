//! Carousel interaction engine
//!
//! Index navigation over a bounded sequence with drag, click, and
//! keyboard input. The machine is fed plain coordinates and timestamps,
//! so the same code runs under pointer events in the browser and under
//! synthetic sequences in tests.
//!
//! States:
//! - Idle: accepts drag starts and direct navigation
//! - Dragging: tracks a gesture; horizontal intent is locked in once the
//!   horizontal delta dominates the vertical one
//! - Transitioning: settle cool-down after a release or navigation;
//!   every input is dropped until `settle_complete`

/// Gesture thresholds and settle timing
#[derive(Debug, Clone)]
pub struct CarouselConfig {
    /// Minimum drag distance that flips an item, in px
    pub swipe_distance: f64,
    /// Minimum release velocity that flips an item, in px/ms
    pub swipe_velocity: f64,
    /// Settle cool-down after a transition, in ms
    pub settle_ms: u32,
    /// Horizontal delta must exceed this multiple of the vertical delta
    /// before a gesture counts as carousel intent
    pub axis_ratio: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            swipe_distance: 50.0,
            swipe_velocity: 0.3,
            settle_ms: 300,
            axis_ratio: 2.0,
        }
    }
}

/// Public view of the machine's current state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Dragging,
    Transitioning,
}

/// Outcome of a released horizontal gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settle {
    /// Index moved by one
    Advanced,
    /// Below both thresholds, or already at the boundary
    SnappedBack,
}

#[derive(Debug, Clone)]
struct Drag {
    start_x: f64,
    start_y: f64,
    started_at: f64,
    width: f64,
    horizontal: bool,
}

#[derive(Debug, Clone)]
enum State {
    Idle,
    Dragging(Drag),
    Transitioning,
}

/// Index-addressed carousel over a sequence of known length
#[derive(Debug, Clone)]
pub struct Carousel {
    config: CarouselConfig,
    len: usize,
    index: usize,
    offset: f64,
    state: State,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self::with_config(len, CarouselConfig::default())
    }

    pub fn with_config(len: usize, config: CarouselConfig) -> Self {
        Self {
            config,
            len,
            index: 0,
            offset: 0.0,
            state: State::Idle,
        }
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// In-progress drag offset in px, 0 outside a horizontal drag
    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn phase(&self) -> Phase {
        match self.state {
            State::Idle => Phase::Idle,
            State::Dragging(_) => Phase::Dragging,
            State::Transitioning => Phase::Transitioning,
        }
    }

    /// Begin a gesture. Rejected outside Idle and for sequences that
    /// cannot move.
    pub fn drag_start(&mut self, x: f64, y: f64, at_ms: f64, container_width: f64) -> bool {
        if self.len < 2 || !matches!(self.state, State::Idle) {
            return false;
        }
        self.state = State::Dragging(Drag {
            start_x: x,
            start_y: y,
            started_at: at_ms,
            width: container_width.max(0.0),
            horizontal: false,
        });
        true
    }

    /// Track the gesture. Returns the current offset; it stays 0 until
    /// the horizontal delta dominates the vertical one, and is clamped
    /// to the container width afterwards.
    pub fn drag_move(&mut self, x: f64, y: f64) -> f64 {
        let State::Dragging(drag) = &mut self.state else {
            return self.offset;
        };

        let dx = x - drag.start_x;
        let dy = y - drag.start_y;

        if !drag.horizontal {
            if dx.abs() > self.config.axis_ratio * dy.abs() {
                drag.horizontal = true;
            } else {
                // vertical scroll intent, leave the carousel alone
                return self.offset;
            }
        }

        self.offset = if drag.width > 0.0 {
            dx.clamp(-drag.width, drag.width)
        } else {
            dx
        };
        self.offset
    }

    /// Release the gesture. A horizontal release settles (advance or
    /// snap back) and enters the cool-down; an ignored gesture returns
    /// straight to Idle and yields None.
    pub fn drag_end(&mut self, x: f64, at_ms: f64) -> Option<Settle> {
        let State::Dragging(drag) = &self.state else {
            return None;
        };
        let drag = drag.clone();
        self.offset = 0.0;

        if !drag.horizontal {
            self.state = State::Idle;
            return None;
        }

        let distance = x - drag.start_x;
        let elapsed = (at_ms - drag.started_at).max(1.0);
        let velocity = distance.abs() / elapsed;

        let flips = distance.abs() > self.config.swipe_distance
            || velocity > self.config.swipe_velocity;

        let settle = if flips {
            let target = if distance < 0.0 {
                (self.index + 1).min(self.len - 1)
            } else {
                self.index.saturating_sub(1)
            };
            if target != self.index {
                self.index = target;
                Settle::Advanced
            } else {
                Settle::SnappedBack
            }
        } else {
            Settle::SnappedBack
        };

        self.state = State::Transitioning;
        Some(settle)
    }

    /// End the settle cool-down
    pub fn settle_complete(&mut self) {
        if matches!(self.state, State::Transitioning) {
            self.state = State::Idle;
        }
    }

    /// Jump to an index. Honored only while Idle; the target is clamped
    /// and a real move enters the settle cool-down. Returns whether the
    /// index changed.
    pub fn go_to(&mut self, target: usize) -> bool {
        if !matches!(self.state, State::Idle) {
            return false;
        }
        let target = target.min(self.len.saturating_sub(1));
        if target == self.index {
            return false;
        }
        self.index = target;
        self.state = State::Transitioning;
        true
    }

    /// Advance by one; no-op at the last index
    pub fn next(&mut self) -> bool {
        self.go_to(self.index.saturating_add(1))
    }

    /// Step back by one; no-op at index 0
    pub fn prev(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.go_to(self.index - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(len: usize) -> Carousel {
        Carousel::new(len)
    }

    /// Full gesture: press, one move, release
    fn swipe(c: &mut Carousel, dx: f64, duration_ms: f64) -> Option<Settle> {
        assert!(c.drag_start(200.0, 300.0, 1000.0, 400.0));
        c.drag_move(200.0 + dx, 300.0);
        let settle = c.drag_end(200.0 + dx, 1000.0 + duration_ms);
        c.settle_complete();
        settle
    }

    // =============================================
    // Direct navigation
    // =============================================

    #[test]
    fn test_next_prev_walk() {
        let mut c = carousel(3);

        assert!(c.next());
        c.settle_complete();
        assert_eq!(c.index(), 1);

        assert!(c.next());
        c.settle_complete();
        assert_eq!(c.index(), 2);

        assert!(c.prev());
        c.settle_complete();
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn test_boundary_clamp() {
        let mut c = carousel(3);

        assert!(!c.prev());
        assert_eq!(c.index(), 0);
        assert_eq!(c.phase(), Phase::Idle);

        c.go_to(2);
        c.settle_complete();
        assert!(!c.next());
        assert_eq!(c.index(), 2);
        assert_eq!(c.phase(), Phase::Idle);
    }

    #[test]
    fn test_go_to_is_idempotent() {
        let mut c = carousel(4);

        assert!(!c.go_to(0));
        assert_eq!(c.phase(), Phase::Idle);

        assert!(c.go_to(2));
        c.settle_complete();
        assert!(!c.go_to(2));
        assert_eq!(c.index(), 2);
        assert_eq!(c.phase(), Phase::Idle);
    }

    #[test]
    fn test_go_to_clamps_out_of_range() {
        let mut c = carousel(3);
        assert!(c.go_to(99));
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn test_navigation_dropped_during_settle() {
        let mut c = carousel(5);

        assert!(c.next());
        assert_eq!(c.phase(), Phase::Transitioning);

        // dropped, not queued
        assert!(!c.next());
        assert!(!c.go_to(4));
        assert_eq!(c.index(), 1);

        c.settle_complete();
        assert!(c.next());
        c.settle_complete();
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn test_single_item_never_moves() {
        let mut c = carousel(1);
        assert!(!c.next());
        assert!(!c.drag_start(0.0, 0.0, 0.0, 400.0));
        assert_eq!(c.index(), 0);
    }

    // =============================================
    // Drag gestures
    // =============================================

    #[test]
    fn test_fast_left_swipe_advances() {
        let mut c = carousel(3);

        // 80 px left in 150 ms, over both thresholds
        assert_eq!(swipe(&mut c, -80.0, 150.0), Some(Settle::Advanced));
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn test_short_slow_drag_snaps_back() {
        let mut c = carousel(3);

        // 20 px in 200 ms: under 50 px and 0.1 px/ms
        assert_eq!(swipe(&mut c, -20.0, 200.0), Some(Settle::SnappedBack));
        assert_eq!(c.index(), 0);
        assert_eq!(c.offset(), 0.0);
    }

    #[test]
    fn test_short_fast_flick_advances() {
        let mut c = carousel(3);

        // 20 px in 40 ms: under the distance threshold but 0.5 px/ms
        assert_eq!(swipe(&mut c, -20.0, 40.0), Some(Settle::Advanced));
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn test_right_swipe_goes_back() {
        let mut c = carousel(3);
        c.go_to(2);
        c.settle_complete();

        assert_eq!(swipe(&mut c, 120.0, 150.0), Some(Settle::Advanced));
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn test_swipe_past_boundary_snaps_back() {
        let mut c = carousel(3);

        // hard right swipe at index 0
        assert_eq!(swipe(&mut c, 200.0, 100.0), Some(Settle::SnappedBack));
        assert_eq!(c.index(), 0);

        c.go_to(2);
        c.settle_complete();
        assert_eq!(swipe(&mut c, -200.0, 100.0), Some(Settle::SnappedBack));
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn test_diagonal_gesture_is_ignored() {
        let mut c = carousel(3);

        assert!(c.drag_start(200.0, 300.0, 1000.0, 400.0));
        // 60 px left but 40 px down: 60 < 2 * 40, not carousel intent
        assert_eq!(c.drag_move(140.0, 340.0), 0.0);
        assert_eq!(c.drag_end(140.0, 1100.0), None);
        assert_eq!(c.index(), 0);
        assert_eq!(c.phase(), Phase::Idle);
    }

    #[test]
    fn test_horizontal_lock_sticks() {
        let mut c = carousel(3);

        c.drag_start(200.0, 300.0, 1000.0, 400.0);
        // clearly horizontal first
        assert!(c.drag_move(130.0, 302.0) < 0.0);
        // later wobble does not unlock the gesture
        assert!(c.drag_move(120.0, 360.0) < 0.0);
        assert_eq!(c.drag_end(120.0, 1150.0), Some(Settle::Advanced));
    }

    #[test]
    fn test_offset_clamped_to_container() {
        let mut c = carousel(2);

        c.drag_start(500.0, 300.0, 1000.0, 300.0);
        assert_eq!(c.drag_move(40.0, 300.0), -300.0);
        assert_eq!(c.drag_move(950.0, 300.0), 300.0);
    }

    #[test]
    fn test_drag_round_trip_restores_index() {
        let mut c = carousel(4);
        c.go_to(1);
        c.settle_complete();

        let before = c.index();
        assert_eq!(swipe(&mut c, -30.0, 400.0), Some(Settle::SnappedBack));
        assert_eq!(c.index(), before);
        assert_eq!(c.offset(), 0.0);
        assert_eq!(c.phase(), Phase::Idle);
    }

    #[test]
    fn test_drag_rejected_during_settle() {
        let mut c = carousel(3);
        c.next();
        assert_eq!(c.phase(), Phase::Transitioning);

        assert!(!c.drag_start(200.0, 300.0, 1000.0, 400.0));
        assert_eq!(c.drag_end(100.0, 1100.0), None);

        c.settle_complete();
        assert_eq!(c.phase(), Phase::Idle);
    }

    #[test]
    fn test_release_without_start_is_noop() {
        let mut c = carousel(3);
        assert_eq!(c.drag_end(0.0, 0.0), None);
        assert_eq!(c.phase(), Phase::Idle);
    }

    #[test]
    fn test_settle_enters_and_leaves_cooldown() {
        let mut c = carousel(3);

        c.drag_start(200.0, 300.0, 1000.0, 400.0);
        c.drag_move(100.0, 300.0);
        c.drag_end(100.0, 1100.0);
        assert_eq!(c.phase(), Phase::Transitioning);

        c.settle_complete();
        assert_eq!(c.phase(), Phase::Idle);
    }
}
