//! Once-only scroll reveal.
//!
//! A [`RevealController`] owns the state of one wrapped block. It starts
//! `Unobserved` (rendered at rest, so content without a viewport API is
//! never hidden), drops to `Hidden` once an observer is attached, and moves
//! to `Visible` on the first qualifying intersection. `Visible` is terminal.
//!
//! ```rust
//! use bootcamp_landing::reveal::{IntersectionSample, RevealController, RevealOptions, RevealState};
//!
//! let mut reveal = RevealController::new(RevealOptions::default().with_delay(0.2));
//! reveal.observe();
//! assert_eq!(reveal.state(), RevealState::Hidden);
//!
//! reveal.on_intersection(IntersectionSample::entering(0.3));
//! reveal.on_intersection(IntersectionSample::leaving());
//! assert_eq!(reveal.state(), RevealState::Visible);
//! ```

use tracing::debug;

/// Root margin applied to the viewport before testing intersection.
/// Negative values shrink the viewport, so the trigger fires once the block
/// is this far inside the screen edge.
pub const DEFAULT_MARGIN_PX: i32 = -50;
/// Animation length in seconds.
pub const DEFAULT_DURATION: f64 = 0.6;
/// Starting vertical offset in CSS pixels.
pub const DEFAULT_OFFSET_Y: f64 = 40.0;

/// Lifecycle of one reveal block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    /// No observer yet. Rendered at rest.
    Unobserved,
    /// Observer attached, waiting for the first intersection.
    Hidden,
    /// Terminal.
    Visible,
}

/// Result of feeding an event to the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Hidden -> Visible happened on this call; stop observing.
    Revealed,
    Ignored,
}

/// A `cubic-bezier(x1, y1, x2, y2)` timing function with fixed endpoints
/// at (0, 0) and (1, 1).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl CubicBezier {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// The CSS `ease` curve, used for the reveal.
    pub const EASE: CubicBezier = CubicBezier::new(0.25, 0.1, 0.25, 1.0);

    fn sample(a1: f64, a2: f64, t: f64) -> f64 {
        // Bernstein form with P0 = 0, P3 = 1.
        let mt = 1.0 - t;
        3.0 * mt * mt * t * a1 + 3.0 * mt * t * t * a2 + t * t * t
    }

    fn sample_dx(&self, t: f64) -> f64 {
        let mt = 1.0 - t;
        3.0 * mt * mt * self.x1
            + 6.0 * mt * t * (self.x2 - self.x1)
            + 3.0 * t * t * (1.0 - self.x2)
    }

    /// Solve for the curve parameter whose x equals `x`.
    fn solve_t(&self, x: f64) -> f64 {
        let mut t = x;
        for _ in 0..8 {
            let err = Self::sample(self.x1, self.x2, t) - x;
            if err.abs() < 1e-7 {
                return t;
            }
            let d = self.sample_dx(t);
            if d.abs() < 1e-6 {
                break;
            }
            t -= err / d;
        }

        // Newton stalled on a flat spot; fall back to bisection.
        let (mut lo, mut hi) = (0.0, 1.0);
        t = x;
        for _ in 0..32 {
            let v = Self::sample(self.x1, self.x2, t);
            if (v - x).abs() < 1e-7 {
                break;
            }
            if v < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        t
    }

    /// Eased progress for linear progress `x` in `[0, 1]`.
    pub fn ease(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        Self::sample(self.y1, self.y2, self.solve_t(x))
    }

    pub fn to_css(&self) -> String {
        format!(
            "cubic-bezier({}, {}, {}, {})",
            self.x1, self.y1, self.x2, self.y2
        )
    }
}

/// Knobs for a single reveal block.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    /// Seconds between the trigger and the start of the animation.
    pub delay: f64,
    pub margin_px: i32,
    /// Minimum visible fraction that counts as "in view".
    pub threshold: f64,
    pub duration: f64,
    pub easing: CubicBezier,
    pub offset_y: f64,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            delay: 0.0,
            margin_px: DEFAULT_MARGIN_PX,
            threshold: 0.0,
            duration: DEFAULT_DURATION,
            easing: CubicBezier::EASE,
            offset_y: DEFAULT_OFFSET_Y,
        }
    }
}

impl RevealOptions {
    /// Stagger delay; negative or NaN input clamps to zero.
    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = if delay.is_finite() && delay > 0.0 { delay } else { 0.0 };
        self
    }

    pub fn with_margin(mut self, margin_px: i32) -> Self {
        self.margin_px = margin_px;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold.clamp(0.0, 1.0);
        self
    }

    /// Inline style while waiting for the first intersection.
    pub fn hidden_style(&self) -> String {
        format!("opacity:0;transform:translateY({}px)", self.offset_y)
    }

    /// Inline style once revealed: resting values plus the transition that
    /// animates into them.
    pub fn revealed_style(&self) -> String {
        let curve = self.easing.to_css();
        format!(
            "opacity:1;transform:none;transition:opacity {d}s {curve} {delay}s, \
             transform {d}s {curve} {delay}s",
            d = self.duration,
            delay = self.delay,
        )
    }

    /// `rootMargin` string for `IntersectionObserver`.
    pub fn root_margin(&self) -> String {
        format!("{}px", self.margin_px)
    }
}

/// Axis-aligned box in viewport coordinates (CSS pixels).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    fn inset(&self, by: f64) -> Rect {
        Rect {
            x: self.x + by,
            y: self.y + by,
            width: (self.width - 2.0 * by).max(0.0),
            height: (self.height - 2.0 * by).max(0.0),
        }
    }

    fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// One observation of a block against the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionSample {
    pub is_intersecting: bool,
    /// Visible fraction of the block, `0.0..=1.0`.
    pub ratio: f64,
}

impl IntersectionSample {
    pub fn entering(ratio: f64) -> Self {
        Self {
            is_intersecting: true,
            ratio: ratio.clamp(0.0, 1.0),
        }
    }

    pub fn leaving() -> Self {
        Self {
            is_intersecting: false,
            ratio: 0.0,
        }
    }

    /// Compute a sample the way `IntersectionObserver` does: the viewport is
    /// grown by `margin_px` on every side (shrunk when negative), and edge
    /// contact with a zero-area overlap still counts as intersecting.
    pub fn from_rects(target: Rect, viewport: Rect, margin_px: i32) -> Self {
        let root = viewport.inset(-f64::from(margin_px));

        let left = target.x.max(root.x);
        let top = target.y.max(root.y);
        let right = (target.x + target.width).min(root.x + root.width);
        let bottom = (target.y + target.height).min(root.y + root.height);

        if right < left || bottom < top {
            return Self::leaving();
        }

        let overlap = (right - left) * (bottom - top);
        let ratio = if target.area() > 0.0 {
            overlap / target.area()
        } else {
            1.0
        };
        Self::entering(ratio)
    }
}

/// Visual frame: vertical offset in px and opacity in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealFrame {
    pub offset_y: f64,
    pub opacity: f64,
}

impl RevealFrame {
    pub const REST: RevealFrame = RevealFrame {
        offset_y: 0.0,
        opacity: 1.0,
    };
}

/// State machine for one reveal block.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealController {
    options: RevealOptions,
    state: RevealState,
    /// Whether `Visible` was reached through an intersection (animated) or
    /// by failing open (shown at rest immediately).
    animated: bool,
}

impl RevealController {
    pub fn new(options: RevealOptions) -> Self {
        Self {
            options,
            state: RevealState::Unobserved,
            animated: false,
        }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn options(&self) -> &RevealOptions {
        &self.options
    }

    pub fn is_visible(&self) -> bool {
        self.state == RevealState::Visible
    }

    /// An observer is now watching the block.
    pub fn observe(&mut self) {
        if self.state == RevealState::Unobserved {
            self.state = RevealState::Hidden;
        }
    }

    /// Intersection observation could not be set up. Show the block now.
    pub fn observation_unavailable(&mut self) {
        if self.state != RevealState::Visible {
            debug!("intersection observer unavailable, revealing immediately");
            self.state = RevealState::Visible;
            self.animated = false;
        }
    }

    pub fn on_intersection(&mut self, sample: IntersectionSample) -> Transition {
        if self.state != RevealState::Hidden {
            return Transition::Ignored;
        }
        if !sample.is_intersecting || sample.ratio < self.options.threshold {
            return Transition::Ignored;
        }
        debug!(
            ratio = sample.ratio,
            delay = self.options.delay,
            "reveal triggered"
        );
        self.state = RevealState::Visible;
        self.animated = true;
        Transition::Revealed
    }

    /// Frame `elapsed` seconds after the trigger.
    pub fn frame_at(&self, elapsed: f64) -> RevealFrame {
        match self.state {
            RevealState::Unobserved => RevealFrame::REST,
            RevealState::Hidden => self.hidden_frame(),
            RevealState::Visible if !self.animated => RevealFrame::REST,
            RevealState::Visible => {
                let o = &self.options;
                let linear = if o.duration > 0.0 {
                    ((elapsed - o.delay) / o.duration).clamp(0.0, 1.0)
                } else if elapsed >= o.delay {
                    1.0
                } else {
                    0.0
                };
                let eased = o.easing.ease(linear);
                RevealFrame {
                    offset_y: o.offset_y * (1.0 - eased),
                    opacity: eased,
                }
            }
        }
    }

    fn hidden_frame(&self) -> RevealFrame {
        RevealFrame {
            offset_y: self.options.offset_y,
            opacity: 0.0,
        }
    }

    /// Inline style for the current state. The browser interpolates between
    /// the hidden and resting values via the CSS transition.
    pub fn style(&self) -> String {
        match self.state {
            RevealState::Unobserved => String::new(),
            RevealState::Hidden => self.options.hidden_style(),
            RevealState::Visible if !self.animated => String::new(),
            RevealState::Visible => self.options.revealed_style(),
        }
    }
}

impl Default for RevealController {
    fn default() -> Self {
        Self::new(RevealOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-4
    }

    fn observed(options: RevealOptions) -> RevealController {
        let mut c = RevealController::new(options);
        c.observe();
        c
    }

    #[test]
    fn starts_unobserved_at_rest() {
        let c = RevealController::default();
        assert_eq!(c.state(), RevealState::Unobserved);
        assert_eq!(c.frame_at(0.0), RevealFrame::REST);
        assert_eq!(c.style(), "");
    }

    #[test]
    fn observe_hides_block() {
        let c = observed(RevealOptions::default());
        assert_eq!(c.state(), RevealState::Hidden);
        assert_eq!(
            c.frame_at(10.0),
            RevealFrame {
                offset_y: 40.0,
                opacity: 0.0
            }
        );
        assert_eq!(c.style(), "opacity:0;transform:translateY(40px)");
    }

    #[test]
    fn first_intersection_reveals() {
        let mut c = observed(RevealOptions::default());
        assert_eq!(
            c.on_intersection(IntersectionSample::entering(0.01)),
            Transition::Revealed
        );
        assert!(c.is_visible());
    }

    #[test]
    fn visible_never_reverts() {
        let mut c = observed(RevealOptions::default());
        c.on_intersection(IntersectionSample::entering(0.5));

        for sample in [
            IntersectionSample::leaving(),
            IntersectionSample::entering(1.0),
            IntersectionSample::leaving(),
            IntersectionSample::entering(0.2),
        ] {
            assert_eq!(c.on_intersection(sample), Transition::Ignored);
            assert_eq!(c.state(), RevealState::Visible);
        }

        c.observe();
        assert_eq!(c.state(), RevealState::Visible);
    }

    #[test]
    fn non_intersecting_events_are_ignored_while_hidden() {
        let mut c = observed(RevealOptions::default());
        assert_eq!(
            c.on_intersection(IntersectionSample::leaving()),
            Transition::Ignored
        );
        assert_eq!(c.state(), RevealState::Hidden);
    }

    #[test]
    fn threshold_gates_trigger() {
        let mut c = observed(RevealOptions::default().with_threshold(0.5));
        assert_eq!(
            c.on_intersection(IntersectionSample::entering(0.3)),
            Transition::Ignored
        );
        assert_eq!(
            c.on_intersection(IntersectionSample::entering(0.5)),
            Transition::Revealed
        );
    }

    #[test]
    fn events_before_observe_are_ignored() {
        let mut c = RevealController::default();
        assert_eq!(
            c.on_intersection(IntersectionSample::entering(1.0)),
            Transition::Ignored
        );
        assert_eq!(c.state(), RevealState::Unobserved);
    }

    #[test]
    fn fail_open_shows_block_at_rest() {
        let mut c = RevealController::default();
        c.observation_unavailable();
        assert!(c.is_visible());
        assert_eq!(c.frame_at(0.0), RevealFrame::REST);
        assert_eq!(c.style(), "");

        let mut hidden = observed(RevealOptions::default());
        hidden.observation_unavailable();
        assert_eq!(hidden.frame_at(0.0), RevealFrame::REST);
    }

    #[test]
    fn delay_postpones_animation_start() {
        let mut c = observed(RevealOptions::default().with_delay(0.3));
        c.on_intersection(IntersectionSample::entering(1.0));

        let before = c.frame_at(0.29);
        assert!(close(before.opacity, 0.0));
        assert!(close(before.offset_y, 40.0));

        let mid = c.frame_at(0.3 + 0.3);
        assert!(mid.opacity > 0.0 && mid.opacity < 1.0);

        assert_eq!(c.frame_at(0.9), RevealFrame::REST);
        assert_eq!(c.frame_at(5.0), RevealFrame::REST);
    }

    #[test]
    fn animation_is_monotonic() {
        let mut c = observed(RevealOptions::default());
        c.on_intersection(IntersectionSample::entering(1.0));
        let mut last = c.frame_at(0.0);
        for step in 1..=60 {
            let f = c.frame_at(step as f64 * 0.01);
            assert!(f.opacity >= last.opacity);
            assert!(f.offset_y <= last.offset_y);
            last = f;
        }
    }

    #[test]
    fn negative_delay_clamps_to_zero() {
        assert_eq!(RevealOptions::default().with_delay(-1.0).delay, 0.0);
        assert_eq!(RevealOptions::default().with_delay(f64::NAN).delay, 0.0);
    }

    #[test]
    fn sibling_controllers_trigger_independently() {
        let mut grid: Vec<RevealController> = (0..4)
            .map(|i| observed(RevealOptions::default().with_delay(i as f64 * 0.1)))
            .collect();

        // Only the last item scrolls in; it must not wait for the others.
        assert_eq!(
            grid[3].on_intersection(IntersectionSample::entering(1.0)),
            Transition::Revealed
        );
        assert!(grid[..3].iter().all(|c| c.state() == RevealState::Hidden));

        assert_eq!(
            grid[0].on_intersection(IntersectionSample::entering(1.0)),
            Transition::Revealed
        );
        assert_eq!(grid[0].frame_at(0.6), RevealFrame::REST);
        assert!(grid[3].frame_at(0.6).opacity < 1.0);
    }

    #[test]
    fn revealed_style_carries_transition() {
        let mut c = observed(RevealOptions::default().with_delay(0.2));
        c.on_intersection(IntersectionSample::entering(1.0));
        assert_eq!(
            c.style(),
            "opacity:1;transform:none;transition:opacity 0.6s cubic-bezier(0.25, 0.1, 0.25, 1) 0.2s, \
             transform 0.6s cubic-bezier(0.25, 0.1, 0.25, 1) 0.2s"
        );
    }

    #[test]
    fn ease_curve_endpoints_and_shape() {
        let e = CubicBezier::EASE;
        assert_eq!(e.ease(0.0), 0.0);
        assert_eq!(e.ease(1.0), 1.0);
        // CSS `ease` is well ahead of linear at the midpoint.
        assert!(close(e.ease(0.5), 0.8024));
        let linear = CubicBezier::new(0.0, 0.0, 1.0, 1.0);
        assert!(close(linear.ease(0.37), 0.37));
    }

    #[test]
    fn negative_margin_delays_trigger() {
        let viewport = Rect::new(0.0, 0.0, 1280.0, 800.0);
        // 30px of the block peeks above the bottom edge.
        let peeking = Rect::new(0.0, 770.0, 400.0, 200.0);

        assert!(IntersectionSample::from_rects(peeking, viewport, 0).is_intersecting);
        assert!(!IntersectionSample::from_rects(peeking, viewport, -50).is_intersecting);

        let inside = Rect::new(100.0, 700.0, 400.0, 200.0);
        let s = IntersectionSample::from_rects(inside, viewport, -50);
        assert!(s.is_intersecting);
        assert!(close(s.ratio, 0.25));
    }

    #[test]
    fn scroll_out_and_back_stays_visible() {
        let viewport = Rect::new(0.0, 0.0, 1280.0, 800.0);
        let mut c = observed(RevealOptions::default());

        for y in [1200.0, 600.0, -900.0, 300.0] {
            let target = Rect::new(0.0, y, 400.0, 200.0);
            c.on_intersection(IntersectionSample::from_rects(target, viewport, DEFAULT_MARGIN_PX));
        }
        assert!(c.is_visible());
    }

    #[test]
    fn root_margin_string() {
        assert_eq!(RevealOptions::default().root_margin(), "-50px");
        assert_eq!(RevealOptions::default().with_margin(20).root_margin(), "20px");
    }
}
