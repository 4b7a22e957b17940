//! Multi-item carousel state.
//!
//! The carousel shows `per_view` slides starting at `index`. With looping
//! on, navigation wraps and slides are reordered with [`CarouselState::slot_of`]
//! so the wrap is seamless without cloning slides.

/// Viewport width breakpoints mapped to slides per view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Breakpoints(Vec<(u32, usize)>);

impl Breakpoints {
    /// `(min_width_px, per_view)` pairs. Sorted by width on construction;
    /// a zero `per_view` is treated as one.
    pub fn new(mut steps: Vec<(u32, usize)>) -> Self {
        steps.sort_by_key(|(w, _)| *w);
        for step in &mut steps {
            step.1 = step.1.max(1);
        }
        Self(steps)
    }

    /// Slides per view for a viewport `width` in CSS pixels.
    pub fn per_view(&self, width: f64) -> usize {
        self.0
            .iter()
            .rev()
            .find(|(min, _)| width >= f64::from(*min))
            .map(|(_, n)| *n)
            .unwrap_or(1)
    }
}

impl Default for Breakpoints {
    /// One slide on phones, two from 640px, three from 1024px.
    fn default() -> Self {
        Self::new(vec![(0, 1), (640, 2), (1024, 3)])
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselState {
    len: usize,
    index: usize,
    per_view: usize,
    looping: bool,
}

impl CarouselState {
    pub fn new(len: usize, per_view: usize, looping: bool) -> Self {
        Self {
            len,
            index: 0,
            per_view: per_view.max(1),
            looping,
        }
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

    pub fn per_view(&self) -> usize {
        self.per_view
    }

    fn max_start(&self) -> usize {
        self.len.saturating_sub(self.per_view)
    }

    /// Change slides per view (breakpoint crossed). Keeps the start index
    /// in range for the non-looping case.
    pub fn set_per_view(&mut self, per_view: usize) {
        self.per_view = per_view.max(1);
        if !self.looping {
            self.index = self.index.min(self.max_start());
        }
    }

    pub fn can_prev(&self) -> bool {
        (self.looping && self.len > 1) || self.index > 0
    }

    pub fn can_next(&self) -> bool {
        (self.looping && self.len > 1) || self.index < self.max_start()
    }

    pub fn next(&mut self) {
        if self.len == 0 {
            return;
        }
        if self.looping {
            self.index = (self.index + 1) % self.len;
        } else {
            self.index = (self.index + 1).min(self.max_start());
        }
    }

    pub fn prev(&mut self) {
        if self.len == 0 {
            return;
        }
        if self.looping {
            self.index = (self.index + self.len - 1) % self.len;
        } else {
            self.index = self.index.saturating_sub(1);
        }
    }

    /// Display position of slide `i` relative to the current start.
    pub fn slot_of(&self, i: usize) -> usize {
        if self.len == 0 {
            return 0;
        }
        (i % self.len + self.len - self.index) % self.len
    }

    /// Slide indices currently in view, in display order.
    pub fn visible(&self) -> Vec<usize> {
        let shown = self.per_view.min(self.len);
        (0..shown).map(|k| (self.index + k) % self.len).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints_pick_per_view() {
        let bp = Breakpoints::default();
        assert_eq!(bp.per_view(320.0), 1);
        assert_eq!(bp.per_view(640.0), 2);
        assert_eq!(bp.per_view(1023.0), 2);
        assert_eq!(bp.per_view(1440.0), 3);
    }

    #[test]
    fn breakpoints_sort_and_floor() {
        let bp = Breakpoints::new(vec![(800, 0), (0, 2)]);
        assert_eq!(bp.per_view(100.0), 2);
        assert_eq!(bp.per_view(900.0), 1);
    }

    #[test]
    fn looping_next_wraps() {
        let mut c = CarouselState::new(5, 3, true);
        for _ in 0..4 {
            c.next();
        }
        assert_eq!(c.index(), 4);
        assert_eq!(c.visible(), vec![4, 0, 1]);
        c.next();
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn looping_prev_wraps() {
        let mut c = CarouselState::new(5, 1, true);
        c.prev();
        assert_eq!(c.index(), 4);
        assert!(c.can_prev());
        assert!(c.can_next());
    }

    #[test]
    fn non_looping_clamps() {
        let mut c = CarouselState::new(5, 3, false);
        assert!(!c.can_prev());
        c.prev();
        assert_eq!(c.index(), 0);
        for _ in 0..10 {
            c.next();
        }
        assert_eq!(c.index(), 2);
        assert!(!c.can_next());

        c.set_per_view(4);
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn slots_form_a_permutation() {
        let mut c = CarouselState::new(5, 2, true);
        c.next();
        c.next();
        let mut slots: Vec<usize> = (0..5).map(|i| c.slot_of(i)).collect();
        assert_eq!(slots[2], 0);
        assert_eq!(slots[1], 4);
        slots.sort();
        assert_eq!(slots, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn empty_carousel_is_inert() {
        let mut c = CarouselState::new(0, 3, true);
        c.next();
        c.prev();
        assert!(c.is_empty());
        assert!(c.visible().is_empty());
        assert!(!c.can_next());
    }

    #[test]
    fn fewer_slides_than_view() {
        let c = CarouselState::new(2, 3, true);
        assert_eq!(c.visible(), vec![0, 1]);
    }
}
