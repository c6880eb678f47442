//! Slide index state machine shared by the testimonials carousel and the
//! service-page image slider.
//!
//! The autoplay timer itself lives in the component layer (one
//! `gloo_timers::callback::Interval` keyed on [`Carousel::timer_key`], dropped
//! in the effect cleanup); this module decides when that timer may run and
//! keeps the active index in bounds.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CarouselOptions {
    pub autoplay: bool,
    pub interval_ms: u32,
    /// When false, navigation saturates at the ends instead of wrapping.
    pub looping: bool,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            autoplay: true,
            interval_ms: 5000,
            looping: true,
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Carousel {
    len: usize,
    active: usize,
    paused: bool,
    options: CarouselOptions,
}

impl Carousel {
    /// A carousel always has at least one slide; an empty slide set is
    /// treated as a single (blank) slide rather than a panic.
    pub fn new(len: usize, options: CarouselOptions) -> Self {
        Self {
            len: len.max(1),
            active: 0,
            paused: false,
            options,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn interval_ms(&self) -> u32 {
        self.options.interval_ms
    }

    pub fn next(&mut self) {
        if self.options.looping {
            self.active = (self.active + 1) % self.len;
        } else if self.active + 1 < self.len {
            self.active += 1;
        }
    }

    pub fn prev(&mut self) {
        if self.options.looping {
            self.active = (self.active + self.len - 1) % self.len;
        } else if self.active > 0 {
            self.active -= 1;
        }
    }

    /// Jumps straight to `index`. Out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.active = index;
        }
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Whether `next()` can move. Always true for a looping multi-slide
    /// carousel; drives the next-button disabled state.
    pub fn can_advance(&self) -> bool {
        if self.len < 2 {
            return false;
        }
        self.options.looping || self.active + 1 < self.len
    }

    pub fn can_retreat(&self) -> bool {
        if self.len < 2 {
            return false;
        }
        self.options.looping || self.active > 0
    }

    /// True while the autoplay timer should be armed. A single-slide
    /// carousel never autoplays (nothing to cycle to).
    pub fn should_autoplay(&self) -> bool {
        self.options.autoplay && !self.paused && self.len > 1
    }

    /// Everything whose change must tear down and re-create the autoplay
    /// timer. Keying the interval effect on this tuple means a manual
    /// `next()`/`prev()`/`go_to()` restarts the period, and at most one
    /// timer exists at a time.
    pub fn timer_key(&self) -> (usize, usize, bool, u32) {
        (self.active, self.len, self.paused, self.options.interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn looping(len: usize) -> Carousel {
        Carousel::new(len, CarouselOptions::default())
    }

    fn bounded(len: usize) -> Carousel {
        Carousel::new(
            len,
            CarouselOptions {
                looping: false,
                ..CarouselOptions::default()
            },
        )
    }

    #[test]
    fn bounded_navigation_saturates_at_ends() {
        let mut c = bounded(3);
        c.prev();
        assert_eq!(c.active_index(), 0);
        c.next();
        c.next();
        assert_eq!(c.active_index(), 2);
        c.next();
        assert_eq!(c.active_index(), 2);
    }

    #[test]
    fn looping_navigation_wraps() {
        let mut c = looping(3);
        c.prev();
        assert_eq!(c.active_index(), 2);
        c.next();
        assert_eq!(c.active_index(), 0);
    }

    #[test]
    fn go_to_ignores_out_of_range() {
        let mut c = looping(3);
        c.go_to(2);
        assert_eq!(c.active_index(), 2);
        c.go_to(3);
        assert_eq!(c.active_index(), 2);
        c.go_to(usize::MAX);
        assert_eq!(c.active_index(), 2);
    }

    #[test]
    fn pause_gates_autoplay() {
        let mut c = looping(3);
        assert!(c.should_autoplay());
        c.pause();
        assert!(!c.should_autoplay());
        c.resume();
        assert!(c.should_autoplay());
    }

    #[test]
    fn single_slide_disables_navigation_and_autoplay() {
        let c = looping(1);
        assert!(!c.can_advance());
        assert!(!c.can_retreat());
        assert!(!c.should_autoplay());

        let empty = looping(0);
        assert_eq!(empty.len(), 1);
        assert!(!empty.should_autoplay());
    }

    #[test]
    fn bounded_buttons_reflect_position() {
        let mut c = bounded(3);
        assert!(!c.can_retreat());
        assert!(c.can_advance());
        c.next();
        assert!(c.can_retreat());
        assert!(c.can_advance());
        c.next();
        assert!(c.can_retreat());
        assert!(!c.can_advance());
    }

    #[test]
    fn looping_buttons_always_enabled() {
        let c = looping(3);
        assert!(c.can_advance());
        assert!(c.can_retreat());
    }

    #[test]
    fn manual_navigation_restarts_the_timer() {
        // The interval is keyed on timer_key, so any index change (manual or
        // tick) forces a fresh timer and stale ticks can never stack.
        let mut c = looping(3);
        let key = c.timer_key();
        c.next();
        assert_ne!(c.timer_key(), key);
        let key = c.timer_key();
        c.pause();
        assert_ne!(c.timer_key(), key);
    }

    #[test]
    fn autoplay_tick_then_manual_prev_never_skips() {
        // t=0: index 0; one interval elapses -> 1; manual prev -> 0; the
        // following tick (from the restarted timer) lands on 1, not 2.
        let mut c = looping(3);
        c.next();
        assert_eq!(c.active_index(), 1);
        c.prev();
        assert_eq!(c.active_index(), 0);
        c.next();
        assert_eq!(c.active_index(), 1);
    }
}
