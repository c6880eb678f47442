//! One-shot reveal state for scroll-triggered section entrances.
//!
//! The DOM wiring lives in `components::reveal`; this module only decides
//! what the element looks like before/after the trigger and guarantees the
//! transition plays at most once per mount.

/// Axis the element slides in from. `Up` means the element starts offset
/// downward and animates upward into its natural position.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RevealDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Offset distance of the hidden state, in px.
pub const REVEAL_OFFSET_PX: f32 = 20.0;

/// Blur radius of the hidden state, in px.
pub const REVEAL_BLUR_PX: f32 = 10.0;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct RevealConfig {
    pub direction: RevealDirection,
    /// Seconds to wait after the trigger before the transition starts.
    pub delay: f32,
    /// Seconds the transition runs for. Zero is allowed and applies the
    /// revealed state instantly.
    pub duration: f32,
    /// Fraction of the viewport (0..=1) the element top must cross before
    /// the reveal fires.
    pub threshold: f32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            direction: RevealDirection::Up,
            delay: 0.0,
            duration: 0.3,
            threshold: 0.1,
        }
    }
}

impl RevealConfig {
    pub fn new(direction: RevealDirection, delay: f32, duration: f32, threshold: f32) -> Self {
        Self {
            direction,
            delay: delay.max(0.0),
            duration: duration.max(0.0),
            threshold: threshold.clamp(0.0, 1.0),
        }
    }

    /// Starting offset (x, y) of the hidden state.
    pub fn offset(&self) -> (f32, f32) {
        match self.direction {
            RevealDirection::Up => (0.0, REVEAL_OFFSET_PX),
            RevealDirection::Down => (0.0, -REVEAL_OFFSET_PX),
            RevealDirection::Left => (REVEAL_OFFSET_PX, 0.0),
            RevealDirection::Right => (-REVEAL_OFFSET_PX, 0.0),
        }
    }

    /// Inline style of the element while it waits for the trigger.
    pub fn hidden_style(&self) -> String {
        let (x, y) = self.offset();
        format!(
            "opacity:0;filter:blur({REVEAL_BLUR_PX}px);transform:translate({x}px,{y}px);"
        )
    }

    /// Inline style once revealed. The transition settings carry the
    /// configured duration and delay, so a zero duration still lands the
    /// element in its natural position.
    pub fn revealed_style(&self) -> String {
        let t = format!(
            "{}s cubic-bezier(0.23,1,0.32,1) {}s",
            self.duration, self.delay
        );
        format!(
            "opacity:1;filter:blur(0px);transform:translate(0px,0px);\
             transition:opacity {t},filter {t},transform {t};"
        )
    }

    /// Root margin for the intersection observer: trigger when the element
    /// top reaches `(1 - threshold) * 100%` of the viewport height.
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}% 0px", self.threshold * 100.0)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum RevealPhase {
    Pending,
    Revealed,
}

/// Per-element reveal state. Plays forward exactly once; scrolling back out
/// and in again is a no-op.
#[derive(Clone, PartialEq, Debug)]
pub struct RevealTarget {
    config: RevealConfig,
    phase: RevealPhase,
}

impl RevealTarget {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            phase: RevealPhase::Pending,
        }
    }

    /// Reports a threshold crossing. Returns `true` only on the first call;
    /// every later crossing is ignored.
    pub fn notify_visible(&mut self) -> bool {
        if self.phase == RevealPhase::Pending {
            self.phase = RevealPhase::Revealed;
            true
        } else {
            false
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.phase == RevealPhase::Revealed
    }

    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    /// Current inline style for the observed element.
    pub fn style(&self) -> String {
        match self.phase {
            RevealPhase::Pending => self.config.hidden_style(),
            RevealPhase::Revealed => self.config.revealed_style(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_fires_exactly_once() {
        let mut target = RevealTarget::new(RevealConfig::default());
        assert!(!target.is_revealed());
        assert!(target.notify_visible());
        assert!(target.is_revealed());
        // scroll away and back: still revealed, no second transition
        assert!(!target.notify_visible());
        assert!(!target.notify_visible());
        assert!(target.is_revealed());
    }

    #[test]
    fn offset_follows_direction() {
        let up = RevealConfig::new(RevealDirection::Up, 0.0, 0.3, 0.1);
        assert_eq!(up.offset(), (0.0, REVEAL_OFFSET_PX));
        let down = RevealConfig::new(RevealDirection::Down, 0.0, 0.3, 0.1);
        assert_eq!(down.offset(), (0.0, -REVEAL_OFFSET_PX));
        let left = RevealConfig::new(RevealDirection::Left, 0.0, 0.3, 0.1);
        assert_eq!(left.offset(), (REVEAL_OFFSET_PX, 0.0));
        let right = RevealConfig::new(RevealDirection::Right, 0.0, 0.3, 0.1);
        assert_eq!(right.offset(), (-REVEAL_OFFSET_PX, 0.0));
    }

    #[test]
    fn config_clamps_out_of_range_inputs() {
        let config = RevealConfig::new(RevealDirection::Up, -1.0, -0.5, 4.0);
        assert_eq!(config.delay, 0.0);
        assert_eq!(config.duration, 0.0);
        assert_eq!(config.threshold, 1.0);
    }

    #[test]
    fn zero_duration_still_transitions_to_revealed() {
        let config = RevealConfig::new(RevealDirection::Up, 0.0, 0.0, 0.1);
        let mut target = RevealTarget::new(config);
        target.notify_visible();
        let style = target.style();
        assert!(style.contains("opacity:1"));
        assert!(style.contains("transition:opacity 0s"));
    }

    #[test]
    fn root_margin_maps_threshold_to_viewport_line() {
        let config = RevealConfig::new(RevealDirection::Up, 0.0, 0.3, 0.25);
        assert_eq!(config.root_margin(), "0px 0px -25% 0px");
    }

    #[test]
    fn hidden_style_has_no_transition() {
        let target = RevealTarget::new(RevealConfig::default());
        let style = target.style();
        assert!(style.contains("opacity:0"));
        assert!(!style.contains("transition"));
    }
}
