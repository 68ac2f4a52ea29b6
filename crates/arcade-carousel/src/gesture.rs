//! Touch and keyboard input interpretation.

/// Direction derived from a completed swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved left: show the next slide.
    Next,
    /// Finger moved right: show the previous slide.
    Prev,
}

/// Default minimum horizontal travel for a swipe, in pixels.
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 50.0;

/// Tracks one touch gesture at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct SwipeTracker {
    threshold: f64,
    start_x: Option<f64>,
}

impl SwipeTracker {
    /// Create a tracker with the given threshold in pixels.
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            start_x: None,
        }
    }

    /// Record where a gesture started.
    pub fn begin(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    /// Finish the gesture at `x`.
    ///
    /// With `delta = start - end`, a delta above the threshold means
    /// [`SwipeDirection::Next`] and one below its negation means
    /// [`SwipeDirection::Prev`]. Anything in between, or an end without a
    /// start, is not a swipe.
    pub fn end(&mut self, x: f64) -> Option<SwipeDirection> {
        let start = self.start_x.take()?;
        let delta = start - x;
        if delta > self.threshold {
            Some(SwipeDirection::Next)
        } else if delta < -self.threshold {
            Some(SwipeDirection::Prev)
        } else {
            None
        }
    }

    /// Minimum travel in pixels.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD)
    }
}

/// Keys the carousel reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPress {
    ArrowLeft,
    ArrowRight,
    Other,
}

impl KeyPress {
    /// Map a DOM-style key name ("ArrowLeft", "ArrowRight", ...).
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            _ => Self::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swipe_left_past_threshold_is_next() {
        let mut swipe = SwipeTracker::default();
        swipe.begin(300.0);
        assert_eq!(swipe.end(240.0), Some(SwipeDirection::Next));
    }

    #[test]
    fn test_swipe_right_past_threshold_is_prev() {
        let mut swipe = SwipeTracker::default();
        swipe.begin(100.0);
        assert_eq!(swipe.end(180.0), Some(SwipeDirection::Prev));
    }

    #[test]
    fn test_short_or_exact_swipes_are_ignored() {
        let mut swipe = SwipeTracker::default();
        swipe.begin(300.0);
        assert_eq!(swipe.end(280.0), None);

        swipe.begin(300.0);
        assert_eq!(swipe.end(250.0), None);

        swipe.begin(250.0);
        assert_eq!(swipe.end(300.0), None);
    }

    #[test]
    fn test_end_without_begin() {
        let mut swipe = SwipeTracker::default();
        assert_eq!(swipe.end(0.0), None);

        swipe.begin(400.0);
        assert_eq!(swipe.end(100.0), Some(SwipeDirection::Next));
        // The start position is consumed by the first end.
        assert_eq!(swipe.end(0.0), None);
    }

    #[test]
    fn test_key_names() {
        assert_eq!(KeyPress::from_key_name("ArrowLeft"), KeyPress::ArrowLeft);
        assert_eq!(KeyPress::from_key_name("ArrowRight"), KeyPress::ArrowRight);
        assert_eq!(KeyPress::from_key_name("Enter"), KeyPress::Other);
    }
}
