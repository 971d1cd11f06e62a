//! Release classification.

/// Outcome of a released drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwipeDecision {
    Left,
    Right,
    /// Below the threshold: the card springs back.
    None,
}

impl SwipeDecision {
    /// Whether the card leaves the deck.
    pub fn is_accepted(self) -> bool {
        !matches!(self, SwipeDecision::None)
    }

    /// Horizontal direction of travel: `1.0`, `-1.0`, or `0.0` for `None`.
    pub fn sign(self) -> f32 {
        match self {
            SwipeDecision::Left => -1.0,
            SwipeDecision::Right => 1.0,
            SwipeDecision::None => 0.0,
        }
    }
}

/// Classify a release by its final horizontal displacement.
///
/// Strictly beyond `threshold` either way is a swipe; anything within
/// `[-threshold, threshold]` is not. Displacement is the only input.
pub fn classify(final_dx: f32, threshold: f32) -> SwipeDecision {
    if final_dx > threshold {
        SwipeDecision::Right
    } else if final_dx < -threshold {
        SwipeDecision::Left
    } else {
        SwipeDecision::None
    }
}
