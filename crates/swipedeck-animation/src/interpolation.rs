//! Piecewise-linear mapping over an ordered breakpoint table.
//!
//! Outputs saturate at the outermost breakpoints: inputs beyond the table
//! map to the first or last output, never an extrapolated value.

use std::fmt;

use smallvec::SmallVec;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint {
    pub input: f32,
    pub output: f32,
}

impl Breakpoint {
    pub const fn new(input: f32, output: f32) -> Self {
        Self { input, output }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InterpolationError {
    TooFewBreakpoints { count: usize },
    NonFinite { index: usize },
    NotIncreasing { index: usize },
    NotSymmetric { index: usize },
}

impl fmt::Display for InterpolationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterpolationError::TooFewBreakpoints { count } => {
                write!(f, "need at least two breakpoints, got {count}")
            }
            InterpolationError::NonFinite { index } => {
                write!(f, "breakpoint {index} is not finite")
            }
            InterpolationError::NotIncreasing { index } => {
                write!(f, "breakpoint {index} input does not increase")
            }
            InterpolationError::NotSymmetric { index } => {
                write!(f, "breakpoint {index} has no mirrored counterpart")
            }
        }
    }
}

impl std::error::Error for InterpolationError {}

#[derive(Debug, Clone, PartialEq)]
pub struct PiecewiseLinear {
    points: SmallVec<[Breakpoint; 4]>,
}

impl PiecewiseLinear {
    /// Build a mapping from `(input, output)` pairs with strictly
    /// increasing, finite inputs.
    pub fn new(points: impl IntoIterator<Item = (f32, f32)>) -> Result<Self, InterpolationError> {
        let points: SmallVec<[Breakpoint; 4]> = points
            .into_iter()
            .map(|(input, output)| Breakpoint::new(input, output))
            .collect();

        if points.len() < 2 {
            return Err(InterpolationError::TooFewBreakpoints {
                count: points.len(),
            });
        }
        if let Some(index) = points
            .iter()
            .position(|point| !point.input.is_finite() || !point.output.is_finite())
        {
            return Err(InterpolationError::NonFinite { index });
        }
        if let Some(index) = points
            .windows(2)
            .position(|pair| pair[1].input <= pair[0].input)
        {
            return Err(InterpolationError::NotIncreasing { index: index + 1 });
        }

        Ok(Self { points })
    }

    /// `[-input_extent, 0, input_extent] -> [-output_extent, 0, output_extent]`.
    pub fn symmetric(input_extent: f32, output_extent: f32) -> Result<Self, InterpolationError> {
        Self::new([
            (-input_extent, -output_extent),
            (0.0, 0.0),
            (input_extent, output_extent),
        ])
    }

    pub fn breakpoints(&self) -> &[Breakpoint] {
        &self.points
    }

    /// Map `input` through the table, clamping at the outer breakpoints.
    /// NaN maps to NaN.
    pub fn map(&self, input: f32) -> f32 {
        if input.is_nan() {
            return f32::NAN;
        }
        let first = self.points[0];
        let last = self.points[self.points.len() - 1];
        if input <= first.input {
            return first.output;
        }
        if input >= last.input {
            return last.output;
        }

        let upper = self.points.partition_point(|point| point.input < input);
        let (a, b) = (self.points[upper - 1], self.points[upper]);
        let fraction = (input - a.input) / (b.input - a.input);
        a.output + (b.output - a.output) * fraction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rotation() -> PiecewiseLinear {
        PiecewiseLinear::symmetric(600.0, 120.0).expect("valid table")
    }

    #[test]
    fn maps_breakpoints_exactly() {
        let mapping = rotation();
        assert_eq!(mapping.map(-600.0), -120.0);
        assert_eq!(mapping.map(0.0), 0.0);
        assert_eq!(mapping.map(600.0), 120.0);
    }

    #[test]
    fn interpolates_between_breakpoints() {
        let mapping = rotation();
        assert_eq!(mapping.map(300.0), 60.0);
        assert_eq!(mapping.map(-150.0), -30.0);
    }

    #[test]
    fn saturates_outside_the_table() {
        let mapping = rotation();
        assert_eq!(mapping.map(10_000.0), 120.0);
        assert_eq!(mapping.map(-10_000.0), -120.0);
        assert_eq!(mapping.map(f32::INFINITY), 120.0);
    }

    #[test]
    fn uneven_segments_use_their_own_slope() {
        let mapping = PiecewiseLinear::new([(0.0, 0.0), (10.0, 100.0), (110.0, 200.0)])
            .expect("valid table");
        assert_eq!(mapping.map(5.0), 50.0);
        assert_eq!(mapping.map(60.0), 150.0);
    }

    #[test]
    fn rejects_bad_tables() {
        assert_eq!(
            PiecewiseLinear::new([(0.0, 0.0)]),
            Err(InterpolationError::TooFewBreakpoints { count: 1 })
        );
        assert_eq!(
            PiecewiseLinear::new([(0.0, 0.0), (0.0, 1.0)]),
            Err(InterpolationError::NotIncreasing { index: 1 })
        );
        assert_eq!(
            PiecewiseLinear::new([(0.0, 0.0), (f32::NAN, 1.0)]),
            Err(InterpolationError::NonFinite { index: 1 })
        );
    }

    #[test]
    fn nan_propagates() {
        assert!(rotation().map(f32::NAN).is_nan());
    }
}
