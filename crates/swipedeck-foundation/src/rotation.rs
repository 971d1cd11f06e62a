use swipedeck_animation::{Breakpoint, InterpolationError, PiecewiseLinear};

use crate::gesture_constants::{MAX_ROTATION_DEGREES, ROTATION_EXTENT_FRACTION};

/// Maps a card's horizontal offset to a rotation in degrees.
///
/// The table must be odd-symmetric (every `(x, deg)` breakpoint has a
/// `(-x, -deg)` twin), so an undragged card is never tilted.
#[derive(Debug, Clone, PartialEq)]
pub struct RotationMapping {
    table: PiecewiseLinear,
}

impl RotationMapping {
    pub fn new(points: impl IntoIterator<Item = (f32, f32)>) -> Result<Self, InterpolationError> {
        let table = PiecewiseLinear::new(points)?;
        let points = table.breakpoints();
        let last = points.len() - 1;
        for (index, point) in points.iter().enumerate() {
            let twin = points[last - index];
            if !nearly_equal(point.input, -twin.input) || !nearly_equal(point.output, -twin.output)
            {
                return Err(InterpolationError::NotSymmetric { index });
            }
        }
        Ok(Self { table })
    }

    /// `[-extent, 0, extent] -> [-max_degrees, 0, max_degrees]` with
    /// `extent = viewport_width * extent_fraction`.
    pub fn for_viewport(
        viewport_width: f32,
        extent_fraction: f32,
        max_degrees: f32,
    ) -> Result<Self, InterpolationError> {
        let extent = viewport_width * extent_fraction;
        Self::new([(-extent, -max_degrees), (0.0, 0.0), (extent, max_degrees)])
    }

    /// The reference mapping: 120° at one and a half viewport widths.
    pub fn standard(viewport_width: f32) -> Result<Self, InterpolationError> {
        Self::for_viewport(viewport_width, ROTATION_EXTENT_FRACTION, MAX_ROTATION_DEGREES)
    }

    pub fn rotation_for(&self, dx: f32) -> f32 {
        self.table.map(dx)
    }

    pub fn breakpoints(&self) -> &[Breakpoint] {
        self.table.breakpoints()
    }
}

fn nearly_equal(a: f32, b: f32) -> bool {
    (a - b).abs() <= 1e-4 * a.abs().max(b.abs()).max(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_mapping_boundaries() {
        let width = 400.0;
        let mapping = RotationMapping::standard(width).expect("valid mapping");
        assert_eq!(mapping.rotation_for(0.0), 0.0);
        assert_eq!(mapping.rotation_for(1.5 * width), 120.0);
        assert_eq!(mapping.rotation_for(10.0 * width), 120.0);
        assert_eq!(mapping.rotation_for(-10.0 * width), -120.0);
    }

    #[test]
    fn rotation_is_odd() {
        let mapping = RotationMapping::standard(360.0).expect("valid mapping");
        for dx in [1.0, 45.0, 200.0, 539.0, 5000.0] {
            assert_eq!(mapping.rotation_for(-dx), -mapping.rotation_for(dx));
        }
    }

    #[test]
    fn even_tables_are_accepted_when_mirrored() {
        let mapping =
            RotationMapping::new([(-200.0, -30.0), (-50.0, -5.0), (50.0, 5.0), (200.0, 30.0)])
                .expect("mirrored table");
        assert_eq!(mapping.rotation_for(0.0), 0.0);
    }

    #[test]
    fn lopsided_tables_are_rejected() {
        assert_eq!(
            RotationMapping::new([(-100.0, -10.0), (0.0, 0.0), (200.0, 10.0)]),
            Err(InterpolationError::NotSymmetric { index: 0 })
        );
        assert_eq!(
            RotationMapping::new([(-100.0, -10.0), (0.0, 1.0), (100.0, 10.0)]),
            Err(InterpolationError::NotSymmetric { index: 1 })
        );
    }

    #[test]
    fn zero_width_viewport_is_rejected() {
        assert!(RotationMapping::standard(0.0).is_err());
    }
}
