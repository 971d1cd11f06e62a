/// Easing curves for tweens, matching the Compose/Material set.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    /// Linear interpolation (no easing).
    #[default]
    LinearEasing,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Material standard curve.
    FastOutSlowInEasing,
    LinearOutSlowInEasing,
    FastOutLinearEasing,
}

impl Easing {
    /// Apply the easing function to a linear fraction in `[0, 1]`.
    pub fn transform(&self, fraction: f32) -> f32 {
        let curve = match self {
            Easing::LinearEasing => return fraction.clamp(0.0, 1.0),
            Easing::EaseIn => CubicBezier::new(0.42, 0.0, 1.0, 1.0),
            Easing::EaseOut => CubicBezier::new(0.0, 0.0, 0.58, 1.0),
            Easing::EaseInOut => CubicBezier::new(0.42, 0.0, 0.58, 1.0),
            Easing::FastOutSlowInEasing => CubicBezier::new(0.4, 0.0, 0.2, 1.0),
            Easing::LinearOutSlowInEasing => CubicBezier::new(0.0, 0.0, 0.2, 1.0),
            Easing::FastOutLinearEasing => CubicBezier::new(0.4, 0.0, 1.0, 1.0),
        };
        curve.solve(fraction)
    }
}

/// Unit cubic bezier through (0,0) and (1,1) with two control points,
/// stored in polynomial form.
struct CubicBezier {
    ax: f32,
    bx: f32,
    cx: f32,
    ay: f32,
    by: f32,
    cy: f32,
}

impl CubicBezier {
    fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        let cx = 3.0 * x1;
        let bx = 3.0 * (x2 - x1) - cx;
        let cy = 3.0 * y1;
        let by = 3.0 * (y2 - y1) - cy;
        Self {
            ax: 1.0 - cx - bx,
            bx,
            cx,
            ay: 1.0 - cy - by,
            by,
            cy,
        }
    }

    fn x_at(&self, t: f32) -> f32 {
        ((self.ax * t + self.bx) * t + self.cx) * t
    }

    fn y_at(&self, t: f32) -> f32 {
        ((self.ay * t + self.by) * t + self.cy) * t
    }

    fn dx_at(&self, t: f32) -> f32 {
        (3.0 * self.ax * t + 2.0 * self.bx) * t + self.cx
    }

    /// Finds `t` with `x(t) == x` and returns `y(t)`.
    fn solve(&self, x: f32) -> f32 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }

        // Newton-Raphson first, bisection when the slope flattens out.
        let mut t = x;
        for _ in 0..8 {
            let error = self.x_at(t) - x;
            if error.abs() < 1e-6 {
                return self.y_at(t);
            }
            let slope = self.dx_at(t);
            if slope.abs() < 1e-6 {
                break;
            }
            t = (t - error / slope).clamp(0.0, 1.0);
        }

        let (mut lo, mut hi) = (0.0f32, 1.0f32);
        t = x;
        for _ in 0..20 {
            let error = self.x_at(t) - x;
            if error.abs() < 1e-6 {
                break;
            }
            if error > 0.0 {
                hi = t;
            } else {
                lo = t;
            }
            t = 0.5 * (lo + hi);
        }
        self.y_at(t)
    }
}
