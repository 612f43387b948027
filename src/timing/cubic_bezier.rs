use super::timing_function::*;
use crate::error::*;

use flo_curves::bezier::{de_casteljau3, de_casteljau4, derivative4};
use roots::{find_roots_cubic, find_roots_quadratic, Roots};
use serde::{Serialize, Deserialize};

/// How close a solution for 't' must be before we stop searching for a better one
const SOLVE_EPSILON: f64 = 1e-9;

/// Maximum number of bisection steps when the root finder can't produce a solution
const MAX_BISECTIONS: usize = 64;

///
/// The preset that a cubic bezier timing function was created from
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum EaseType {
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
    Custom
}

///
/// A CSS-style `cubic-bezier(x1, y1, x2, y2)` timing function
///
/// The curve runs from (0, 0) to (1, 1) with the two control points in between. The input progress
/// is the x coordinate and the output is the y coordinate at the same point on the curve. The
/// x coordinates of the control points must be in the range 0-1 so that there's only one y value
/// for every x value, but the y coordinates are unrestricted, which is what allows the output to
/// overshoot.
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct CubicBezierTimingFunction {
    ease_type:      EaseType,
    x1:             f64,
    y1:             f64,
    x2:             f64,
    y2:             f64,

    /// Gradient used when extrapolating before the start of the curve
    start_gradient: f64,

    /// Gradient used when extrapolating after the end of the curve
    end_gradient:   f64,

    /// Minimum and maximum output for inputs in the range 0-1
    range:          (f64, f64)
}

impl CubicBezierTimingFunction {
    /// The CSS `ease` timing function
    pub fn ease() -> CubicBezierTimingFunction { Self::from_control_points(EaseType::Ease, 0.25, 0.1, 0.25, 1.0) }

    /// The CSS `ease-in` timing function
    pub fn ease_in() -> CubicBezierTimingFunction { Self::from_control_points(EaseType::EaseIn, 0.42, 0.0, 1.0, 1.0) }

    /// The CSS `ease-out` timing function
    pub fn ease_out() -> CubicBezierTimingFunction { Self::from_control_points(EaseType::EaseOut, 0.0, 0.0, 0.58, 1.0) }

    /// The CSS `ease-in-out` timing function
    pub fn ease_in_out() -> CubicBezierTimingFunction { Self::from_control_points(EaseType::EaseInOut, 0.42, 0.0, 0.58, 1.0) }

    ///
    /// Creates a timing function from a custom pair of control points
    ///
    pub fn custom(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<CubicBezierTimingFunction, CurveError> {
        if !(x1.is_finite() && y1.is_finite() && x2.is_finite() && y2.is_finite()) {
            return Err(CurveError::InvalidTimingFunction(format!("cubic-bezier({}, {}, {}, {}) has a non-finite control point", x1, y1, x2, y2)));
        }

        if x1 < 0.0 || x1 > 1.0 || x2 < 0.0 || x2 > 1.0 {
            return Err(CurveError::InvalidTimingFunction(format!("cubic-bezier({}, {}, {}, {}) has an x coordinate outside the range 0-1", x1, y1, x2, y2)));
        }

        Ok(Self::from_control_points(EaseType::Custom, x1, y1, x2, y2))
    }

    ///
    /// The preset this timing function was created from
    ///
    pub fn ease_type(&self) -> EaseType {
        self.ease_type
    }

    ///
    /// The control points for this function, as (x1, y1, x2, y2)
    ///
    pub fn control_points(&self) -> (f64, f64, f64, f64) {
        (self.x1, self.y1, self.x2, self.y2)
    }

    fn from_control_points(ease_type: EaseType, x1: f64, y1: f64, x2: f64, y2: f64) -> CubicBezierTimingFunction {
        // Gradients for extrapolating outside of the 0-1 range
        let start_gradient = if x1 > 0.0 {
            y1 / x1
        } else if y1 == 0.0 && x2 > 0.0 {
            y2 / x2
        } else if y1 == 0.0 && y2 == 0.0 {
            1.0
        } else {
            0.0
        };

        let end_gradient = if x2 < 1.0 {
            (y2 - 1.0) / (x2 - 1.0)
        } else if y2 == 1.0 && x1 < 1.0 {
            (y1 - 1.0) / (x1 - 1.0)
        } else if y2 == 1.0 && y1 == 1.0 {
            1.0
        } else {
            0.0
        };

        let mut result = CubicBezierTimingFunction {
            ease_type, x1, y1, x2, y2,
            start_gradient,
            end_gradient,
            range: (0.0, 1.0)
        };

        result.range = result.find_range();
        result
    }

    ///
    /// Works out the minimum and maximum y values for the curve
    ///
    fn find_range(&self) -> (f64, f64) {
        // Control points within 0-1 can't produce a value outside that range
        if self.y1 >= 0.0 && self.y1 <= 1.0 && self.y2 >= 0.0 && self.y2 <= 1.0 {
            return (0.0, 1.0);
        }

        // The extremes are where the derivative of y is 0
        let (d1, d2, d3)    = derivative4(0.0, self.y1, self.y2, 1.0);
        let a               = d1 - 2.0*d2 + d3;
        let b               = 2.0*(d2 - d1);
        let c               = d1;

        let mut min         = 0.0f64;
        let mut max         = 1.0f64;

        for t in roots_as_vec(find_roots_quadratic(a, b, c)) {
            if t > 0.0 && t < 1.0 {
                let y = self.y_for_t(t);

                min = min.min(y);
                max = max.max(y);
            }
        }

        (min, max)
    }

    #[inline]
    fn x_for_t(&self, t: f64) -> f64 {
        de_casteljau4(t, 0.0, self.x1, self.x2, 1.0)
    }

    #[inline]
    fn y_for_t(&self, t: f64) -> f64 {
        de_casteljau4(t, 0.0, self.y1, self.y2, 1.0)
    }

    ///
    /// Finds the 't' value on the curve where the x coordinate has the specified value (which should be in the range 0-1)
    ///
    fn t_for_x(&self, x: f64) -> f64 {
        // Coefficients of the x coordinate as a cubic polynomial
        let c = 3.0*self.x1;
        let b = 3.0*(self.x2 - self.x1) - c;
        let a = 1.0 - c - b;

        for mut root in roots_as_vec(find_roots_cubic(a, b, c, -x)) {
            // Clip to 0/1 for small ranges outside
            if root < 0.0 && root > -0.001 { root = 0.0 }
            if root > 1.0 && root < 1.001 { root = 1.0 }

            if root >= 0.0 && root <= 1.0 && (self.x_for_t(root) - x).abs() < 1e-6 {
                return root;
            }
        }

        // The root finder can lose precision when the polynomial is nearly degenerate: x is monotonic so bisection always works
        self.bisect_t_for_x(x)
    }

    fn bisect_t_for_x(&self, x: f64) -> f64 {
        let mut low     = 0.0;
        let mut high    = 1.0;
        let mut t       = x;

        for _ in 0..MAX_BISECTIONS {
            let x_at_t = self.x_for_t(t);
            if (x_at_t - x).abs() < SOLVE_EPSILON {
                break;
            }

            if x_at_t < x {
                low = t;
            } else {
                high = t;
            }

            t = (low + high) * 0.5;
        }

        t
    }
}

///
/// Converts the results from the root finder into a list
///
fn roots_as_vec(roots: Roots<f64>) -> Vec<f64> {
    match roots {
        Roots::No(_)    => vec![],
        Roots::One(r)   => r.to_vec(),
        Roots::Two(r)   => r.to_vec(),
        Roots::Three(r) => r.to_vec(),
        Roots::Four(r)  => r.to_vec()
    }
}

impl TimingFunction for CubicBezierTimingFunction {
    fn value(&self, progress: f64) -> f64 {
        if progress < 0.0 {
            progress * self.start_gradient
        } else if progress > 1.0 {
            1.0 + (progress - 1.0) * self.end_gradient
        } else {
            self.y_for_t(self.t_for_x(progress))
        }
    }

    fn velocity(&self, progress: f64) -> f64 {
        if progress < 0.0 {
            self.start_gradient
        } else if progress > 1.0 {
            self.end_gradient
        } else {
            let t               = self.t_for_x(progress);
            let (dx1, dx2, dx3) = derivative4(0.0, self.x1, self.x2, 1.0);
            let (dy1, dy2, dy3) = derivative4(0.0, self.y1, self.y2, 1.0);
            let dx              = de_casteljau3(t, dx1, dx2, dx3);
            let dy              = de_casteljau3(t, dy1, dy2, dy3);

            if dx == 0.0 && dy == 0.0 {
                0.0
            } else {
                dy / dx
            }
        }
    }

    fn range(&self) -> (f64, f64) {
        self.range
    }

    fn clone_box(&self) -> Box<dyn TimingFunction> {
        Box::new(*self)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    pub fn linear_control_points_are_identity() {
        let linear = CubicBezierTimingFunction::custom(0.25, 0.25, 0.75, 0.75).unwrap();

        for p in 0..=10 {
            let p = (p as f64) / 10.0;
            assert!((linear.value(p) - p).abs() < 0.0001);
        }
    }

    #[test]
    pub fn end_points_are_fixed() {
        let ease = CubicBezierTimingFunction::ease();

        assert!(ease.value(0.0).abs() < 0.0001);
        assert!((ease.value(1.0) - 1.0).abs() < 0.0001);
    }

    #[test]
    pub fn extrapolates_along_tangent() {
        let linear = CubicBezierTimingFunction::custom(0.25, 0.25, 0.75, 0.75).unwrap();

        assert!((linear.value(-0.5) - -0.5).abs() < 0.0001);
        assert!((linear.value(1.5) - 1.5).abs() < 0.0001);
    }

    #[test]
    pub fn overshooting_curve_has_wide_range() {
        let back            = CubicBezierTimingFunction::custom(0.5, -0.5, 0.5, 1.5).unwrap();
        let (min, max)      = back.range();

        assert!(min < 0.0);
        assert!(max > 1.0);
    }

    #[test]
    pub fn control_points_in_unit_square_have_unit_range() {
        assert!(CubicBezierTimingFunction::ease_in_out().range() == (0.0, 1.0));
    }

    #[test]
    pub fn rejects_x_outside_unit_range() {
        assert!(CubicBezierTimingFunction::custom(1.5, 0.0, 0.5, 1.0).is_err());
        assert!(CubicBezierTimingFunction::custom(0.5, 0.0, -0.1, 1.0).is_err());
    }

    #[test]
    pub fn ease_in_velocity_starts_slow() {
        let ease_in = CubicBezierTimingFunction::ease_in();

        assert!(ease_in.velocity(0.05) < ease_in.velocity(0.95));
    }
}
