use super::matrix::*;
use super::super::geometry::*;

use serde::{Serialize, Deserialize};

use std::mem;
use std::f64::consts::PI;

///
/// A single step in a list of transformations
///
/// Angles are in degrees.
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum TransformOperation {
    /// Leaves points unchanged
    Identity,

    /// Moves by an offset
    Translate(f64, f64, f64),

    /// Rotates about an axis through the origin
    Rotate { axis: Vector3, degrees: f64 },

    /// Scales along each axis
    Scale(f64, f64, f64),

    /// Skews along the x and y axes
    Skew(f64, f64),

    /// Applies a perspective projection with the viewer at the specified depth
    Perspective(f64),

    /// An arbitrary transformation matrix
    Matrix(Matrix44)
}

#[inline]
fn lerp(from: f64, to: f64, progress: f64) -> f64 {
    from + (to - from) * progress
}

impl TransformOperation {
    ///
    /// Retrieves the matrix for this operation
    ///
    pub fn matrix(&self) -> Matrix44 {
        use self::TransformOperation::*;

        match self {
            Identity                => Matrix44::identity(),
            Translate(x, y, z)      => Matrix44::translate(*x, *y, *z),
            Rotate { axis, degrees} => Matrix44::rotate(*axis, *degrees),
            Scale(x, y, z)          => Matrix44::scale(*x, *y, *z),
            Skew(x, y)              => Matrix44::skew(*x, *y),
            Perspective(depth)      => Matrix44::perspective(*depth),
            Matrix(matrix)          => *matrix
        }
    }

    ///
    /// True if this operation has no effect
    ///
    pub fn is_identity(&self) -> bool {
        use self::TransformOperation::*;

        // A full turn is not the identity: it blends differently from no rotation
        match self {
            Identity                    => true,
            Translate(x, y, z)          => *x == 0.0 && *y == 0.0 && *z == 0.0,
            Rotate { axis, degrees }    => *degrees == 0.0 || axis.dot(axis) == 0.0,
            Scale(x, y, z)              => *x == 1.0 && *y == 1.0 && *z == 1.0,
            Skew(x, y)                  => *x == 0.0 && *y == 0.0,
            Perspective(depth)          => *depth == 0.0 || depth.is_infinite(),
            Matrix(matrix)              => matrix.is_identity()
        }
    }

    ///
    /// True if this operation is the same kind of operation as another (ignoring the parameters)
    ///
    #[inline]
    pub fn is_same_kind(&self, other: &TransformOperation) -> bool {
        mem::discriminant(self) == mem::discriminant(other)
    }

    ///
    /// If two rotations are about the same axis, returns the axis and the starting angle relative to it
    ///
    fn shared_rotation_axis(from: Option<&TransformOperation>, to: Option<&TransformOperation>) -> Option<(Vector3, f64)> {
        use self::TransformOperation::*;

        match (from, to) {
            (None, Some(Rotate { axis, .. }))                       => Some((*axis, 0.0)),
            (Some(Rotate { axis, degrees }), None)                  => Some((*axis, *degrees)),

            (Some(Rotate { axis: from_axis, degrees: from_degrees }), Some(Rotate { axis: to_axis, .. })) => {
                let from_length_sq  = from_axis.dot(from_axis);
                let to_length_sq    = to_axis.dot(to_axis);

                if from_length_sq <= MATRIX_EPSILON || to_length_sq <= MATRIX_EPSILON {
                    return None;
                }

                // Axes are the same if they're parallel (which includes pointing in opposite directions)
                let dot             = from_axis.dot(to_axis);
                let error           = (1.0 - (dot*dot) / (from_length_sq*to_length_sq)).abs();

                if error < MATRIX_EPSILON {
                    let from_degrees = if dot > 0.0 { *from_degrees } else { -*from_degrees };
                    Some((*to_axis, from_degrees))
                } else {
                    None
                }
            }

            _ => None
        }
    }

    ///
    /// Blends two operations of the same kind (None or an identity operation stands for the identity version of the other operation)
    ///
    /// Returns None if the operations are of different kinds or if a matrix blend is required and one of the matrices can't be decomposed
    ///
    pub fn blend_operations(from: Option<&TransformOperation>, to: Option<&TransformOperation>, progress: f64) -> Option<TransformOperation> {
        use self::TransformOperation::*;

        let from = from.filter(|op| !op.is_identity());
        let to   = to.filter(|op| !op.is_identity());

        let kind = match (from, to) {
            (None, None)            => return Some(Identity),
            (_, Some(to))           => to,
            (Some(from), None)      => from
        };

        if let (Some(from), Some(to)) = (from, to) {
            if !from.is_same_kind(to) {
                return None;
            }
        }

        match kind {
            Identity => Some(Identity),

            Translate(..) => {
                let (fx, fy, fz) = match from { Some(Translate(x, y, z)) => (*x, *y, *z), _ => (0.0, 0.0, 0.0) };
                let (tx, ty, tz) = match to { Some(Translate(x, y, z)) => (*x, *y, *z), _ => (0.0, 0.0, 0.0) };

                Some(Translate(lerp(fx, tx, progress), lerp(fy, ty, progress), lerp(fz, tz, progress)))
            }

            Scale(..) => {
                let (fx, fy, fz) = match from { Some(Scale(x, y, z)) => (*x, *y, *z), _ => (1.0, 1.0, 1.0) };
                let (tx, ty, tz) = match to { Some(Scale(x, y, z)) => (*x, *y, *z), _ => (1.0, 1.0, 1.0) };

                Some(Scale(lerp(fx, tx, progress), lerp(fy, ty, progress), lerp(fz, tz, progress)))
            }

            Skew(..) => {
                let (fx, fy) = match from { Some(Skew(x, y)) => (*x, *y), _ => (0.0, 0.0) };
                let (tx, ty) = match to { Some(Skew(x, y)) => (*x, *y), _ => (0.0, 0.0) };

                Some(Skew(lerp(fx, tx, progress), lerp(fy, ty, progress)))
            }

            Rotate { .. } => {
                if let Some((axis, from_degrees)) = Self::shared_rotation_axis(from, to) {
                    let to_degrees = match to { Some(Rotate { degrees, .. }) => *degrees, _ => 0.0 };

                    Some(Rotate { axis, degrees: lerp(from_degrees, to_degrees, progress) })
                } else {
                    // Rotations about different axes are blended as matrices
                    let from_matrix = from.map(|op| op.matrix()).unwrap_or_else(Matrix44::identity);
                    let to_matrix   = to.map(|op| op.matrix()).unwrap_or_else(Matrix44::identity);

                    to_matrix.blend(&from_matrix, progress).map(Matrix)
                }
            }

            Perspective(..) => {
                // Perspective is blended via the inverse of the depth (so the identity is an infinite depth)
                let from_inverse    = match from { Some(Perspective(depth)) if *depth != 0.0 => 1.0 / *depth, _ => 0.0 };
                let to_inverse      = match to { Some(Perspective(depth)) if *depth != 0.0 => 1.0 / *depth, _ => 0.0 };
                let blended         = lerp(from_inverse, to_inverse, progress);

                if blended == 0.0 {
                    Some(Identity)
                } else {
                    Some(Perspective(1.0 / blended))
                }
            }

            Matrix(..) => {
                let from_matrix = from.map(|op| op.matrix()).unwrap_or_else(Matrix44::identity);
                let to_matrix   = to.map(|op| op.matrix()).unwrap_or_else(Matrix44::identity);

                to_matrix.blend(&from_matrix, progress).map(Matrix)
            }
        }
    }

    ///
    /// Works out the bounds that a box sweeps through when the blend between two operations runs over a range of progress values
    ///
    /// Returns None for operations where the bounds can't be computed (arbitrary matrices, or rotations that don't share an axis)
    ///
    pub fn blended_bounds_for_box(bounds: &Bounds3, from: Option<&TransformOperation>, to: Option<&TransformOperation>, min_progress: f64, max_progress: f64) -> Option<Bounds3> {
        use self::TransformOperation::*;

        let from = from.filter(|op| !op.is_identity());
        let to   = to.filter(|op| !op.is_identity());

        let kind = match (from, to) {
            (None, None)            => return Some(*bounds),
            (_, Some(to))           => to,
            (Some(from), None)      => from
        };

        match kind {
            Identity => Some(*bounds),

            Translate(..) | Scale(..) | Skew(..) | Perspective(..) => {
                // The extremes of the animation are at the ends of the progress range
                let at_min = Self::blend_operations(from, to, min_progress)?.matrix();
                let at_max = Self::blend_operations(from, to, max_progress)?.matrix();

                Some(at_min.map_bounds(bounds).union(at_max.map_bounds(bounds)))
            }

            Rotate { .. } => {
                let (axis, from_degrees)    = Self::shared_rotation_axis(from, to)?;
                let to_degrees              = match to { Some(Rotate { degrees, .. }) => *degrees, _ => 0.0 };

                let min_degrees             = lerp(from_degrees, to_degrees, min_progress);
                let max_degrees             = lerp(from_degrees, to_degrees, max_progress);
                let (start, end)            = if min_degrees <= max_degrees { (min_degrees, max_degrees) } else { (max_degrees, min_degrees) };

                let corners                 = bounds.corners();
                let first                   = bounds_for_arc(&corners[0], &axis, start, end);

                Some(corners[1..].iter().fold(first, |result, corner| result.union(bounds_for_arc(corner, &axis, start, end))))
            }

            Matrix(..) => None
        }
    }
}

///
/// Finds the bounds of the arc that a point follows when rotated about an axis through the origin
///
fn bounds_for_arc(point: &Vector3, axis: &Vector3, from_degrees: f64, to_degrees: f64) -> Bounds3 {
    let axis            = axis.to_unit_vector();
    let rotated         = |degrees: f64| Matrix44::rotate(axis, degrees).map_point(point);

    let mut bounds      = Bounds3::from_min_max(rotated(from_degrees), rotated(to_degrees));

    // The point moves in a circle around the axis
    let center          = axis * axis.dot(point);
    let radial          = *point - center;
    let radius          = radial.length();

    if radius < MATRIX_EPSILON {
        return bounds;
    }

    let u               = radial * (1.0/radius);
    let v               = axis.cross(&u);
    let start           = from_degrees.to_radians();
    let end             = to_degrees.to_radians();

    // Each component reaches an extreme every half turn from the angle where its derivative is 0
    for component in 0..3 {
        let base        = v.get(component).atan2(u.get(component));
        let mut angle   = base + ((start - base) / PI).ceil() * PI;

        while angle <= end {
            bounds      = bounds.expand_to_point(center + (u*angle.cos() + v*angle.sin())*radius);
            angle       += PI;
        }
    }

    bounds
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    pub fn translate_blends_from_identity() {
        let to      = TransformOperation::Translate(10.0, 20.0, 0.0);
        let blended = TransformOperation::blend_operations(None, Some(&to), 0.5);

        assert!(blended == Some(TransformOperation::Translate(5.0, 10.0, 0.0)));
    }

    #[test]
    pub fn scale_blends_to_identity() {
        let from    = TransformOperation::Scale(3.0, 3.0, 3.0);
        let blended = TransformOperation::blend_operations(Some(&from), None, 0.5);

        assert!(blended == Some(TransformOperation::Scale(2.0, 2.0, 2.0)));
    }

    #[test]
    pub fn antiparallel_rotations_share_axis() {
        let from    = TransformOperation::Rotate { axis: Vector3(0.0, 0.0, -1.0), degrees: 90.0 };
        let to      = TransformOperation::Rotate { axis: Vector3(0.0, 0.0, 1.0), degrees: 90.0 };
        let blended = TransformOperation::blend_operations(Some(&from), Some(&to), 0.5);

        assert!(blended == Some(TransformOperation::Rotate { axis: Vector3(0.0, 0.0, 1.0), degrees: 0.0 }));
    }

    #[test]
    pub fn mismatched_kinds_do_not_blend() {
        let from    = TransformOperation::Scale(2.0, 2.0, 2.0);
        let to      = TransformOperation::Translate(1.0, 0.0, 0.0);

        assert!(TransformOperation::blend_operations(Some(&from), Some(&to), 0.5).is_none());
    }

    #[test]
    pub fn perspective_blends_through_inverse_depth() {
        let from    = TransformOperation::Perspective(100.0);
        let to      = TransformOperation::Perspective(200.0);

        match TransformOperation::blend_operations(Some(&from), Some(&to), 0.5) {
            Some(TransformOperation::Perspective(depth))    => assert!((depth - 133.3333).abs() < 0.001),
            _                                               => assert!(false)
        }
    }

    #[test]
    pub fn quarter_turn_arc_bounds() {
        // (1, 0, 0) rotating through 90 degrees about z stays in the positive quadrant
        let bounds = bounds_for_arc(&Vector3(1.0, 0.0, 0.0), &Vector3(0.0, 0.0, 1.0), 0.0, 90.0);

        assert!((bounds.min() - Vector3(0.0, 0.0, 0.0)).length() < 0.0001);
        assert!((bounds.max() - Vector3(1.0, 1.0, 0.0)).length() < 0.0001);
    }

    #[test]
    pub fn half_turn_arc_bounds() {
        // Sweeping through 180 degrees passes through the top of the circle
        let bounds = bounds_for_arc(&Vector3(1.0, 0.0, 0.0), &Vector3(0.0, 0.0, 1.0), 0.0, 180.0);

        assert!((bounds.min() - Vector3(-1.0, 0.0, 0.0)).length() < 0.0001);
        assert!((bounds.max() - Vector3(1.0, 1.0, 0.0)).length() < 0.0001);
    }

    #[test]
    pub fn matrix_bounds_are_unknown() {
        let bounds  = Bounds3::from_origin_and_size(Vector3(0.0, 0.0, 0.0), Vector3(1.0, 1.0, 1.0));
        let to      = TransformOperation::Matrix(Matrix44::scale(2.0, 1.0, 1.0));

        assert!(TransformOperation::blended_bounds_for_box(&bounds, None, Some(&to), 0.0, 1.0).is_none());
    }
}
