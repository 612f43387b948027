use super::matrix::*;
use super::transform_operation::*;
use super::super::blend::*;
use super::super::geometry::*;

use smallvec::*;
use serde::{Serialize, Deserialize};

use std::iter::FromIterator;

///
/// An ordered list of transform operations
///
/// The operations are applied in order, so the list `[translate, scale]` produces the matrix
/// `translate * scale`. Keeping the operations rather than just the combined matrix lets two lists
/// with the same structure be blended one operation at a time, which is what makes (for example)
/// a rotation through 360 degrees possible.
///
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct TransformOperations {
    operations: SmallVec<[TransformOperation; 4]>
}

impl FromIterator<TransformOperation> for TransformOperations {
    fn from_iter<T: IntoIterator<Item=TransformOperation>>(iter: T) -> TransformOperations {
        TransformOperations {
            operations: iter.into_iter().collect()
        }
    }
}

impl TransformOperations {
    ///
    /// Creates an empty list of operations (which is the identity transform)
    ///
    pub fn new() -> TransformOperations {
        TransformOperations {
            operations: smallvec![]
        }
    }

    ///
    /// The operations in this list
    ///
    pub fn operations(&self) -> &[TransformOperation] {
        &self.operations
    }

    #[inline] pub fn len(&self) -> usize { self.operations.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.operations.is_empty() }

    pub fn append(&mut self, operation: TransformOperation) {
        self.operations.push(operation);
    }

    pub fn append_identity(&mut self) { self.append(TransformOperation::Identity); }
    pub fn append_translate(&mut self, x: f64, y: f64, z: f64) { self.append(TransformOperation::Translate(x, y, z)); }
    pub fn append_rotate(&mut self, x: f64, y: f64, z: f64, degrees: f64) { self.append(TransformOperation::Rotate { axis: Vector3(x, y, z), degrees }); }
    pub fn append_scale(&mut self, x: f64, y: f64, z: f64) { self.append(TransformOperation::Scale(x, y, z)); }
    pub fn append_skew(&mut self, x: f64, y: f64) { self.append(TransformOperation::Skew(x, y)); }
    pub fn append_perspective(&mut self, depth: f64) { self.append(TransformOperation::Perspective(depth)); }
    pub fn append_matrix(&mut self, matrix: Matrix44) { self.append(TransformOperation::Matrix(matrix)); }

    ///
    /// Returns the combined matrix for this list of operations
    ///
    pub fn apply(&self) -> Matrix44 {
        self.operations.iter()
            .fold(Matrix44::identity(), |matrix, operation| matrix * operation.matrix())
    }

    ///
    /// True if every operation in this list has no effect
    ///
    pub fn is_identity(&self) -> bool {
        self.operations.iter().all(|operation| operation.is_identity())
    }

    ///
    /// True if this list can be blended with another one operation at a time
    ///
    /// This is the case if either list is the identity (including the empty list), or if the lists are the same length
    /// and each pair of operations is of the same kind (identity operations match anything).
    ///
    pub fn matches_types(&self, other: &TransformOperations) -> bool {
        if self.is_identity() || other.is_identity() {
            return true;
        }

        if self.len() != other.len() {
            return false;
        }

        self.operations.iter().zip(other.operations.iter())
            .all(|(a, b)| a.is_same_kind(b) || a.is_identity() || b.is_identity())
    }

    ///
    /// Blends two lists of operations, returning None if the blend can't be performed
    ///
    fn try_blend(&self, from: &TransformOperations, progress: f64) -> Option<TransformOperations> {
        let from_identity   = from.is_identity();
        let to_identity     = self.is_identity();

        if from_identity && to_identity {
            return Some(TransformOperations::new());
        }

        if self.matches_types(from) {
            let num_operations = usize::max(if from_identity { 0 } else { from.len() }, if to_identity { 0 } else { self.len() });

            (0..num_operations)
                .map(|idx| {
                    let from_op = if from_identity { None } else { from.operations.get(idx) };
                    let to_op   = if to_identity { None } else { self.operations.get(idx) };

                    TransformOperation::blend_operations(from_op, to_op, progress)
                })
                .collect()
        } else {
            // Lists with different structures are blended as matrices
            let blended = self.apply().blend(&from.apply(), progress)?;

            Some(TransformOperations { operations: smallvec![TransformOperation::Matrix(blended)] })
        }
    }

    ///
    /// If this list scales by a fixed amount, returns the scale along each axis
    ///
    /// Translations and rotations don't affect the result. Returns None if there's more than one scale operation, or an
    /// operation (skew, perspective or a matrix that can't be decomposed) that makes the scale ambiguous.
    ///
    pub fn scale_component(&self) -> Option<Vector3> {
        let mut scale               = Vector3(1.0, 1.0, 1.0);
        let mut has_scale_component = false;

        for operation in self.operations.iter() {
            match operation {
                TransformOperation::Identity
                | TransformOperation::Translate(..)
                | TransformOperation::Rotate { .. }  => { }

                TransformOperation::Scale(x, y, z)  => {
                    if has_scale_component { return None; }

                    has_scale_component = true;
                    scale               = Vector3(scale.0 * x, scale.1 * y, scale.2 * z);
                }

                TransformOperation::Matrix(matrix)  => {
                    if matrix.is_identity_or_translation() { continue; }
                    if has_scale_component || matrix.has_perspective() { return None; }

                    let decomposed      = matrix.decompose()?;
                    if decomposed.skew != Vector3(0.0, 0.0, 0.0) { return None; }

                    has_scale_component = true;
                    scale               = Vector3(scale.0 * decomposed.scale.0, scale.1 * decomposed.scale.1, scale.2 * decomposed.scale.2);
                }

                TransformOperation::Skew(..)
                | TransformOperation::Perspective(..) => { return None; }
            }
        }

        Some(scale)
    }

    ///
    /// True if any operation in this list changes the scale
    ///
    pub fn affects_scale(&self) -> bool {
        self.operations.iter().any(|operation| {
            match operation {
                TransformOperation::Scale(..)       => true,
                TransformOperation::Matrix(matrix)  => !matrix.is_identity_or_translation(),
                _                                   => false
            }
        })
    }

    ///
    /// True if every operation in this list is a translation (or has no effect)
    ///
    pub fn is_translation(&self) -> bool {
        self.operations.iter().all(|operation| {
            match operation {
                TransformOperation::Identity
                | TransformOperation::Translate(..) => true,
                TransformOperation::Matrix(matrix)  => matrix.is_identity_or_translation(),
                other                               => other.is_identity()
            }
        })
    }

    ///
    /// True if axis-aligned rectangles stay axis-aligned after applying these operations
    ///
    pub fn preserves_axis_alignment(&self) -> bool {
        self.operations.iter().all(|operation| {
            match operation {
                TransformOperation::Identity
                | TransformOperation::Translate(..)
                | TransformOperation::Scale(..)     => true,
                TransformOperation::Matrix(matrix)  => matrix.preserves_2d_axis_alignment(),
                other                               => other.is_identity()
            }
        })
    }

    ///
    /// Computes the bounds of a box as it moves through the blend from another list of operations to this one,
    /// for progress values between min_progress and max_progress
    ///
    /// Returns None if the bounds can't be determined (the lists don't match, or an operation doesn't support
    /// computing bounds)
    ///
    pub fn blended_bounds_for_box(&self, bounds: &Bounds3, from: &TransformOperations, min_progress: f64, max_progress: f64) -> Option<Bounds3> {
        let from_identity   = from.is_identity();
        let to_identity     = self.is_identity();

        if from_identity && to_identity {
            return Some(*bounds);
        }

        if !self.matches_types(from) {
            return None;
        }

        let num_operations = usize::max(if from_identity { 0 } else { from.len() }, if to_identity { 0 } else { self.len() });

        // The operations apply to points from last to first
        (0..num_operations).rev()
            .try_fold(*bounds, |bounds, idx| {
                let from_op = if from_identity { None } else { from.operations.get(idx) };
                let to_op   = if to_identity { None } else { self.operations.get(idx) };

                TransformOperation::blended_bounds_for_box(&bounds, from_op, to_op, min_progress, max_progress)
            })
    }
}

impl Blend for TransformOperations {
    ///
    /// Blends from another list of operations to this one
    ///
    /// When the operations can't be blended (eg, because a matrix is singular) the result switches from one list to the
    /// other half way through
    ///
    fn blend(&self, from: &TransformOperations, progress: f64) -> TransformOperations {
        match self.try_blend(from, progress) {
            Some(blended)           => blended,
            None if progress < 0.5  => from.clone(),
            None                    => self.clone()
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn translate(x: f64, y: f64) -> TransformOperations {
        let mut ops = TransformOperations::new();
        ops.append_translate(x, y, 0.0);
        ops
    }

    #[test]
    pub fn empty_list_is_identity() {
        assert!(TransformOperations::new().is_identity());
        assert!(TransformOperations::new().apply().is_identity());
    }

    #[test]
    pub fn blend_matching_lists_by_operation() {
        let from    = translate(0.0, 0.0);
        let to      = translate(100.0, 50.0);

        let blended = to.blend(&from, 0.25);
        assert!(blended.operations() == &[TransformOperation::Translate(25.0, 12.5, 0.0)]);
    }

    #[test]
    pub fn full_rotation_blends_by_angle() {
        let mut from    = TransformOperations::new();
        let mut to      = TransformOperations::new();
        from.append_rotate(0.0, 0.0, 1.0, 0.0);
        to.append_rotate(0.0, 0.0, 1.0, 360.0);

        // A matrix blend would see two identical matrices, but the operations say we go all the way round
        let blended     = to.blend(&from, 0.5);
        let point       = blended.apply().map_point(&Vector3(1.0, 0.0, 0.0));
        assert!((point - Vector3(-1.0, 0.0, 0.0)).length() < 0.0001);
    }

    #[test]
    pub fn identity_list_of_any_length_blends_by_operation() {
        let mut from    = TransformOperations::new();
        let mut to      = TransformOperations::new();
        from.append_translate(0.0, 0.0, 0.0);
        from.append_scale(1.0, 1.0, 1.0);
        to.append_rotate(0.0, 0.0, 1.0, 360.0);

        assert!(to.matches_types(&from));
        assert!(from.matches_types(&to));

        let blended     = to.blend(&from, 0.5);
        assert!(blended.operations() == &[TransformOperation::Rotate { axis: Vector3(0.0, 0.0, 1.0), degrees: 180.0 }]);

        let point       = blended.apply().map_point(&Vector3(1.0, 0.0, 0.0));
        assert!((point - Vector3(-1.0, 0.0, 0.0)).length() < 0.0001);
    }

    #[test]
    pub fn identity_list_of_any_length_has_bounds() {
        let mut from    = TransformOperations::new();
        let mut to      = TransformOperations::new();
        from.append_translate(0.0, 0.0, 0.0);
        from.append_scale(1.0, 1.0, 1.0);
        to.append_translate(100.0, 0.0, 0.0);

        let bounds      = Bounds3::from_origin_and_size(Vector3(0.0, 0.0, 0.0), Vector3(10.0, 10.0, 0.0));
        let swept       = to.blended_bounds_for_box(&bounds, &from, 0.0, 1.0).unwrap();
        assert!(swept.min() == Vector3(0.0, 0.0, 0.0));
        assert!(swept.max() == Vector3(110.0, 10.0, 0.0));
    }

    #[test]
    pub fn mismatched_lists_blend_as_matrices() {
        let mut from    = TransformOperations::new();
        let mut to      = TransformOperations::new();
        from.append_scale(2.0, 2.0, 1.0);
        to.append_translate(10.0, 0.0, 0.0);

        assert!(!to.matches_types(&from));

        let blended     = to.blend(&from, 0.5);
        assert!(blended.len() == 1);

        let point       = blended.apply().map_point(&Vector3(0.0, 0.0, 0.0));
        assert!((point - Vector3(5.0, 0.0, 0.0)).length() < 0.0001);
    }

    #[test]
    pub fn singular_matrices_switch_half_way() {
        let mut from    = TransformOperations::new();
        let mut to      = TransformOperations::new();
        from.append_matrix(Matrix44::scale(0.0, 1.0, 1.0));
        to.append_translate(10.0, 0.0, 0.0);

        assert!(to.blend(&from, 0.25) == from);
        assert!(to.blend(&from, 0.75) == to);
    }

    #[test]
    pub fn scale_component_of_single_scale() {
        let mut ops = TransformOperations::new();
        ops.append_translate(5.0, 5.0, 0.0);
        ops.append_scale(2.0, 3.0, 4.0);

        assert!(ops.scale_component() == Some(Vector3(2.0, 3.0, 4.0)));
    }

    #[test]
    pub fn two_scales_have_no_scale_component() {
        let mut ops = TransformOperations::new();
        ops.append_scale(2.0, 2.0, 2.0);
        ops.append_scale(3.0, 3.0, 3.0);

        assert!(ops.scale_component().is_none());
    }

    #[test]
    pub fn skew_has_no_scale_component() {
        let mut ops = TransformOperations::new();
        ops.append_skew(10.0, 0.0);

        assert!(ops.scale_component().is_none());
    }

    #[test]
    pub fn classify_operations() {
        let mut scale = TransformOperations::new();
        scale.append_scale(2.0, 2.0, 1.0);

        let mut rotate = TransformOperations::new();
        rotate.append_rotate(0.0, 0.0, 1.0, 30.0);

        assert!(translate(1.0, 2.0).is_translation());
        assert!(!translate(1.0, 2.0).affects_scale());
        assert!(scale.affects_scale());
        assert!(!scale.is_translation());
        assert!(scale.preserves_axis_alignment());
        assert!(!rotate.preserves_axis_alignment());
    }

    #[test]
    pub fn quarter_turn_matrix_preserves_axis_alignment() {
        let mut quarter_turn = TransformOperations::new();
        quarter_turn.append_matrix(Matrix44::rotate(Vector3(0.0, 0.0, 1.0), 90.0));

        let mut tilted = TransformOperations::new();
        tilted.append_matrix(Matrix44::rotate(Vector3(0.0, 0.0, 1.0), 30.0));

        assert!(quarter_turn.preserves_axis_alignment());
        assert!(!tilted.preserves_axis_alignment());
    }

    #[test]
    pub fn translate_bounds_cover_both_ends() {
        let bounds  = Bounds3::from_origin_and_size(Vector3(0.0, 0.0, 0.0), Vector3(10.0, 10.0, 0.0));
        let from    = translate(0.0, 0.0);
        let to      = translate(100.0, 0.0);

        let swept   = to.blended_bounds_for_box(&bounds, &from, 0.0, 1.0).unwrap();
        assert!(swept.min() == Vector3(0.0, 0.0, 0.0));
        assert!(swept.max() == Vector3(110.0, 10.0, 0.0));
    }

    #[test]
    pub fn overshooting_progress_widens_bounds() {
        let bounds  = Bounds3::from_origin_and_size(Vector3(0.0, 0.0, 0.0), Vector3(10.0, 10.0, 0.0));
        let from    = translate(0.0, 0.0);
        let to      = translate(100.0, 0.0);

        let swept   = to.blended_bounds_for_box(&bounds, &from, -0.5, 1.5).unwrap();
        assert!(swept.min() == Vector3(-50.0, 0.0, 0.0));
        assert!(swept.max() == Vector3(160.0, 10.0, 0.0));
    }
}
