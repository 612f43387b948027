use super::super::geometry::*;

use serde::{Serialize, Deserialize};

use std::ops::{Mul};

/// Tolerance used when deciding whether a matrix element is zero
pub (crate) const MATRIX_EPSILON: f64 = 1e-8;

///
/// A 4x4 transformation matrix, stored as rows and applied to column vectors
///
/// The translation lives in the last column and the perspective terms in the last row.
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Matrix44(pub [[f64; 4]; 4]);

impl Default for Matrix44 {
    fn default() -> Matrix44 {
        Matrix44::identity()
    }
}

impl Matrix44 {
    ///
    /// Creates the identity transform
    ///
    pub fn identity() -> Matrix44 {
        Matrix44([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0]
        ])
    }

    ///
    /// Creates a translation transformation
    ///
    pub fn translate(x: f64, y: f64, z: f64) -> Matrix44 {
        Matrix44([
            [1.0, 0.0, 0.0, x  ],
            [0.0, 1.0, 0.0, y  ],
            [0.0, 0.0, 1.0, z  ],
            [0.0, 0.0, 0.0, 1.0]
        ])
    }

    ///
    /// Creates a scaling transformation
    ///
    pub fn scale(x: f64, y: f64, z: f64) -> Matrix44 {
        Matrix44([
            [x,   0.0, 0.0, 0.0],
            [0.0, y,   0.0, 0.0],
            [0.0, 0.0, z,   0.0],
            [0.0, 0.0, 0.0, 1.0]
        ])
    }

    ///
    /// Creates a rotation about an axis through the origin. Positive angles rotate anticlockwise when
    /// looking down the axis towards the origin.
    ///
    pub fn rotate(axis: Vector3, degrees: f64) -> Matrix44 {
        let Vector3(x, y, z) = axis.to_unit_vector();
        if x == 0.0 && y == 0.0 && z == 0.0 {
            return Matrix44::identity();
        }

        let radians = degrees.to_radians();
        let c       = radians.cos();
        let s       = radians.sin();
        let t       = 1.0 - c;

        Matrix44([
            [t*x*x + c,     t*x*y - s*z,    t*x*z + s*y,    0.0],
            [t*x*y + s*z,   t*y*y + c,      t*y*z - s*x,    0.0],
            [t*x*z - s*y,   t*y*z + s*x,    t*z*z + c,      0.0],
            [0.0,           0.0,            0.0,            1.0]
        ])
    }

    ///
    /// Creates a skew transformation (angles in degrees, as for the CSS `skew()` function)
    ///
    pub fn skew(x_degrees: f64, y_degrees: f64) -> Matrix44 {
        let tan_x = x_degrees.to_radians().tan();
        let tan_y = y_degrees.to_radians().tan();

        Matrix44([
            [1.0,   tan_x,  0.0, 0.0],
            [tan_y, 1.0,    0.0, 0.0],
            [0.0,   0.0,    1.0, 0.0],
            [0.0,   0.0,    0.0, 1.0]
        ])
    }

    ///
    /// Creates a perspective projection with the viewer at the specified distance from the z=0 plane
    ///
    /// A depth of 0 has no effect.
    ///
    pub fn perspective(depth: f64) -> Matrix44 {
        let mut matrix = Matrix44::identity();

        if depth != 0.0 {
            matrix.0[3][2] = -1.0 / depth;
        }

        matrix
    }

    ///
    /// True if this is exactly the identity matrix
    ///
    pub fn is_identity(&self) -> bool {
        *self == Matrix44::identity()
    }

    ///
    /// True if this matrix is the identity or only translates
    ///
    pub fn is_identity_or_translation(&self) -> bool {
        let Matrix44(m) = self;

        m[0][0] == 1.0 && m[0][1] == 0.0 && m[0][2] == 0.0
            && m[1][0] == 0.0 && m[1][1] == 1.0 && m[1][2] == 0.0
            && m[2][0] == 0.0 && m[2][1] == 0.0 && m[2][2] == 1.0
            && !self.has_perspective()
    }

    ///
    /// True if the bottom row of this matrix is anything other than (0, 0, 0, 1)
    ///
    pub fn has_perspective(&self) -> bool {
        let Matrix44(m) = self;

        m[3][0] != 0.0 || m[3][1] != 0.0 || m[3][2] != 0.0 || m[3][3] != 1.0
    }

    ///
    /// True if a rectangle in the z=0 plane stays axis-aligned after this transform (ignoring the z value)
    ///
    /// Only scaling and swapping the x and y axes keep rectangles aligned: rectangles that collapse to a
    /// line or a point also count as aligned. Any perspective is treated as not preserving alignment.
    ///
    pub fn preserves_2d_axis_alignment(&self) -> bool {
        let Matrix44(m) = self;

        let mut non_zero_in_row_0 = 0;
        let mut non_zero_in_row_1 = 0;
        let mut non_zero_in_col_0 = 0;
        let mut non_zero_in_col_1 = 0;

        if m[0][0].abs() > MATRIX_EPSILON { non_zero_in_row_0 += 1; non_zero_in_col_0 += 1; }
        if m[0][1].abs() > MATRIX_EPSILON { non_zero_in_row_0 += 1; non_zero_in_col_1 += 1; }
        if m[1][0].abs() > MATRIX_EPSILON { non_zero_in_row_1 += 1; non_zero_in_col_0 += 1; }
        if m[1][1].abs() > MATRIX_EPSILON { non_zero_in_row_1 += 1; non_zero_in_col_1 += 1; }

        if non_zero_in_row_0 > 1 || non_zero_in_row_1 > 1 || non_zero_in_col_0 > 1 || non_zero_in_col_1 > 1 {
            return false;
        }

        m[3][0].abs() <= MATRIX_EPSILON && m[3][1].abs() <= MATRIX_EPSILON
    }

    ///
    /// Applies this transformation to a point
    ///
    pub fn map_point(&self, point: &Vector3) -> Vector3 {
        let Matrix44(m)         = self;
        let Vector3(x, y, z)    = *point;

        let tx = m[0][0]*x + m[0][1]*y + m[0][2]*z + m[0][3];
        let ty = m[1][0]*x + m[1][1]*y + m[1][2]*z + m[1][3];
        let tz = m[2][0]*x + m[2][1]*y + m[2][2]*z + m[2][3];
        let w  = m[3][0]*x + m[3][1]*y + m[3][2]*z + m[3][3];

        if w != 1.0 && w != 0.0 {
            Vector3(tx/w, ty/w, tz/w)
        } else {
            Vector3(tx, ty, tz)
        }
    }

    ///
    /// Transforms a box, returning the axis-aligned box enclosing the result
    ///
    pub fn map_bounds(&self, bounds: &Bounds3) -> Bounds3 {
        let corners = bounds.corners();
        let first   = self.map_point(&corners[0]);

        corners[1..].iter()
            .fold(Bounds3::from_min_max(first, first), |result, corner| result.expand_to_point(self.map_point(corner)))
    }

    ///
    /// Returns the inverse of this matrix, if it has one
    ///
    pub fn invert(&self) -> Option<Matrix44> {
        let Matrix44(mut matrix)    = *self;
        let Matrix44(mut inverse)   = Matrix44::identity();

        // Gauss-Jordan elimination with partial pivoting
        for col in 0..4 {
            let mut pivot_row = col;
            for row in (col+1)..4 {
                if matrix[row][col].abs() > matrix[pivot_row][col].abs() {
                    pivot_row = row;
                }
            }

            if matrix[pivot_row][col].abs() < 1e-12 {
                return None;
            }

            matrix.swap(col, pivot_row);
            inverse.swap(col, pivot_row);

            let pivot = matrix[col][col];
            for idx in 0..4 {
                matrix[col][idx]    /= pivot;
                inverse[col][idx]   /= pivot;
            }

            for row in 0..4 {
                if row == col { continue; }

                let factor = matrix[row][col];
                if factor == 0.0 { continue; }

                for idx in 0..4 {
                    let matrix_delta    = factor * matrix[col][idx];
                    let inverse_delta   = factor * inverse[col][idx];

                    matrix[row][idx]    -= matrix_delta;
                    inverse[row][idx]   -= inverse_delta;
                }
            }
        }

        Some(Matrix44(inverse))
    }

    ///
    /// Blends from another matrix towards this one by decomposing both into their components
    ///
    /// Returns None if either matrix can't be decomposed (eg, because it's singular)
    ///
    pub fn blend(&self, from: &Matrix44, progress: f64) -> Option<Matrix44> {
        let to      = self.decompose()?;
        let from    = from.decompose()?;

        Some(to.blend(&from, progress).compose())
    }
}

impl Mul<Matrix44> for Matrix44 {
    type Output=Matrix44;

    fn mul(self, other: Matrix44) -> Matrix44 {
        let Matrix44(a) = self;
        let Matrix44(b) = other;
        let mut result  = [[0.0; 4]; 4];

        for row in 0..4 {
            for col in 0..4 {
                result[row][col] = a[row][0]*b[0][col] + a[row][1]*b[1][col] + a[row][2]*b[2][col] + a[row][3]*b[3][col];
            }
        }

        Matrix44(result)
    }
}
