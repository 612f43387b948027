use super::matrix::*;
use super::super::geometry::*;

///
/// A transformation matrix broken down into separately interpolable parts
///
/// The original matrix is `perspective * translate * rotate * skew * scale`, where the skew matrix
/// is upper-triangular with `skew` holding its (xy, xz, yz) terms.
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct DecomposedTransform {
    pub translate:      Vector3,
    pub scale:          Vector3,
    pub skew:           Vector3,
    pub perspective:    [f64; 4],

    /// Rotation as a unit quaternion (x, y, z, w)
    pub quaternion:     [f64; 4]
}

impl Default for DecomposedTransform {
    fn default() -> DecomposedTransform {
        DecomposedTransform {
            translate:      Vector3(0.0, 0.0, 0.0),
            scale:          Vector3(1.0, 1.0, 1.0),
            skew:           Vector3(0.0, 0.0, 0.0),
            perspective:    [0.0, 0.0, 0.0, 1.0],
            quaternion:     [0.0, 0.0, 0.0, 1.0]
        }
    }
}

#[inline]
fn lerp(from: f64, to: f64, progress: f64) -> f64 {
    from + (to - from) * progress
}

#[inline]
fn lerp_vector(from: Vector3, to: Vector3, progress: f64) -> Vector3 {
    from + (to - from) * progress
}

///
/// Spherical interpolation between two unit quaternions
///
fn slerp(from: [f64; 4], to: [f64; 4], progress: f64) -> [f64; 4] {
    let mut to      = to;
    let mut product = from[0]*to[0] + from[1]*to[1] + from[2]*to[2] + from[3]*to[3];

    // q and -q represent the same rotation: take the shorter path
    if product < 0.0 {
        to      = [-to[0], -to[1], -to[2], -to[3]];
        product = -product;
    }

    let product = product.min(1.0);
    if (1.0 - product).abs() < MATRIX_EPSILON {
        return from;
    }

    let denom           = (1.0 - product*product).sqrt();
    let theta           = product.acos();
    let w               = (progress*theta).sin() / denom;

    let from_weight     = (progress*theta).cos() - product*w;
    let to_weight       = w;

    [
        from[0]*from_weight + to[0]*to_weight,
        from[1]*from_weight + to[1]*to_weight,
        from[2]*from_weight + to[2]*to_weight,
        from[3]*from_weight + to[3]*to_weight
    ]
}

impl Matrix44 {
    ///
    /// Decomposes this matrix into translation, rotation, skew, scale and perspective
    ///
    /// Fails if the matrix is singular or can't be normalized
    ///
    pub fn decompose(&self) -> Option<DecomposedTransform> {
        let Matrix44(mut m) = *self;

        // Normalize the matrix
        if m[3][3].abs() < MATRIX_EPSILON {
            return None;
        }

        let normalize = m[3][3];
        for row in m.iter_mut() {
            for val in row.iter_mut() {
                *val /= normalize;
            }
        }

        // The affine part of the matrix must be invertible
        let mut affine  = m;
        affine[3]       = [0.0, 0.0, 0.0, 1.0];
        let Matrix44(inverse_affine) = Matrix44(affine).invert()?;

        // The perspective row is the product of the perspective vector and the affine part
        let perspective = if m[3][0].abs() > MATRIX_EPSILON || m[3][1].abs() > MATRIX_EPSILON || m[3][2].abs() > MATRIX_EPSILON {
            let row             = m[3];
            let mut perspective = [0.0; 4];

            for idx in 0..4 {
                for inner in 0..4 {
                    perspective[idx] += inverse_affine[inner][idx] * row[inner];
                }
            }

            perspective
        } else {
            [0.0, 0.0, 0.0, 1.0]
        };

        let translate   = Vector3(m[0][3], m[1][3], m[2][3]);

        // Orthonormalize the columns of the linear part, reading off the scale and skew as we go
        let mut columns = [
            Vector3(m[0][0], m[1][0], m[2][0]),
            Vector3(m[0][1], m[1][1], m[2][1]),
            Vector3(m[0][2], m[1][2], m[2][2])
        ];

        let scale_x     = columns[0].length();
        if scale_x < MATRIX_EPSILON { return None; }
        columns[0]      = columns[0] * (1.0/scale_x);

        let mut skew_xy = columns[0].dot(&columns[1]);
        columns[1]      = columns[1] - columns[0]*skew_xy;

        let scale_y     = columns[1].length();
        if scale_y < MATRIX_EPSILON { return None; }
        columns[1]      = columns[1] * (1.0/scale_y);
        skew_xy         /= scale_y;

        let mut skew_xz = columns[0].dot(&columns[2]);
        columns[2]      = columns[2] - columns[0]*skew_xz;
        let mut skew_yz = columns[1].dot(&columns[2]);
        columns[2]      = columns[2] - columns[1]*skew_yz;

        let scale_z     = columns[2].length();
        if scale_z < MATRIX_EPSILON { return None; }
        columns[2]      = columns[2] * (1.0/scale_z);
        skew_xz         /= scale_z;
        skew_yz         /= scale_z;

        // A left-handed coordinate system is represented with a negative scale
        let mut scale   = Vector3(scale_x, scale_y, scale_z);
        if columns[0].dot(&columns[1].cross(&columns[2])) < 0.0 {
            scale = -scale;
            for column in columns.iter_mut() {
                *column = -*column;
            }
        }

        // Rotation matrix element at (row, col)
        let r = |row: usize, col: usize| columns[col].get(row);

        let mut qx  = 0.5 * (1.0 + r(0, 0) - r(1, 1) - r(2, 2)).max(0.0).sqrt();
        let mut qy  = 0.5 * (1.0 - r(0, 0) + r(1, 1) - r(2, 2)).max(0.0).sqrt();
        let mut qz  = 0.5 * (1.0 - r(0, 0) - r(1, 1) + r(2, 2)).max(0.0).sqrt();
        let qw      = 0.5 * (1.0 + r(0, 0) + r(1, 1) + r(2, 2)).max(0.0).sqrt();

        if r(2, 1) < r(1, 2) { qx = -qx; }
        if r(0, 2) < r(2, 0) { qy = -qy; }
        if r(1, 0) < r(0, 1) { qz = -qz; }

        Some(DecomposedTransform {
            translate,
            scale,
            skew:           Vector3(skew_xy, skew_xz, skew_yz),
            perspective,
            quaternion:     [qx, qy, qz, qw]
        })
    }
}

impl DecomposedTransform {
    ///
    /// Rebuilds the matrix that this decomposition represents
    ///
    pub fn compose(&self) -> Matrix44 {
        let mut perspective = Matrix44::identity();
        perspective.0[3]    = self.perspective;

        let translate       = Matrix44::translate(self.translate.0, self.translate.1, self.translate.2);

        let [x, y, z, w]    = self.quaternion;
        let rotate          = Matrix44([
            [1.0 - 2.0*(y*y + z*z), 2.0*(x*y - z*w),        2.0*(x*z + y*w),        0.0],
            [2.0*(x*y + z*w),       1.0 - 2.0*(x*x + z*z),  2.0*(y*z - x*w),        0.0],
            [2.0*(x*z - y*w),       2.0*(y*z + x*w),        1.0 - 2.0*(x*x + y*y),  0.0],
            [0.0,                   0.0,                    0.0,                    1.0]
        ]);

        let Vector3(xy, xz, yz) = self.skew;
        let skew            = Matrix44([
            [1.0, xy,  xz,  0.0],
            [0.0, 1.0, yz,  0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0]
        ]);

        let scale           = Matrix44::scale(self.scale.0, self.scale.1, self.scale.2);

        perspective * translate * rotate * skew * scale
    }

    ///
    /// Interpolates from another decomposed transform towards this one
    ///
    pub fn blend(&self, from: &DecomposedTransform, progress: f64) -> DecomposedTransform {
        let mut perspective = [0.0; 4];
        for idx in 0..4 {
            perspective[idx] = lerp(from.perspective[idx], self.perspective[idx], progress);
        }

        DecomposedTransform {
            translate:      lerp_vector(from.translate, self.translate, progress),
            scale:          lerp_vector(from.scale, self.scale, progress),
            skew:           lerp_vector(from.skew, self.skew, progress),
            perspective,
            quaternion:     slerp(from.quaternion, self.quaternion, progress)
        }
    }
}
