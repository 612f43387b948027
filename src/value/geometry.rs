use serde::{Serialize, Deserialize};

pub use flo_curves::{Coordinate, Geo, BoundingBox};

use std::ops::{Add, Sub, Mul, Neg};

///
/// A point or direction in 3D space
///
#[derive(Clone, Copy, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Vector3(pub f64, pub f64, pub f64);

impl Vector3 {
    #[inline] pub fn x(&self) -> f64 { self.0 }
    #[inline] pub fn y(&self) -> f64 { self.1 }
    #[inline] pub fn z(&self) -> f64 { self.2 }

    #[inline]
    pub fn cross(&self, other: &Vector3) -> Vector3 {
        Vector3(
            self.1*other.2 - self.2*other.1,
            self.2*other.0 - self.0*other.2,
            self.0*other.1 - self.1*other.0
        )
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.distance_to(&Vector3::origin())
    }

    ///
    /// Returns a unit vector in the same direction as this one (or the zero vector if this has no length)
    ///
    pub fn to_unit_vector(&self) -> Vector3 {
        let length = self.length();

        if length == 0.0 {
            Vector3::origin()
        } else {
            *self * (1.0/length)
        }
    }
}

impl Add<Vector3> for Vector3 {
    type Output=Vector3;

    #[inline]
    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3(self.0 + rhs.0, self.1 + rhs.1, self.2 + rhs.2)
    }
}

impl Sub<Vector3> for Vector3 {
    type Output=Vector3;

    #[inline]
    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3(self.0 - rhs.0, self.1 - rhs.1, self.2 - rhs.2)
    }
}

impl Mul<f64> for Vector3 {
    type Output=Vector3;

    #[inline]
    fn mul(self, rhs: f64) -> Vector3 {
        Vector3(self.0 * rhs, self.1 * rhs, self.2 * rhs)
    }
}

impl Neg for Vector3 {
    type Output=Vector3;

    #[inline]
    fn neg(self) -> Vector3 {
        Vector3(-self.0, -self.1, -self.2)
    }
}

impl Coordinate for Vector3 {
    #[inline]
    fn from_components(components: &[f64]) -> Vector3 {
        Vector3(components[0], components[1], components[2])
    }

    #[inline]
    fn origin() -> Vector3 {
        Vector3(0.0, 0.0, 0.0)
    }

    #[inline]
    fn len() -> usize { 3 }

    #[inline]
    fn get(&self, index: usize) -> f64 {
        match index {
            0 => self.0,
            1 => self.1,
            2 => self.2,
            _ => panic!("Vector3 only has three components")
        }
    }

    fn from_biggest_components(p1: Vector3, p2: Vector3) -> Vector3 {
        Vector3(f64::from_biggest_components(p1.0, p2.0), f64::from_biggest_components(p1.1, p2.1), f64::from_biggest_components(p1.2, p2.2))
    }

    fn from_smallest_components(p1: Vector3, p2: Vector3) -> Vector3 {
        Vector3(f64::from_smallest_components(p1.0, p2.0), f64::from_smallest_components(p1.1, p2.1), f64::from_smallest_components(p1.2, p2.2))
    }

    #[inline]
    fn distance_to(&self, target: &Vector3) -> f64 {
        let offset = *target - *self;

        f64::sqrt(offset.dot(&offset))
    }

    #[inline]
    fn dot(&self, target: &Vector3) -> f64 {
        self.0*target.0 + self.1*target.1 + self.2*target.2
    }
}

///
/// An axis-aligned box in 3D space
///
/// (Unlike a pair of points, this always stores its bounds in minimum/maximum order)
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Bounds3 {
    min: Vector3,
    max: Vector3
}

impl Geo for Bounds3 {
    type Point=Vector3;
}

impl BoundingBox for Bounds3 {
    #[inline]
    fn from_min_max(p1: Vector3, p2: Vector3) -> Bounds3 {
        Bounds3 {
            min: Vector3::from_smallest_components(p1, p2),
            max: Vector3::from_biggest_components(p1, p2)
        }
    }

    #[inline]
    fn min(&self) -> Vector3 {
        self.min
    }

    #[inline]
    fn max(&self) -> Vector3 {
        self.max
    }
}

impl Bounds3 {
    ///
    /// Creates a box from an origin and a size
    ///
    pub fn from_origin_and_size(origin: Vector3, size: Vector3) -> Bounds3 {
        Self::from_min_max(origin, origin + size)
    }

    ///
    /// The width, height and depth of this box
    ///
    #[inline]
    pub fn size(&self) -> Vector3 {
        self.max - self.min
    }

    ///
    /// True if this box encloses no volume and no area (ie, it's a line or a point)
    ///
    pub fn is_empty(&self) -> bool {
        let Vector3(w, h, d) = self.size();

        (w == 0.0 && h == 0.0) || (w == 0.0 && d == 0.0) || (h == 0.0 && d == 0.0)
    }

    ///
    /// The 8 corners of this box
    ///
    pub fn corners(&self) -> [Vector3; 8] {
        let (min, max) = (self.min, self.max);

        [
            Vector3(min.0, min.1, min.2),
            Vector3(max.0, min.1, min.2),
            Vector3(min.0, max.1, min.2),
            Vector3(max.0, max.1, min.2),
            Vector3(min.0, min.1, max.2),
            Vector3(max.0, min.1, max.2),
            Vector3(min.0, max.1, max.2),
            Vector3(max.0, max.1, max.2),
        ]
    }

    ///
    /// Extends this box so that it contains the specified point
    ///
    pub fn expand_to_point(self, point: Vector3) -> Bounds3 {
        Bounds3 {
            min: Vector3::from_smallest_components(self.min, point),
            max: Vector3::from_biggest_components(self.max, point)
        }
    }

    ///
    /// The smallest box that contains both this box and another
    ///
    /// Unlike `union_bounds`, a box that is a single point still contributes to the result
    ///
    pub fn union(self, target: Bounds3) -> Bounds3 {
        Bounds3 {
            min: Vector3::from_smallest_components(self.min, target.min),
            max: Vector3::from_biggest_components(self.max, target.max)
        }
    }
}
