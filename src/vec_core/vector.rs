use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use log::{debug, trace};

use super::consts::{DECIMAL_PLACES, Y_AXIS};
use super::error::VectorError;
use super::round::round_to;

/// Immutable 2D vector.
///
/// Both components are rounded to [`DECIMAL_PLACES`] digits when the value
/// is built and never change afterwards. Every operation returns a new value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector2D(f64, f64);

impl Vector2D {
    pub const ZERO: Vector2D = Vector2D(0.0, 0.0);

    pub fn new(x: f64, y: f64) -> Vector2D {
        Vector2D(round_to(x, DECIMAL_PLACES), round_to(y, DECIMAL_PLACES))
    }

    /// Vector pointing from `start` to `end`.
    pub fn from_two_points(start: (f64, f64), end: (f64, f64)) -> Vector2D {
        Vector2D::new(end.0 - start.0, end.1 - start.1)
    }

    pub fn x(&self) -> f64 {
        self.0
    }

    pub fn y(&self) -> f64 {
        self.1
    }

    pub fn as_tuple(&self) -> (f64, f64) {
        (self.0, self.1)
    }

    pub fn plus(self, v2: Vector2D) -> Vector2D {
        Vector2D::new(self.0 + v2.0, self.1 + v2.1)
    }

    pub fn minus(self, v2: Vector2D) -> Vector2D {
        Vector2D::new(self.0 - v2.0, self.1 - v2.1)
    }

    pub fn scale(self, v: f64) -> Vector2D {
        Vector2D::new(self.0 * v, self.1 * v)
    }

    /// Dot product of the stored components. Not rounded.
    pub fn dot(self, v2: Vector2D) -> f64 {
        self.0 * v2.0 + self.1 * v2.1
    }

    pub fn length_square(&self) -> f64 {
        self.0 * self.0 + self.1 * self.1
    }

    pub fn length(&self) -> f64 {
        f64::sqrt(self.length_square())
    }

    /// Unit vector with the same direction.
    ///
    /// A zero vector has no direction and normalizes to [`Vector2D::ZERO`]
    /// instead of dividing by zero.
    pub fn normalized(self) -> Vector2D {
        let length = self.length();
        if length == 0.0 {
            trace!("normalizing zero vector, returning zero");
            return Vector2D::ZERO;
        }

        Vector2D::new(self.0 / length, self.1 / length)
    }

    /// Unsigned angle to `other` in whole degrees, `0..=180`.
    ///
    /// The cosine is clamped to `[-1, 1]` before `acos` so that rounding
    /// noise cannot leave the domain. Degrees are rounded with ties to even.
    ///
    /// # Errors
    ///
    /// [`VectorError::ZeroLength`] if either vector has length 0,
    /// [`VectorError::NotFinite`] if a component is NaN or infinite.
    pub fn angle_between(self, other: Vector2D) -> Result<i64, VectorError> {
        let len_self = self.length();
        let len_other = other.length();

        if len_self == 0.0 || len_other == 0.0 {
            debug!("angle between {} and {} rejected: zero length", self, other);
            return Err(VectorError::ZeroLength);
        }

        let cos_angle = self.dot(other) / (len_self * len_other);
        if cos_angle.is_nan() {
            debug!("angle between {} and {} rejected: non-finite", self, other);
            return Err(VectorError::NotFinite);
        }

        let degrees = cos_angle.clamp(-1.0, 1.0).acos().to_degrees();
        Ok(degrees.round_ties_even() as i64)
    }

    /// Angle to the positive y-axis, see [`Vector2D::angle_between`].
    pub fn angle_from_y_axis(self) -> Result<i64, VectorError> {
        self.angle_between(Vector2D::from(Y_AXIS))
    }

    /// Rotates counter-clockwise (y-up) by `degrees`.
    pub fn rotate(self, degrees: f64) -> Vector2D {
        let (sin_a, cos_a) = degrees.to_radians().sin_cos();

        Vector2D::new(
            self.0 * cos_a - self.1 * sin_a,
            self.0 * sin_a + self.1 * cos_a,
        )
    }
}

impl Default for Vector2D {
    fn default() -> Self {
        Vector2D::ZERO
    }
}

impl From<(f64, f64)> for Vector2D {
    fn from(point: (f64, f64)) -> Self {
        Vector2D::new(point.0, point.1)
    }
}

impl From<Vector2D> for (f64, f64) {
    fn from(v: Vector2D) -> Self {
        v.as_tuple()
    }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector2D({}, {})", self.0, self.1)
    }
}

impl Add for Vector2D {
    type Output = Vector2D;

    fn add(self, other: Vector2D) -> Vector2D {
        self.plus(other)
    }
}

impl Sub for Vector2D {
    type Output = Vector2D;

    fn sub(self, other: Vector2D) -> Vector2D {
        self.minus(other)
    }
}

impl Neg for Vector2D {
    type Output = Vector2D;

    fn neg(self) -> Vector2D {
        Vector2D::new(-self.0, -self.1)
    }
}

/// `vector * scalar` scales.
impl Mul<f64> for Vector2D {
    type Output = Vector2D;

    fn mul(self, scalar: f64) -> Vector2D {
        self.scale(scalar)
    }
}

/// `vector * vector` is the dot product.
impl Mul<Vector2D> for Vector2D {
    type Output = f64;

    fn mul(self, other: Vector2D) -> f64 {
        self.dot(other)
    }
}
