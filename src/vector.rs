use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::{error::{Error, Result}, types::Float};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: Float,
    pub y: Float,
    pub z: Float,
}

pub const fn vec3(x: Float, y: Float, z: Float) -> Vector3 {
    Vector3 { x, y, z }
}

impl Vector3 {
    pub const fn new(x: Float, y: Float, z: Float) -> Self {
        Self { x, y, z }
    }

    pub const fn zero() -> Self {
        vec3(0.0, 0.0, 0.0)
    }

    pub const fn unit_x() -> Self {
        vec3(1.0, 0.0, 0.0)
    }

    pub const fn unit_y() -> Self {
        vec3(0.0, 1.0, 0.0)
    }

    pub const fn unit_z() -> Self {
        vec3(0.0, 0.0, 1.0)
    }

    pub fn add(self, b: Vector3) -> Vector3 {
        vec3(self.x + b.x, self.y + b.y, self.z + b.z)
    }

    pub fn sub(self, b: Vector3) -> Vector3 {
        vec3(self.x - b.x, self.y - b.y, self.z - b.z)
    }

    pub fn multiply_by_scalar(self, s: Float) -> Vector3 {
        vec3(self.x * s, self.y * s, self.z * s)
    }

    pub fn dot(self, b: Vector3) -> Float {
        self.x * b.x + self.y * b.y + self.z * b.z
    }

    pub fn cross(self, b: Vector3) -> Vector3 {
        vec3(
            self.y * b.z - self.z * b.y,
            self.z * b.x - self.x * b.z,
            self.x * b.y - self.y * b.x,
        )
    }

    pub fn length(self) -> Float {
        self.dot(self).sqrt()
    }

    /// Scales the vector by `1 / length`.
    ///
    /// The zero vector has no direction: `1 / 0` is infinite and `0 * inf` is NaN, so the result
    /// has NaN components. Use [`Vector3::try_normalize`] when the input may be degenerate.
    pub fn normalize(self) -> Vector3 {
        self.multiply_by_scalar(1.0 / self.length())
    }

    pub fn try_normalize(self) -> Result<Vector3> {
        let length = self.length();
        if length == 0.0 || !length.is_finite() {
            return Err(Error::ZeroLengthVector);
        }
        Ok(self.multiply_by_scalar(1.0 / length))
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::add(self, rhs)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3::sub(self, rhs)
    }
}

impl Mul<Float> for Vector3 {
    type Output = Vector3;

    fn mul(self, rhs: Float) -> Vector3 {
        self.multiply_by_scalar(rhs)
    }
}

impl Mul<Vector3> for Float {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Vector3 {
        rhs.multiply_by_scalar(self)
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        self.multiply_by_scalar(-1.0)
    }
}

impl From<cgmath::Vector3<Float>> for Vector3 {
    fn from(v: cgmath::Vector3<Float>) -> Self {
        vec3(v.x, v.y, v.z)
    }
}

impl From<Vector3> for cgmath::Vector3<Float> {
    fn from(v: Vector3) -> Self {
        cgmath::vec3(v.x, v.y, v.z)
    }
}
