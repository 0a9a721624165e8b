use rand::Rng;

use crate::{types::EPSILON, vector::{vec3, Vector3}};

pub fn on_half_sphere<R: Rng + ?Sized>(normal: Vector3, rng: &mut R) -> Vector3 {
    let v = on_sphere(rng);
    if normal.dot(v) < 0.0 { -v } else { v }
}

pub fn on_sphere<R: Rng + ?Sized>(rng: &mut R) -> Vector3 {
    loop {
        // rejection sampling inside the unit ball
        let v = in_cube(rng);
        let length_squared = v.dot(v);
        if length_squared <= 1.0 && length_squared > EPSILON {
            if let Ok(unit) = v.try_normalize() {
                return unit;
            }
        }
    }
}

fn in_cube<R: Rng + ?Sized>(rng: &mut R) -> Vector3 {
    vec3(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0))
}
