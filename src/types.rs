pub type Float = f64;

pub const EPSILON: Float = Float::EPSILON * 512.0;

pub type Color = image::Rgba<u8>;

/// Color of every cell of a freshly constructed canvas.
pub const TRANSPARENT_BLACK: Color = image::Rgba([0, 0, 0, 0]);

pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
    image::Rgba([r, g, b, a])
}
