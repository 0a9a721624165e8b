use crate::types::{rgba, Color};

pub fn gradient(width: u32, height: u32, blue: u8) -> impl Fn(u32, u32) -> Color + Sync {
    move |x, y| rgba(ramp(x, width), ramp(y, height), blue, 255)
}

fn ramp(position: u32, extent: u32) -> u8 {
    (position as u64 * 255 / extent.max(1) as u64).min(255) as u8
}
