use std::{fs::File, io::{BufWriter, Write}, path::Path};

use crate::{canvas::Canvas, error::Result, types::Color};

pub fn write_ppm<W: Write>(canvas: &Canvas, mut writer: W) -> Result<()> {
    writer.write_all(b"P6\n")?;
    writer.write_fmt(format_args!("{} {}\n", canvas.width(), canvas.height()))?;
    writer.write_all(b"255\n")?;
    for pixel in canvas.pixels() {
        writer.write_all(&to_bytes(pixel))?;
    }
    Ok(())
}

pub fn save_to_ppm<P: AsRef<Path>>(canvas: &Canvas, path: P) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_ppm(canvas, &mut writer)?;
    writer.flush()?;
    Ok(())
}

fn to_bytes(pixel: &Color) -> [u8; 3] {
    let [r, g, b, _] = pixel.0;
    [r, g, b]
}
