use std::{io::{BufWriter, Write}, path::Path};

use image::{codecs::png::PngEncoder, ExtendedColorType, ImageEncoder, RgbaImage};
use log::{debug, info};
use rayon::iter::{IndexedParallelIterator, IntoParallelRefMutIterator, ParallelIterator};
use tempfile::NamedTempFile;

use crate::{error::{Error, Result}, types::{Color, TRANSPARENT_BLACK}};

#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        let Some(len) = (width as usize).checked_mul(height as usize) else {
            return Err(Error::InvalidDimensions { width, height });
        };
        let mut pixels = Vec::new();
        if pixels.try_reserve_exact(len).is_err() {
            return Err(Error::InvalidDimensions { width, height });
        }
        pixels.resize(len, TRANSPARENT_BLACK);
        debug!("allocated {}x{} canvas", width, height);
        Ok(Self { width, height, pixels })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.index(x, y).map(|index| self.pixels[index])
    }

    // visiting order is unspecified
    pub fn each_pixel<F>(&mut self, color: F)
    where
        F: Fn(u32, u32) -> Color + Sync,
    {
        debug!("coloring {} pixels", self.pixels.len());
        let width = self.width as usize;
        self.pixels.par_iter_mut().enumerate().for_each(|(index, pixel)| {
            let x = (index % width) as u32;
            let y = (index / width) as u32;
            *pixel = color(x, y);
        });
    }

    pub fn each_pixel_sequential<F>(&mut self, mut color: F)
    where
        F: FnMut(u32, u32) -> Color,
    {
        debug!("coloring {} pixels sequentially", self.pixels.len());
        for y in 0..self.height {
            for x in 0..self.width {
                let index = self.flat_index(x, y);
                self.pixels[index] = color(x, y);
            }
        }
    }

    pub fn to_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| self.pixels[self.flat_index(x, y)])
    }

    pub fn write_png<W: Write>(&self, writer: W) -> Result<()> {
        let bytes: Vec<u8> = self.pixels.iter().flat_map(|pixel| pixel.0).collect();
        PngEncoder::new(writer).write_image(&bytes, self.width, self.height, ExtendedColorType::Rgba8)?;
        Ok(())
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        // encode beside the target, then rename over it
        let mut file = NamedTempFile::new_in(dir)?;
        {
            let mut writer = BufWriter::new(file.as_file_mut());
            self.write_png(&mut writer)?;
            writer.flush()?;
        }
        file.persist(path).map_err(|e| e.error)?;
        info!("saved {}x{} image to {}", self.width, self.height, path.display());
        Ok(())
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(self.flat_index(x, y))
        } else {
            None
        }
    }

    fn flat_index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}
