use crate::core::Rgb8;
use image::RgbImage;
use rayon::prelude::*;
use rayon::slice::ChunksMut;
use std::slice::Chunks;

/// Row-major RGB8 samples, top row first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub const CHANNELS: usize = 3;

    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize * Self::CHANNELS;

        Self {
            width,
            height,
            data: vec![0; len],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn row_len(&self) -> usize {
        self.width as usize * Self::CHANNELS
    }

    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.row_len() + x as usize * Self::CHANNELS)
        } else {
            None
        }
    }

    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgb8> {
        let offset = self.offset(x, y)?;
        let mut pixel = [0; 3];
        pixel.copy_from_slice(&self.data[offset..offset + Self::CHANNELS]);

        Some(pixel)
    }

    /// # Panics
    ///
    /// Will panic if (`x`, `y`) lies outside the buffer
    pub fn put_pixel(&mut self, x: u32, y: u32, pixel: Rgb8) {
        let offset = self
            .offset(x, y)
            .unwrap_or_else(|| panic!("pixel ({}, {}) out of bounds", x, y));
        self.data[offset..offset + Self::CHANNELS].copy_from_slice(&pixel);
    }

    pub fn rows(&self) -> Chunks<'_, u8> {
        self.data.chunks(self.row_len().max(1))
    }

    pub(crate) fn par_rows_mut(&mut self) -> ChunksMut<'_, u8> {
        let row_len = self.row_len().max(1);
        self.data.par_chunks_mut(row_len)
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    pub fn to_image(&self) -> RgbImage {
        RgbImage::from_raw(self.width, self.height, self.data.clone())
            .expect("pixel buffer length matches its dimensions")
    }
}

impl From<PixelBuffer> for RgbImage {
    fn from(buffer: PixelBuffer) -> Self {
        let (width, height) = (buffer.width, buffer.height);
        RgbImage::from_raw(width, height, buffer.into_raw())
            .expect("pixel buffer length matches its dimensions")
    }
}
