//! Fixed-length frame buffer
//!
//! The only state the transport driver reads. Indexing helpers treat the
//! buffer as a ring so patterns can fold around a seam.

use core::ops::{Index, IndexMut};

use crate::color::{self, BLACK, Rgb};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer<const N: usize> {
    pixels: [Rgb; N],
}

impl<const N: usize> Default for FrameBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> FrameBuffer<N> {
    pub const fn new() -> Self {
        Self { pixels: [BLACK; N] }
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    pub fn pixels(&self) -> &[Rgb; N] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Rgb; N] {
        &mut self.pixels
    }

    pub fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    pub fn clear(&mut self) {
        self.fill(BLACK);
    }

    pub fn is_black(&self) -> bool {
        self.pixels.iter().all(|&p| color::is_black(p))
    }

    /// Fold any signed position onto `0..N`.
    ///
    /// Index `N` maps to 0 and index -1 maps to `N - 1`.
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub fn wrap(position: isize) -> usize {
        if N == 0 {
            return 0;
        }
        position.rem_euclid(N as isize) as usize
    }

    pub fn get_wrapped(&self, position: isize) -> Rgb {
        if N == 0 {
            return BLACK;
        }
        self.pixels[Self::wrap(position)]
    }

    pub fn set_wrapped(&mut self, position: isize, color: Rgb) {
        if N == 0 {
            return;
        }
        self.pixels[Self::wrap(position)] = color;
    }

    /// Additively blend `color` onto the pixel, saturating each channel
    pub fn add_wrapped(&mut self, position: isize, color: Rgb) {
        if N == 0 {
            return;
        }
        let index = Self::wrap(position);
        self.pixels[index] = color::add_saturating(self.pixels[index], color);
    }

    /// Darken every pixel by the same amount
    pub fn fade_all(&mut self, amount: u8) {
        for pixel in &mut self.pixels {
            *pixel = color::fade_by(*pixel, amount);
        }
    }
}

impl<const N: usize> Index<usize> for FrameBuffer<N> {
    type Output = Rgb;

    fn index(&self, index: usize) -> &Rgb {
        &self.pixels[index]
    }
}

impl<const N: usize> IndexMut<usize> for FrameBuffer<N> {
    fn index_mut(&mut self, index: usize) -> &mut Rgb {
        &mut self.pixels[index]
    }
}
