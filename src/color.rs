//! 8-bit colours.

/// An opaque 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Normalised RGBA with the given 8-bit alpha, ready for the GPU.
    #[inline]
    pub fn with_alpha(self, alpha: u8) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            alpha as f32 / 255.0,
        ]
    }

    /// Normalised opaque RGBA.
    #[inline]
    pub fn opaque(self) -> [f32; 4] {
        self.with_alpha(u8::MAX)
    }
}
