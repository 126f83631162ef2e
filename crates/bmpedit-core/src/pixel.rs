//! RGB pixel value type

/// A 24-bit RGB pixel.
///
/// Three 8-bit channels, no alpha. `Pixel` is `Copy`, so two pixels in an
/// image never alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Pixel {
    /// Black (0, 0, 0)
    pub const BLACK: Pixel = Pixel::new(0, 0, 0);
    /// White (255, 255, 255)
    pub const WHITE: Pixel = Pixel::new(255, 255, 255);

    /// Create a pixel from red, green and blue channel values.
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Pixel { red, green, blue }
    }

    /// Create a grey pixel with all three channels set to `value`.
    #[inline]
    pub const fn gray(value: u8) -> Self {
        Pixel::new(value, value, value)
    }

    /// Sum of the three channels.
    #[inline]
    pub fn channel_sum(self) -> u32 {
        u32::from(self.red) + u32::from(self.green) + u32::from(self.blue)
    }

    /// Mean of the three channels as a real value.
    #[inline]
    pub fn average(self) -> f64 {
        f64::from(self.channel_sum()) / 3.0
    }

    /// Channel-wise inverse: each channel becomes `255 - channel`.
    #[inline]
    pub fn inverted(self) -> Self {
        Pixel::new(255 - self.red, 255 - self.green, 255 - self.blue)
    }

    /// Channel-wise saturating addition.
    #[inline]
    pub fn saturating_add(self, other: Pixel) -> Self {
        Pixel::new(
            self.red.saturating_add(other.red),
            self.green.saturating_add(other.green),
            self.blue.saturating_add(other.blue),
        )
    }

    /// Linear mix `(1 - fract) * self + fract * other`, truncated per channel.
    #[inline]
    pub fn mix(self, other: Pixel, fract: f64) -> Self {
        let mix = |a: u8, b: u8| ((1.0 - fract) * f64::from(a) + fract * f64::from(b)) as u8;
        Pixel::new(
            mix(self.red, other.red),
            mix(self.green, other.green),
            mix(self.blue, other.blue),
        )
    }
}

impl From<(u8, u8, u8)> for Pixel {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Pixel::new(red, green, blue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_and_sum() {
        let p = Pixel::new(10, 20, 31);
        assert_eq!(p.channel_sum(), 61);
        assert!((p.average() - 61.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_inverted() {
        assert_eq!(Pixel::BLACK.inverted(), Pixel::WHITE);
        assert_eq!(Pixel::new(1, 128, 254).inverted(), Pixel::new(254, 127, 1));
    }

    #[test]
    fn test_saturating_add_clamps() {
        let a = Pixel::new(200, 100, 0);
        let b = Pixel::new(100, 100, 5);
        assert_eq!(a.saturating_add(b), Pixel::new(255, 200, 5));
    }

    #[test]
    fn test_mix_truncates() {
        let a = Pixel::new(0, 0, 0);
        let b = Pixel::new(255, 3, 100);
        // 0.5 * 255 = 127.5 -> 127, 0.5 * 3 = 1.5 -> 1
        assert_eq!(a.mix(b, 0.5), Pixel::new(127, 1, 50));
        assert_eq!(a.mix(b, 0.0), a);
        assert_eq!(a.mix(b, 1.0), b);
    }
}
