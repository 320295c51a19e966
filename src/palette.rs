//! Shared color utilities: RGB/hex conversion and palette construction.

use rand::prelude::*;

/// An 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Format as a zero-padded lowercase `#rrggbb` string.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Convert from HSV. `h`, `s`, `v` are all in [0, 1]; `h` wraps.
    pub fn from_hsv(h: f64, s: f64, v: f64) -> Self {
        let h = h.rem_euclid(1.0);
        let i = (h * 6.0).floor();
        let f = h * 6.0 - i;
        let p = v * (1.0 - s);
        let q = v * (1.0 - f * s);
        let t = v * (1.0 - (1.0 - f) * s);

        let (r, g, b) = match i as u8 % 6 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        Self {
            r: (r * 255.0) as u8,
            g: (g * 255.0) as u8,
            b: (b * 255.0) as u8,
        }
    }
}

/// Palette construction strategies around a base hue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteKind {
    Complementary,
    Analogous,
    Triadic,
    Monochromatic,
}

impl PaletteKind {
    /// Resolve a label; unknown labels get the monochromatic ramp rather
    /// than an error.
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "complementary" => PaletteKind::Complementary,
            "analogous" => PaletteKind::Analogous,
            "triadic" => PaletteKind::Triadic,
            _ => PaletteKind::Monochromatic,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PaletteKind::Complementary => "complementary",
            PaletteKind::Analogous => "analogous",
            PaletteKind::Triadic => "triadic",
            PaletteKind::Monochromatic => "monochromatic",
        }
    }

    /// Build the palette around `base_hue` (in [0, 1]).
    pub fn build(self, base_hue: f64) -> Vec<Rgb> {
        match self {
            PaletteKind::Complementary => vec![
                Rgb::from_hsv(base_hue, 0.7, 0.9),
                Rgb::from_hsv(base_hue + 0.5, 0.7, 0.9),
                Rgb::from_hsv(base_hue, 0.5, 0.9),
                Rgb::from_hsv(base_hue + 0.5, 0.5, 0.9),
            ],
            PaletteKind::Analogous => (0..4)
                .map(|i| Rgb::from_hsv(base_hue + i as f64 * 0.1, 0.7, 0.9))
                .collect(),
            PaletteKind::Triadic => (0..3)
                .flat_map(|i| {
                    let hue = base_hue + i as f64 * 0.33;
                    [Rgb::from_hsv(hue, 0.7, 0.9), Rgb::from_hsv(hue, 0.5, 0.9)]
                })
                .collect(),
            PaletteKind::Monochromatic => (0..4)
                .map(|i| Rgb::from_hsv(base_hue, 0.3 + i as f64 * 0.2, 0.9))
                .collect(),
        }
    }
}

/// Pick one color at random. Panics on an empty slice; every builder in this
/// module returns at least three entries.
pub fn pick(colors: &[Rgb], rng: &mut StdRng) -> Rgb {
    colors[rng.gen_range(0..colors.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_formatting_is_zero_padded_lowercase() {
        assert_eq!(Rgb::new(18, 200, 255).to_hex(), "#12c8ff");
        assert_eq!(Rgb::new(0, 0, 0).to_hex(), "#000000");
        assert_eq!(Rgb::new(255, 255, 255).to_hex(), "#ffffff");
    }

    #[test]
    fn hsv_primaries() {
        assert_eq!(Rgb::from_hsv(0.0, 1.0, 1.0), Rgb::new(255, 0, 0));
        assert_eq!(Rgb::from_hsv(1.0 / 3.0, 1.0, 1.0).g, 255);
        assert_eq!(Rgb::from_hsv(2.0 / 3.0, 1.0, 1.0).b, 255);
    }

    #[test]
    fn hsv_hue_wraps() {
        assert_eq!(Rgb::from_hsv(1.25, 0.7, 0.9), Rgb::from_hsv(0.25, 0.7, 0.9));
    }

    #[test]
    fn palette_sizes() {
        assert_eq!(PaletteKind::Complementary.build(0.5).len(), 4);
        assert_eq!(PaletteKind::Analogous.build(0.5).len(), 4);
        assert_eq!(PaletteKind::Triadic.build(0.5).len(), 6);
        assert_eq!(PaletteKind::Monochromatic.build(0.5).len(), 4);
    }

    #[test]
    fn unknown_palette_label_falls_back() {
        assert_eq!(PaletteKind::from_label("glorp"), PaletteKind::Monochromatic);
        assert_eq!(PaletteKind::from_label("Triadic"), PaletteKind::Triadic);
    }
}
