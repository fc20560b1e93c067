//! HSL <-> sRGB conversion.

use hueprint_core::Color;

/// Hue in degrees [0, 360), saturation and lightness in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    /// Hue is wrapped into [0, 360); saturation and lightness are clamped.
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: h.rem_euclid(360.0),
            s: s.clamp(0.0, 1.0),
            l: l.clamp(0.0, 1.0),
        }
    }

    pub fn rotate(&self, degrees: f64) -> Self {
        Self::new(self.h + degrees, self.s, self.l)
    }

    pub fn with_saturation(&self, s: f64) -> Self {
        Self::new(self.h, s, self.l)
    }

    pub fn with_lightness(&self, l: f64) -> Self {
        Self::new(self.h, self.s, l)
    }

    pub fn to_color(&self) -> Color {
        if self.s <= 0.0 {
            return Color::from_unit_rgb(self.l, self.l, self.l);
        }

        let q = if self.l < 0.5 {
            self.l * (1.0 + self.s)
        } else {
            self.l + self.s - self.l * self.s
        };
        let p = 2.0 * self.l - q;
        let h = self.h / 360.0;

        Color::from_unit_rgb(
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        )
    }
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

impl From<Color> for Hsl {
    fn from(color: Color) -> Self {
        let (r, g, b) = color.to_unit_rgb();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Self { h: 0.0, s: 0.0, l };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Self::new(h * 60.0, s, l)
    }
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self {
        hsl.to_color()
    }
}
