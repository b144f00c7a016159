use std::fmt;

/// HSL color with hue in degrees, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Hsl {
    pub const fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Convert to 8-bit RGB for raster surfaces.
    ///
    /// Hue wraps (the hue range may be negative), saturation and lightness clamp.
    pub fn to_rgb(&self) -> [u8; 3] {
        let h = self.hue.rem_euclid(360.0);
        let s = (self.saturation / 100.0).clamp(0.0, 1.0);
        let l = (self.lightness / 100.0).clamp(0.0, 1.0);

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let h_prime = h / 60.0;
        let x = c * (1.0 - (h_prime % 2.0 - 1.0).abs());
        let (r1, g1, b1) = match h_prime as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = l - c / 2.0;
        [
            ((r1 + m) * 255.0).round().clamp(0.0, 255.0) as u8,
            ((g1 + m) * 255.0).round().clamp(0.0, 255.0) as u8,
            ((b1 + m) * 255.0).round().clamp(0.0, 255.0) as u8,
        ]
    }
}

/// CSS form, e.g. `hsl(120, 20%, 80%)`.
impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness)
    }
}

/// Fill of a rectangle patch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fill {
    Hsl(Hsl),
    /// Fixed CSS color literal (the playhead bar)
    Css(&'static str),
}

impl Fill {
    pub fn to_rgb(&self) -> [u8; 3] {
        match self {
            Fill::Hsl(hsl) => hsl.to_rgb(),
            Fill::Css(literal) => parse_hex(literal).unwrap_or([0xaa, 0xaa, 0xaa]),
        }
    }
}

impl fmt::Display for Fill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fill::Hsl(hsl) => hsl.fmt(f),
            Fill::Css(literal) => f.write_str(literal),
        }
    }
}

/// `#rgb` or `#rrggbb`.
fn parse_hex(literal: &str) -> Option<[u8; 3]> {
    let digits = literal.strip_prefix('#')?;
    match digits.len() {
        3 => {
            let mut out = [0u8; 3];
            for (slot, ch) in out.iter_mut().zip(digits.chars()) {
                let v = ch.to_digit(16)? as u8;
                *slot = v * 16 + v;
            }
            Some(out)
        }
        6 => {
            let mut out = [0u8; 3];
            for (i, slot) in out.iter_mut().enumerate() {
                *slot = u8::from_str_radix(digits.get(i * 2..i * 2 + 2)?, 16).ok()?;
            }
            Some(out)
        }
        _ => None,
    }
}
