//! Hex/HSL color helpers.

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Hue in degrees `[0, 360)`, saturation and lightness in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// Parse `#rgb` or `#rrggbb` (leading `#` optional, case-insensitive).
pub fn parse_hex(color: &str) -> Option<Rgb> {
    let hex = color.trim().trim_start_matches('#');
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let mut digits = hex.chars().map(|c| {
                let pair = format!("{c}{c}");
                channel(&pair)
            });
            Some(Rgb {
                r: digits.next()??,
                g: digits.next()??,
                b: digits.next()??,
            })
        }
        6 => Some(Rgb {
            r: channel(&hex[0..2])?,
            g: channel(&hex[2..4])?,
            b: channel(&hex[4..6])?,
        }),
        _ => None,
    }
}

/// Lowercase `#rrggbb`.
pub fn to_hex(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}

pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    if max == min {
        return Hsl { h: 0.0, s: 0.0, l };
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
    Hsl { h: h * 60.0, s, l }
}

pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let s = hsl.s.clamp(0.0, 1.0);
    let l = hsl.l.clamp(0.0, 1.0);
    if s == 0.0 {
        let v = to_channel(l);
        return Rgb { r: v, g: v, b: v };
    }
    let h = hsl.h.rem_euclid(360.0) / 360.0;
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    Rgb {
        r: to_channel(hue_to_rgb(p, q, h + 1.0 / 3.0)),
        g: to_channel(hue_to_rgb(p, q, h)),
        b: to_channel(hue_to_rgb(p, q, h - 1.0 / 3.0)),
    }
}

/// Raise HSL lightness by `amount` percentage points (clamped at 100%).
///
/// Colors that do not parse as hex are returned unchanged.
pub fn lighten(color: &str, amount: f64) -> String {
    let Some(rgb) = parse_hex(color) else {
        debug!(color, "unparseable color left unchanged");
        return color.to_string();
    };
    let mut hsl = rgb_to_hsl(rgb);
    hsl.l = (hsl.l + amount / 100.0).clamp(0.0, 1.0);
    to_hex(hsl_to_rgb(hsl))
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn to_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_hex() {
        assert_eq!(parse_hex("#fff"), Some(Rgb { r: 255, g: 255, b: 255 }));
        assert_eq!(parse_hex("3B82F6"), Some(Rgb { r: 59, g: 130, b: 246 }));
        assert_eq!(parse_hex("#12345"), None);
        assert_eq!(parse_hex("red"), None);
    }

    #[test]
    fn hsl_round_trip_preserves_color() {
        for hex in ["#3b82f6", "#10b981", "#1f2937", "#ffffff", "#000000", "#ff0000"] {
            let rgb = parse_hex(hex).unwrap();
            assert_eq!(to_hex(hsl_to_rgb(rgb_to_hsl(rgb))), hex);
        }
    }

    #[test]
    fn lighten_raises_lightness() {
        assert_eq!(lighten("#ff0000", 20.0), "#ff6666");
        assert_eq!(lighten("#000000", 50.0), "#808080");
        assert_eq!(lighten("#ffffff", 20.0), "#ffffff");
        assert_eq!(lighten("rgb(1, 2, 3)", 20.0), "rgb(1, 2, 3)");
    }
}
