use std::fmt;

/// 8-bit RGB with a floating alpha, serialized as a CSS `rgba()` string.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.r,
            self.g,
            self.b,
            self.a.clamp(0.0, 1.0)
        )
    }
}

// Palette
pub const AMBER: Rgba = Rgba::rgb(0xfb, 0xbf, 0x24); // #fbbf24
pub const TEAL: Rgba = Rgba::rgb(0x36, 0xcf, 0xc9); // #36cfc9
pub const FADE_OVERLAY: Rgba = Rgba::rgb(13, 27, 42).with_alpha(0.2); // dark navy trail
pub const GRID_LINE: Rgba = TEAL.with_alpha(0.06);

/// Per-trace hue, fixed at creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraceColor {
    Amber,
    Teal,
}

impl TraceColor {
    #[inline]
    pub fn rgba(self) -> Rgba {
        match self {
            TraceColor::Amber => AMBER,
            TraceColor::Teal => TEAL,
        }
    }
}
