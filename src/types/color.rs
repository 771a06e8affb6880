use egui::Color32;
use serde::Deserialize;

fn channel_to_u8(channel: f32) -> u8 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        (channel.clamp(0.0, 1.0) * 255.0).round() as u8
    }
}

fn u8_to_channel(value: u8) -> f32 {
    f32::from(value) / 255.0
}

/// Straight (unmultiplied) RGBA color with channels in `[0, 1]`.
///
/// Deserializes from `#RRGGBB` or `#RRGGBBAA` strings.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Self = Self::opaque(1.0, 1.0, 1.0);

    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn from_rgba8([r, g, b, a]: [u8; 4]) -> Self {
        Self {
            r: u8_to_channel(r),
            g: u8_to_channel(g),
            b: u8_to_channel(b),
            a: u8_to_channel(a),
        }
    }

    pub fn to_rgba8(self) -> [u8; 4] {
        [
            channel_to_u8(self.r),
            channel_to_u8(self.g),
            channel_to_u8(self.b),
            channel_to_u8(self.a),
        ]
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (the leading `#` is optional).
    pub fn from_hex(text: &str) -> Option<Self> {
        let hex = text.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() || !matches!(hex.len(), 6 | 8) {
            return None;
        }
        let byte = |idx: usize| u8::from_str_radix(&hex[idx..idx + 2], 16).ok();
        let alpha = if hex.len() == 8 { byte(6)? } else { u8::MAX };
        Some(Self::from_rgba8([byte(0)?, byte(2)?, byte(4)?, alpha]))
    }

    pub fn to_hex(self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == u8::MAX {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }

    pub fn to_color32(self) -> Color32 {
        let [r, g, b, a] = self.to_rgba8();
        Color32::from_rgba_unmultiplied(r, g, b, a)
    }

    pub fn from_color32(color: Color32) -> Self {
        Self::from_rgba8(color.to_srgba_unmultiplied())
    }
}

impl TryFrom<String> for Rgba {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value).ok_or_else(|| format!("invalid color '{value}', expected #RRGGBB"))
    }
}
