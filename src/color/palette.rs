use super::PixelColor;

/// Full-scale color for clean air
pub const GREEN: PixelColor = rgb_from_u32(0x00FF00);

/// Full-scale color for moderate pollution.
///
/// Keeps the 3:1 red/green ratio of the firmware's orange indicator.
pub const AMBER: PixelColor = rgb_from_u32(0xFF5500);

/// Full-scale color for poor air
pub const RED: PixelColor = rgb_from_u32(0xFF0000);

/// Create a color from a u32 value (0xRRGGBB format)
#[allow(clippy::cast_possible_truncation)]
pub const fn rgb_from_u32(color: u32) -> PixelColor {
    PixelColor::new(
        ((color >> 16) & 0xFF) as u8,
        ((color >> 8) & 0xFF) as u8,
        (color & 0xFF) as u8,
    )
}
