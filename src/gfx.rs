use sdl2::pixels::Color;

/// Splits a packed RGBA8888 value into its channels.
/// The most significant byte is red, the least significant one is alpha.
pub fn unpack(packed: u32) -> Color {
    let r = (packed >> 24) as u8;
    let g = (packed >> 16) as u8;
    let b = (packed >> 8) as u8;
    let a = packed as u8;
    Color::RGBA(r, g, b, a)
}

/// Inverse of [`unpack`].
pub fn pack(color: Color) -> u32 {
    (u32::from(color.r) << 24)
        | (u32::from(color.g) << 16)
        | (u32::from(color.b) << 8)
        | u32::from(color.a)
}
