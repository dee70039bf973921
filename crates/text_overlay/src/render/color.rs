//! Packed ARGB colors
//!
//! Colors are `0xAARRGGBB`. Script callers often pass `0xRRGGBB` and expect
//! an opaque result, so every color stored by a label goes through
//! [`fix_alpha`] first.

/// Opaque white
pub const WHITE: u32 = 0xFFFF_FFFF;
/// Opaque black
pub const BLACK: u32 = 0xFF00_0000;
/// Opaque red
pub const RED: u32 = 0xFFFF_0000;
/// Opaque green
pub const GREEN: u32 = 0xFF00_FF00;
/// Opaque blue
pub const BLUE: u32 = 0xFF00_00FF;

/// Force a visible alpha channel
///
/// A zero alpha byte means the caller left it out, so it becomes `0xFF`.
/// Any other alpha passes through untouched.
#[inline]
pub const fn fix_alpha(color: u32) -> u32 {
    if alpha(color) == 0 {
        color | 0xFF00_0000
    } else {
        color
    }
}

/// Pack channels into `0xAARRGGBB`
#[inline]
pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
    (a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32
}

/// Pack channels given in script order (red, green, blue, alpha)
#[inline]
pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
    argb(a, r, g, b)
}

/// Alpha channel
#[inline]
pub const fn alpha(color: u32) -> u8 {
    (color >> 24) as u8
}

/// Red channel
#[inline]
pub const fn red(color: u32) -> u8 {
    (color >> 16) as u8
}

/// Green channel
#[inline]
pub const fn green(color: u32) -> u8 {
    (color >> 8) as u8
}

/// Blue channel
#[inline]
pub const fn blue(color: u32) -> u8 {
    color as u8
}

/// Shadow color the classic font renderer uses: each RGB channel at a quarter
/// brightness, alpha kept
#[inline]
pub const fn shadow_of(color: u32) -> u32 {
    (color & 0x00FC_FCFC) >> 2 | (color & 0xFF00_0000)
}
