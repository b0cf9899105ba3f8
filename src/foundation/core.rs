use crate::foundation::error::{RevealError, RevealResult};

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Validated constructor; both dimensions must be non-zero.
    pub fn new(width: u32, height: u32) -> RevealResult<Self> {
        if width == 0 || height == 0 {
            return Err(RevealError::validation("canvas width/height must be > 0"));
        }
        Ok(Self { width, height })
    }
}

/// 1-based caption group number. Doubles as the output sub-folder number.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct GroupId(pub u32);

/// 1-based export sequence number, unique across a whole run.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ExportSeq(pub u32);

/// Straight-alpha color packed as `0xAARRGGBB`.
///
/// `0` is the "unset" value for group overrides, so fully transparent black cannot be requested
/// as an override.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct Argb(pub u32);

impl Argb {
    /// Opaque white.
    pub const WHITE: Self = Self(0xffff_ffff);
    /// Opaque black.
    pub const BLACK: Self = Self(0xff00_0000);

    /// Whether this is the zero "unset" value.
    pub fn is_unset(self) -> bool {
        self.0 == 0
    }

    /// Unpack into straight `[r, g, b, a]`.
    pub fn to_rgba8(self) -> [u8; 4] {
        let [a, r, g, b] = self.0.to_be_bytes();
        [r, g, b, a]
    }
}
