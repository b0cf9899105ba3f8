use std::io::Cursor;

use anyhow::Context as _;

use crate::{
    foundation::error::{RevealError, RevealResult},
    render::backend::FrameRGBA,
};

/// Turns a snapshot into file bytes.
pub trait FrameEncoder {
    /// File extension without the dot.
    fn extension(&self) -> &str;

    /// Encode one frame losslessly, keeping alpha.
    fn encode(&self, frame: &FrameRGBA) -> RevealResult<Vec<u8>>;
}

/// Lossless RGBA PNG encoder backed by the `image` crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct PngEncoder;

impl FrameEncoder for PngEncoder {
    fn extension(&self) -> &str {
        "png"
    }

    fn encode(&self, frame: &FrameRGBA) -> RevealResult<Vec<u8>> {
        let expected = frame.width as usize * frame.height as usize * 4;
        if frame.data.len() != expected {
            return Err(RevealError::render(format!(
                "frame byte length {} does not match {}x{} RGBA8",
                frame.data.len(),
                frame.width,
                frame.height
            )));
        }

        let straight = if frame.premultiplied {
            unpremultiply_rgba8(&frame.data)
        } else {
            frame.data.clone()
        };
        let img = image::RgbaImage::from_raw(frame.width, frame.height, straight)
            .ok_or_else(|| RevealError::render("frame buffer too small for its dimensions"))?;

        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png)
            .context("encode png")?;
        Ok(out.into_inner())
    }
}

/// Convert premultiplied RGBA8 to straight alpha.
pub(crate) fn unpremultiply_rgba8(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len());
    for px in data.chunks_exact(4) {
        let a = px[3];
        if a == 0 {
            out.extend_from_slice(&[0, 0, 0, 0]);
            continue;
        }
        let unpremul = |c: u8| -> u8 {
            let v = (u32::from(c) * 255 + u32::from(a) / 2) / u32::from(a);
            v.min(255) as u8
        };
        out.extend_from_slice(&[unpremul(px[0]), unpremul(px[1]), unpremul(px[2]), a]);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
