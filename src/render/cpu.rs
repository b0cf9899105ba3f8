use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use anyhow::Context as _;

use crate::{
    caption::style::{ResolvedStyle, TextStyle},
    foundation::core::Canvas,
    foundation::error::{RevealError, RevealResult},
    layout::metrics::TextMetrics,
    render::backend::{CanvasBackend, CanvasId, DrawPass, FrameRGBA},
    render::text::{TextBrushRgba8, TextLayoutEngine},
};

/// CPU text backend: Parley shaping and measurement, `vello_cpu` rasterization.
///
/// Fonts are files resolved against `assets_root`, first directly and then under `fonts/`.
pub struct CpuBackend {
    assets_root: PathBuf,
    engine: TextLayoutEngine,
    fonts: HashMap<String, LoadedFont>,
    widths: HashMap<MeasureKey, f32>,
    canvases: HashMap<CanvasId, CpuCanvas>,
    next_canvas: u32,
}

#[derive(Clone)]
struct LoadedFont {
    family: String,
    data: vello_cpu::peniko::FontData,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct MeasureKey {
    text: String,
    font: String,
    size_bits: u32,
}

struct CpuCanvas {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
}

impl CpuBackend {
    /// Backend resolving font files against `assets_root`.
    pub fn new(assets_root: impl Into<PathBuf>) -> Self {
        Self {
            assets_root: assets_root.into(),
            engine: TextLayoutEngine::new(),
            fonts: HashMap::new(),
            widths: HashMap::new(),
            canvases: HashMap::new(),
            next_canvas: 0,
        }
    }

    /// Family name Parley reports for a resolved font.
    pub fn family_name(&self, font: &str) -> Option<&str> {
        self.fonts.get(font).map(|f| f.family.as_str())
    }

    /// Number of canvases currently allocated.
    pub fn live_canvases(&self) -> usize {
        self.canvases.len()
    }

    fn font_candidates(&self, font: &str) -> [PathBuf; 2] {
        [
            self.assets_root.join(Path::new(font)),
            self.assets_root.join("fonts").join(Path::new(font)),
        ]
    }

    fn load_font(&mut self, font: &str) -> RevealResult<LoadedFont> {
        if let Some(loaded) = self.fonts.get(font) {
            return Ok(loaded.clone());
        }
        if font.trim().is_empty() {
            return Err(RevealError::missing_style_asset(font, "empty font name"));
        }

        let path = self
            .font_candidates(font)
            .into_iter()
            .find(|p| p.is_file())
            .ok_or_else(|| {
                RevealError::missing_style_asset(
                    font,
                    format!("no font file under '{}'", self.assets_root.display()),
                )
            })?;
        let bytes = std::fs::read(&path)
            .with_context(|| format!("read font bytes from '{}'", path.display()))
            .map_err(|e| RevealError::missing_style_asset(font, format!("{e:#}")))?;
        let family = self
            .engine
            .register_font(&bytes)
            .map_err(|e| RevealError::missing_style_asset(font, e.to_string()))?;

        tracing::debug!(font, family = %family, path = %path.display(), "loaded font");
        let loaded = LoadedFont {
            family,
            data: vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(bytes), 0),
        };
        self.fonts.insert(font.to_string(), loaded.clone());
        Ok(loaded)
    }
}

impl TextMetrics for CpuBackend {
    fn resolve_font(&mut self, font: &str) -> RevealResult<()> {
        self.load_font(font).map(|_| ())
    }

    fn measure(&mut self, text: &str, style: &TextStyle) -> RevealResult<f32> {
        let key = MeasureKey {
            text: text.to_string(),
            font: style.font.clone(),
            size_bits: style.font_size.to_bits(),
        };
        if let Some(w) = self.widths.get(&key) {
            return Ok(*w);
        }

        let font = self.load_font(&style.font)?;
        let brush = TextBrushRgba8::from_rgba8(style.color.to_rgba8());
        let layout = self
            .engine
            .layout_line(text, &font.family, style.font_size, brush)?;
        let width = layout.full_width();
        self.widths.insert(key, width);
        Ok(width)
    }
}

impl CanvasBackend for CpuBackend {
    fn create_canvas(&mut self, size: Canvas) -> RevealResult<CanvasId> {
        let width: u16 = size
            .width
            .try_into()
            .map_err(|_| RevealError::render("canvas width exceeds u16"))?;
        let height: u16 = size
            .height
            .try_into()
            .map_err(|_| RevealError::render("canvas height exceeds u16"))?;

        let id = CanvasId(self.next_canvas);
        self.next_canvas = self.next_canvas.wrapping_add(1);
        self.canvases.insert(
            id,
            CpuCanvas {
                width,
                height,
                ctx: vello_cpu::RenderContext::new(width, height),
            },
        );
        Ok(id)
    }

    fn draw_text(
        &mut self,
        canvas: CanvasId,
        text: &str,
        x: f32,
        y: f32,
        style: &ResolvedStyle,
        pass: DrawPass,
    ) -> RevealResult<()> {
        if text.is_empty() {
            return Ok(());
        }

        let font = self.load_font(&style.text.font)?;
        let fill = TextBrushRgba8::from_rgba8(style.text.color.to_rgba8());
        let layout = self
            .engine
            .layout_line(text, &font.family, style.text.font_size, fill)?;
        let Some(first_line) = layout.lines().next() else {
            return Ok(());
        };
        let baseline = first_line.metrics().baseline;

        let surface = self.canvases.get_mut(&canvas).ok_or_else(|| {
            RevealError::render(format!("canvas {:?} was not created", canvas))
        })?;
        let ctx = &mut surface.ctx;
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_transform(vello_cpu::kurbo::Affine::translate((
            f64::from(x),
            f64::from(y - baseline),
        )));

        let brush = match pass {
            DrawPass::Fill => fill,
            DrawPass::Stroke => {
                ctx.set_stroke(vello_cpu::kurbo::Stroke::new(f64::from(
                    style.stroke.width,
                )));
                TextBrushRgba8::from_rgba8(style.stroke.color.to_rgba8())
            }
        };
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            brush.r, brush.g, brush.b, brush.a,
        ));

        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };

                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                let builder = ctx
                    .glyph_run(&font.data)
                    .font_size(run.run().font_size());
                match pass {
                    DrawPass::Fill => builder.fill_glyphs(glyphs),
                    DrawPass::Stroke => builder.stroke_glyphs(glyphs),
                }
            }
        }
        Ok(())
    }

    fn snapshot(&mut self, canvas: CanvasId) -> RevealResult<FrameRGBA> {
        let surface = self.canvases.get_mut(&canvas).ok_or_else(|| {
            RevealError::render(format!("canvas {:?} was not created", canvas))
        })?;

        let mut pixmap = vello_cpu::Pixmap::new(surface.width, surface.height);
        surface.ctx.flush();
        surface.ctx.render_to_pixmap(&mut pixmap);

        Ok(FrameRGBA {
            width: u32::from(surface.width),
            height: u32::from(surface.height),
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }

    fn dispose(&mut self, canvas: CanvasId) {
        self.canvases.remove(&canvas);
    }
}
