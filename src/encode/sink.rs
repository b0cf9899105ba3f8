use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::{
    encode::png::FrameEncoder,
    foundation::core::{Canvas, ExportSeq, GroupId},
    foundation::error::RevealResult,
    render::backend::FrameRGBA,
};

/// Identity of one exported frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExportKey {
    /// Group whose canvas was snapshotted.
    pub group: GroupId,
    /// Sequence number of the cell that triggered the export.
    pub seq: ExportSeq,
}

/// Output layout: `<root>/<group_prefix><group:03>/<file_prefix><seq:03>.<ext>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputNaming {
    /// Directory all group folders go into.
    pub root: PathBuf,
    /// Prefix of each group folder name.
    pub group_prefix: String,
    /// Prefix of each frame file name.
    pub file_prefix: String,
}

impl Default for OutputNaming {
    fn default() -> Self {
        Self {
            root: PathBuf::from("output"),
            group_prefix: "group".to_string(),
            file_prefix: "caption".to_string(),
        }
    }
}

impl OutputNaming {
    /// Directory holding every frame of `group`.
    pub fn group_dir(&self, group: GroupId) -> PathBuf {
        self.root.join(format!("{}{:03}", self.group_prefix, group.0))
    }

    /// Full path of one frame.
    pub fn path_for(&self, key: ExportKey, extension: &str) -> PathBuf {
        self.group_dir(key.group)
            .join(format!("{}{:03}.{extension}", self.file_prefix, key.seq.0))
    }
}

/// Configuration provided to a [`FrameSink`] before the first frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SinkConfig {
    /// Size of every frame in the run.
    pub canvas: Canvas,
}

/// Sink contract for consuming exported frames.
///
/// Ordering contract: `push_frame` is called in strictly increasing [`ExportSeq`] order, and all
/// frames of a group arrive before any frame of the next group.
pub trait FrameSink {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> RevealResult<()>;
    /// Push one exported frame.
    fn push_frame(&mut self, key: ExportKey, frame: &FrameRGBA) -> RevealResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> RevealResult<()>;
}

/// In-memory sink for tests and embedding: keeps `(path, frame)` pairs without encoding.
#[derive(Debug)]
pub struct InMemorySink {
    naming: OutputNaming,
    extension: String,
    cfg: Option<SinkConfig>,
    frames: Vec<(PathBuf, FrameRGBA)>,
}

impl Default for InMemorySink {
    fn default() -> Self {
        Self::new(OutputNaming::default())
    }
}

impl InMemorySink {
    /// Create a sink that names frames with `naming` and a `png` extension.
    pub fn new(naming: OutputNaming) -> Self {
        Self {
            naming,
            extension: "png".to_string(),
            cfg: None,
            frames: Vec::new(),
        }
    }

    /// Return the sink configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Borrow the captured frames.
    pub fn frames(&self) -> &[(PathBuf, FrameRGBA)] {
        &self.frames
    }

    /// Take ownership of the captured frames.
    pub fn into_frames(self) -> Vec<(PathBuf, FrameRGBA)> {
        self.frames
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> RevealResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        Ok(())
    }

    fn push_frame(&mut self, key: ExportKey, frame: &FrameRGBA) -> RevealResult<()> {
        let path = self.naming.path_for(key, &self.extension);
        self.frames.push((path, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> RevealResult<()> {
        Ok(())
    }
}

/// Encodes each frame and writes it under [`OutputNaming`].
#[derive(Debug)]
pub struct FileSink<E> {
    naming: OutputNaming,
    encoder: E,
    written: Vec<PathBuf>,
}

impl<E: FrameEncoder> FileSink<E> {
    /// Sink writing under `naming` with `encoder`'s format.
    pub fn new(naming: OutputNaming, encoder: E) -> Self {
        Self {
            naming,
            encoder,
            written: Vec::new(),
        }
    }

    /// Paths written so far, in export order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl<E: FrameEncoder> FrameSink for FileSink<E> {
    fn begin(&mut self, _cfg: SinkConfig) -> RevealResult<()> {
        self.written.clear();
        Ok(())
    }

    fn push_frame(&mut self, key: ExportKey, frame: &FrameRGBA) -> RevealResult<()> {
        let path = self.naming.path_for(key, self.encoder.extension());
        let bytes = self.encoder.encode(frame)?;
        write_bytes(&path, &bytes)?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote frame");
        self.written.push(path);
        Ok(())
    }

    fn end(&mut self) -> RevealResult<()> {
        Ok(())
    }
}

/// Write `bytes` to `path`, creating parent directories as needed.
pub fn write_bytes(path: &Path, bytes: &[u8]) -> RevealResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write frame '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
