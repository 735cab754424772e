//! Image decoding and load bookkeeping for the painting textures.

use crate::constants::MAX_TEXTURE_DIM;
use image::imageops::FilterType;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not decode {filename}: {source}")]
    Decode {
        filename: String,
        #[source]
        source: image::ImageError,
    },
    #[error("{filename} has no pixels")]
    EmptyImage { filename: String },
}

/// Tightly packed RGBA8 pixels, top row first.
///
/// `width`/`height` describe the pixel buffer, which is downscaled to fit a
/// texture; `source_width`/`source_height` keep the decoded file's dimensions so
/// the display aspect ratio is exact.
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub source_width: u32,
    pub source_height: u32,
    pub rgba: Vec<u8>,
}

pub fn decode_image(filename: &str, bytes: &[u8]) -> Result<DecodedImage, LoadError> {
    let img = image::load_from_memory(bytes).map_err(|source| LoadError::Decode {
        filename: filename.to_string(),
        source,
    })?;
    let (source_width, source_height) = (img.width(), img.height());
    if source_width == 0 || source_height == 0 {
        return Err(LoadError::EmptyImage {
            filename: filename.to_string(),
        });
    }
    let img = if source_width > MAX_TEXTURE_DIM || source_height > MAX_TEXTURE_DIM {
        log::info!(
            "[load] downscaling {} from {}x{}",
            filename,
            source_width,
            source_height
        );
        img.resize(MAX_TEXTURE_DIM, MAX_TEXTURE_DIM, FilterType::Triangle)
    } else {
        img
    };
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(DecodedImage {
        width,
        height,
        source_width,
        source_height,
        rgba: rgba.into_raw(),
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    Failed,
}

/// Counts settled loads; reports settlement exactly once.
#[derive(Debug)]
pub struct LoadTracker {
    expected: usize,
    loaded: usize,
    failed: usize,
    settled: bool,
}

impl LoadTracker {
    pub fn new(expected: usize) -> Self {
        Self {
            expected,
            loaded: 0,
            failed: 0,
            settled: expected == 0,
        }
    }

    /// Record one outcome. Returns `true` only for the call that settles the batch.
    pub fn record(&mut self, outcome: LoadOutcome) -> bool {
        if self.settled {
            return false;
        }
        match outcome {
            LoadOutcome::Loaded => self.loaded += 1,
            LoadOutcome::Failed => self.failed += 1,
        }
        if self.loaded + self.failed >= self.expected {
            self.settled = true;
            return true;
        }
        false
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }

    pub fn loaded(&self) -> usize {
        self.loaded
    }

    pub fn failed(&self) -> usize {
        self.failed
    }
}
