use super::error::PatternError;
use image::imageops::{self, FilterType};
use image::RgbaImage;

/// Decoded RGBA8 pixels ready for upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextureImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl TextureImage {
    /// 1x1 fully transparent stand-in used when the remote image never arrives.
    pub fn blank() -> Self {
        Self {
            width: 1,
            height: 1,
            rgba: vec![0; 4],
        }
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, PatternError> {
        let img = image::load_from_memory(bytes)
            .map_err(|e| PatternError::TextureDecode(e.to_string()))?
            .to_rgba8();
        let (width, height) = img.dimensions();
        if width == 0 || height == 0 {
            return Err(PatternError::TextureDecode("empty image".into()));
        }
        Ok(Self {
            width,
            height,
            rgba: img.into_raw(),
        })
    }

    #[inline]
    pub fn bytes_per_row(&self) -> u32 {
        self.width * 4
    }

    /// Downscale so neither side exceeds `max_dimension`, keeping the aspect
    /// ratio. Falls back to [`TextureImage::blank`] if the pixels don't match
    /// the stated size.
    pub fn fit_within(self, max_dimension: u32) -> Self {
        let max = max_dimension.max(1);
        if self.width <= max && self.height <= max {
            return self;
        }
        let scale = max as f64 / self.width.max(self.height) as f64;
        let width = ((self.width as f64 * scale).round() as u32).clamp(1, max);
        let height = ((self.height as f64 * scale).round() as u32).clamp(1, max);
        let Some(img) = RgbaImage::from_raw(self.width, self.height, self.rgba) else {
            log::warn!("[texture] pixel buffer does not match its size, using blank");
            return Self::blank();
        };
        log::info!(
            "[texture] downscaling {}x{} to {}x{} (limit {})",
            self.width,
            self.height,
            width,
            height,
            max
        );
        let resized = imageops::resize(&img, width, height, FilterType::Triangle);
        Self {
            width,
            height,
            rgba: resized.into_raw(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.rgba.iter().all(|b| *b == 0)
    }
}
