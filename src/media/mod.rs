// SPDX-License-Identifier: MPL-2.0
//! Image decoding for display.
//!
//! Images are decoded with the `image` crate, downscaled into the display
//! box with a Lanczos filter (never upscaled), and converted into an iced
//! image handle.

pub mod cache;

pub use cache::ImageCache;

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::imageops::FilterType;
use image_rs::{DynamicImage, GenericImageView, ImageReader};
use std::path::Path;

/// A decoded image ready to be rendered.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }
}

/// Decodes the image at `path` and fits it into `max` (width, height).
///
/// The format is sniffed from the file contents, so a PNG saved with a
/// `.jpg` extension still loads.
///
/// # Errors
///
/// Returns [`Error::ImageDecode`] if the file cannot be read or decoded.
pub fn load_display_image(path: &Path, max: (u32, u32)) -> Result<ImageData> {
    let decode_error = |reason: String| Error::ImageDecode {
        path: path.to_path_buf(),
        reason,
    };

    let img = ImageReader::open(path)
        .and_then(ImageReader::with_guessed_format)
        .map_err(|e| decode_error(e.to_string()))?
        .decode()
        .map_err(|e| decode_error(e.to_string()))?;

    let fitted = fit_within(img, max);
    let (width, height) = fitted.dimensions();
    Ok(ImageData::from_rgba(width, height, fitted.to_rgba8().into_raw()))
}

/// Shrinks `img` to fit inside `max`, keeping its aspect ratio.
fn fit_within(img: DynamicImage, (max_width, max_height): (u32, u32)) -> DynamicImage {
    if img.width() <= max_width && img.height() <= max_height {
        img
    } else {
        img.resize(max_width, max_height, FilterType::Lanczos3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn small_image_keeps_dimensions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("sample.png");
        RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 255]))
            .save(&image_path)
            .expect("failed to write temporary png");

        let data = load_display_image(&image_path, (800, 600)).expect("png should load");
        assert_eq!((data.width, data.height), (4, 2));
    }

    #[test]
    fn large_image_is_downscaled_keeping_aspect_ratio() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("wide.png");
        RgbaImage::from_pixel(400, 100, Rgba([0, 0, 255, 255]))
            .save(&image_path)
            .expect("failed to write temporary png");

        let data = load_display_image(&image_path, (200, 200)).expect("png should load");
        assert_eq!((data.width, data.height), (200, 50));
    }

    #[test]
    fn content_is_sniffed_regardless_of_extension() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let png_path = temp_dir.path().join("real.png");
        RgbaImage::from_pixel(3, 3, Rgba([0, 255, 0, 255]))
            .save(&png_path)
            .expect("failed to write temporary png");
        let disguised = temp_dir.path().join("disguised.jpg");
        fs::rename(&png_path, &disguised).expect("rename");

        let data = load_display_image(&disguised, (800, 600)).expect("sniffed png should load");
        assert_eq!(data.width, 3);
    }

    #[test]
    fn invalid_bytes_return_decode_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let bad_path = temp_dir.path().join("invalid.png");
        fs::write(&bad_path, b"not a png").expect("failed to write invalid data");

        match load_display_image(&bad_path, (800, 600)) {
            Err(Error::ImageDecode { path, reason }) => {
                assert_eq!(path, bad_path);
                assert!(!reason.is_empty());
            }
            other => panic!("expected ImageDecode error, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_returns_decode_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing = temp_dir.path().join("does_not_exist.png");

        assert!(matches!(
            load_display_image(&missing, (800, 600)),
            Err(Error::ImageDecode { .. })
        ));
    }
}
