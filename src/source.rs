//! Input classification and image decoding.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use image::ImageFormat;

use crate::ascii::PixelGrid;
use crate::error::{Result, ViewError};

/// Image extensions that are decoded in-process.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

/// Video extensions that are handed to the frame extractor.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "avi", "mkv", "webm"];

/// What kind of input a path names, decided from its extension alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// A still image in the given container format
    Image(ImageFormat),
    /// A video file, demuxed by ffmpeg
    Video,
}

impl MediaKind {
    /// Classify a path by its (case-insensitive) extension.
    ///
    /// Never touches the filesystem, so an unsupported extension is rejected
    /// before any open or decode attempt.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "jpg" | "jpeg" => Ok(MediaKind::Image(ImageFormat::Jpeg)),
            "png" => Ok(MediaKind::Image(ImageFormat::Png)),
            "webp" => Ok(MediaKind::Image(ImageFormat::WebP)),
            e if VIDEO_EXTENSIONS.contains(&e) => Ok(MediaKind::Video),
            _ => Err(ViewError::UnsupportedFormat {
                extension: if ext.is_empty() {
                    String::new()
                } else {
                    format!(".{}", ext)
                },
            }),
        }
    }

    pub fn is_video(&self) -> bool {
        matches!(self, MediaKind::Video)
    }
}

/// Open and decode an image file.
///
/// The decoder is chosen from the extension, not from content sniffing.
///
/// # Errors
/// - `UnsupportedFormat` for unknown extensions and for video files
/// - `SourceUnavailable` if the file cannot be opened
/// - `Decode` if the bytes are not a valid image of that format
pub fn open_image(path: &Path) -> Result<PixelGrid> {
    let format = match MediaKind::from_path(path)? {
        MediaKind::Image(format) => format,
        MediaKind::Video => {
            return Err(ViewError::UnsupportedFormat {
                extension: path
                    .extension()
                    .map(|e| format!(".{}", e.to_string_lossy()))
                    .unwrap_or_default(),
            })
        }
    };

    let file = File::open(path).map_err(|e| ViewError::SourceUnavailable {
        path: path.to_path_buf(),
        source: e,
    })?;

    let img = image::load(BufReader::new(file), format)?;
    log::debug!(
        "Decoded {} ({}x{}, {:?})",
        path.display(),
        img.width(),
        img.height(),
        format
    );
    PixelGrid::try_from(img)
}

/// Decode one JPEG frame extracted from a video stream.
pub fn decode_frame(bytes: &[u8]) -> Result<PixelGrid> {
    let img = image::load_from_memory_with_format(bytes, ImageFormat::Jpeg)?;
    PixelGrid::try_from(img)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_all_listed_extensions_classify() {
        for ext in IMAGE_EXTENSIONS {
            let path = PathBuf::from(format!("x.{}", ext));
            assert!(!MediaKind::from_path(&path).unwrap().is_video(), "{}", ext);
        }
        for ext in VIDEO_EXTENSIONS {
            let path = PathBuf::from(format!("x.{}", ext));
            assert!(MediaKind::from_path(&path).unwrap().is_video(), "{}", ext);
        }
    }

    #[test]
    fn test_classify_images() {
        assert_eq!(
            MediaKind::from_path(Path::new("cat.jpg")).unwrap(),
            MediaKind::Image(ImageFormat::Jpeg)
        );
        assert_eq!(
            MediaKind::from_path(Path::new("cat.JPEG")).unwrap(),
            MediaKind::Image(ImageFormat::Jpeg)
        );
        assert_eq!(
            MediaKind::from_path(Path::new("/a/b/cat.png")).unwrap(),
            MediaKind::Image(ImageFormat::Png)
        );
        assert_eq!(
            MediaKind::from_path(Path::new("cat.WebP")).unwrap(),
            MediaKind::Image(ImageFormat::WebP)
        );
    }

    #[test]
    fn test_classify_videos() {
        for name in ["a.mp4", "a.MOV", "a.avi", "a.mkv", "a.webm"] {
            assert!(MediaKind::from_path(Path::new(name)).unwrap().is_video(), "{}", name);
        }
    }

    #[test]
    fn test_classify_unsupported() {
        match MediaKind::from_path(Path::new("picture.bmp")) {
            Err(ViewError::UnsupportedFormat { extension }) => assert_eq!(extension, ".bmp"),
            other => panic!("Expected UnsupportedFormat, got {:?}", other),
        }
        assert!(matches!(
            MediaKind::from_path(Path::new("README")),
            Err(ViewError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_open_image_missing_file() {
        let path = PathBuf::from("/definitely/not/here.png");
        assert!(matches!(
            open_image(&path),
            Err(ViewError::SourceUnavailable { .. })
        ));
    }

    #[test]
    fn test_open_image_rejects_video() {
        assert!(matches!(
            open_image(Path::new("clip.mp4")),
            Err(ViewError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_decode_frame_garbage() {
        assert!(matches!(
            decode_frame(&[0xFF, 0xD8, 0x00, 0xFF, 0xD9]),
            Err(ViewError::Decode(_))
        ));
    }

    #[test]
    fn test_decode_frame_valid_jpeg() {
        let img = image::RgbImage::from_pixel(8, 4, image::Rgb([200, 200, 200]));
        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut std::io::Cursor::new(&mut bytes), ImageFormat::Jpeg)
            .unwrap();
        let grid = decode_frame(&bytes).unwrap();
        assert_eq!((grid.width(), grid.height()), (8, 4));
    }
}
