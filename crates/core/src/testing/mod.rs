//! Testing utilities and mock implementations.
//!
//! `MockConverter` stands in for the image codec so batch behavior can be
//! tested on plain files; `fixtures` writes small real images for tests that
//! go through the actual codecs.

mod mock_converter;

pub use mock_converter::{MockConverter, RecordedConversion, MOCK_PNG};

/// Test fixtures and helper functions.
pub mod fixtures {
    use image::{ImageBuffer, ImageFormat, Rgb, RgbImage};
    use std::path::{Path, PathBuf};

    /// Width of fixture images.
    pub const WIDTH: u32 = 16;
    /// Height of fixture images.
    pub const HEIGHT: u32 = 8;

    /// A small RGB gradient without an alpha channel.
    pub fn rgb_image() -> RgbImage {
        ImageBuffer::from_fn(WIDTH, HEIGHT, |x, y| {
            Rgb([(x * 16) as u8, (y * 32) as u8, 128])
        })
    }

    /// Writes the fixture image to `dir/name` in the given format.
    ///
    /// Panics if the file cannot be written.
    pub fn write_image(dir: &Path, name: &str, format: ImageFormat) -> PathBuf {
        let path = dir.join(name);
        rgb_image()
            .save_with_format(&path, format)
            .unwrap_or_else(|e| panic!("failed to write fixture {}: {}", path.display(), e));
        path
    }
}
