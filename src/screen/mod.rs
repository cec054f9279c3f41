use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use image::{imageops, DynamicImage, ImageError, RgbImage};
use thiserror::Error;

use crate::geometry::fit_within;
use crate::stats::StatSet;

mod layout;

pub use layout::ScreenLayout;

pub const DEFAULT_JPEG_QUALITY: u8 = 75;

#[derive(Debug, Error)]
pub enum ScreenError {
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },
    #[error("failed to decode image: {path}")]
    Decode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },
    #[error("failed to encode jpeg output")]
    Encode(#[source] ImageError),
    #[error("failed to write output: {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type ScreenResult<T> = std::result::Result<T, ScreenError>;

/// Background image the tier screen is composited onto.
#[derive(Debug, Clone)]
pub struct Template {
    image: RgbImage,
}

impl Template {
    pub fn open(path: &Path) -> ScreenResult<Self> {
        let image = load_image(path)?;
        tracing::debug!(
            path = %path.display(),
            width = image.width(),
            height = image.height(),
            "loaded template"
        );
        Ok(Self::from_image(image))
    }

    pub fn from_image(image: DynamicImage) -> Self {
        Self {
            image: image.into_rgb8(),
        }
    }
}

/// Composes a thumbnail and six stat bars onto a template.
#[derive(Debug, Clone)]
pub struct TierScreen {
    template: Template,
    layout: ScreenLayout,
}

impl TierScreen {
    pub fn new(template: Template) -> Self {
        Self::with_layout(template, ScreenLayout::default())
    }

    pub fn with_layout(template: Template, layout: ScreenLayout) -> Self {
        Self { template, layout }
    }

    /// Renders onto a copy of the template. The result always has the
    /// template's dimensions.
    pub fn compose(&self, thumbnail: &DynamicImage, stats: &StatSet) -> RgbImage {
        let mut canvas = self.template.image.clone();

        let fitted = self.fit_thumbnail(thumbnail);
        let origin = self.layout.thumbnail_origin;
        imageops::replace(
            &mut canvas,
            &fitted,
            i64::from(origin.x),
            i64::from(origin.y),
        );

        for out_of_range in stats.out_of_range() {
            tracing::warn!(
                stat = %out_of_range.0,
                value = out_of_range.1,
                "stat outside 0-100; bar will extend past the graph"
            );
        }
        for (stat, value) in stats.iter() {
            self.layout.bar_for(stat, value).draw(&mut canvas);
        }

        canvas
    }

    fn fit_thumbnail(&self, thumbnail: &DynamicImage) -> RgbImage {
        let rgb = thumbnail.to_rgb8();
        let (width, height) = fit_within(
            rgb.width(),
            rgb.height(),
            self.layout.thumbnail_max_width,
            self.layout.thumbnail_max_height,
        );
        tracing::debug!(
            source_width = rgb.width(),
            source_height = rgb.height(),
            width,
            height,
            "fitted thumbnail"
        );
        if (width, height) == rgb.dimensions() {
            return rgb;
        }
        imageops::resize(&rgb, width, height, imageops::FilterType::Lanczos3)
    }

    /// Loads `thumbnail_path`, composes and writes the JPEG to `output_path`.
    pub fn render(
        &self,
        thumbnail_path: &Path,
        stats: &StatSet,
        output_path: &Path,
        quality: u8,
    ) -> ScreenResult<()> {
        let thumbnail = load_image(thumbnail_path)?;
        let composed = self.compose(&thumbnail, stats);
        write_jpeg(&composed, output_path, quality)?;
        tracing::info!(output = %output_path.display(), "wrote tier screen");
        Ok(())
    }
}

pub fn load_image(path: &Path) -> ScreenResult<DynamicImage> {
    if !path.exists() {
        return Err(ScreenError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    image::open(path).map_err(|source| match source {
        ImageError::IoError(err) if err.kind() == io::ErrorKind::NotFound => {
            ScreenError::FileNotFound {
                path: path.to_path_buf(),
            }
        }
        source => ScreenError::Decode {
            path: path.to_path_buf(),
            source,
        },
    })
}

pub fn encode_jpeg(image: &RgbImage, quality: u8) -> ScreenResult<Vec<u8>> {
    let mut bytes = Vec::new();
    {
        let mut encoder = JpegEncoder::new_with_quality(&mut bytes, quality.clamp(1, 100));
        encoder.encode_image(image).map_err(ScreenError::Encode)?;
    }
    Ok(bytes)
}

/// Always writes JPEG, whatever the extension of `path`.
pub fn write_jpeg(image: &RgbImage, path: &Path, quality: u8) -> ScreenResult<()> {
    let bytes = encode_jpeg(image, quality)?;
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ScreenError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, bytes).map_err(|source| ScreenError::Io {
        path: path.to_path_buf(),
        source,
    })
}
