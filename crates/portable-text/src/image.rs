//! Asset reference resolution.
//!
//! Image asset references encode their metadata in the reference itself:
//! `image-{assetId}-{width}x{height}-{extension}`. Resolving one to a
//! download URL is pure string composition, no lookup required.

use std::fmt;

/// Fallback logical dimension when a block does not specify width/height.
pub const DEFAULT_IMAGE_DIMENSION: u32 = 500;

/// Output encoding requested from the asset CDN.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// Web-efficient default for rendered content.
    Webp,
    Jpg,
    Png,
}

impl ImageFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageFormat::Webp => "webp",
            ImageFormat::Jpg => "jpg",
            ImageFormat::Png => "png",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolves an asset reference to a retrievable URL.
///
/// Implementations must be idempotent and side-effect-free from the
/// caller's perspective; the renderer may call them any number of times.
pub trait AssetResolver {
    /// `None` when the reference cannot be resolved; the caller renders
    /// nothing in that case.
    fn image_url(&self, asset_ref: &str, format: ImageFormat) -> Option<String>;
}

/// Composes CDN download URLs from asset reference metadata.
#[derive(Debug, Clone)]
pub struct CdnAssetResolver {
    base_url: String,
    project_id: String,
    dataset: String,
}

impl CdnAssetResolver {
    pub fn new(project_id: &str, dataset: &str) -> Self {
        Self {
            base_url: "https://cdn.sanity.io".to_string(),
            project_id: project_id.to_string(),
            dataset: dataset.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }
}

impl AssetResolver for CdnAssetResolver {
    fn image_url(&self, asset_ref: &str, format: ImageFormat) -> Option<String> {
        let (id, dimensions, extension) = parse_image_ref(asset_ref)?;
        Some(format!(
            "{}/images/{}/{}/{}-{}.{}?fm={}",
            self.base_url, self.project_id, self.dataset, id, dimensions, extension, format
        ))
    }
}

/// Split `image-{id}-{w}x{h}-{ext}` into its parts. Returns `None` for
/// anything that does not match, so malformed references render nothing.
fn parse_image_ref(asset_ref: &str) -> Option<(&str, &str, &str)> {
    let rest = asset_ref.strip_prefix("image-")?;
    let (rest, extension) = rest.rsplit_once('-')?;
    let (id, dimensions) = rest.rsplit_once('-')?;
    if id.is_empty() || extension.is_empty() {
        return None;
    }
    let (w, h) = dimensions.split_once('x')?;
    if w.is_empty() || h.is_empty() || !w.bytes().chain(h.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((id, dimensions, extension))
}
