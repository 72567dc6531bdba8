//! Bundled assets.

use std::sync::Arc;

use crate::error::{AssetError, Result};

pub const SAMPLE_IMAGE_NAME: &str = "sample_image.png";
pub const SAMPLE_IMAGE: &[u8] = include_bytes!("../assets/sample_image.png");

/// An image that has been checked to decode, ready to hand to an `img` view.
#[derive(Clone, Debug)]
pub struct ImageAsset {
    bytes: Arc<[u8]>,
    width: u32,
    height: u32,
}

impl ImageAsset {
    pub fn resolve(name: &'static str, bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() {
            return Err(AssetError::Empty { name }.into());
        }
        let decoded = image::load_from_memory(bytes)
            .map_err(|source| AssetError::Decode { name, source })?;
        tracing::debug!(
            name,
            width = decoded.width(),
            height = decoded.height(),
            "resolved image asset"
        );
        Ok(Self {
            bytes: Arc::from(bytes),
            width: decoded.width(),
            height: decoded.height(),
        })
    }

    /// The image bundled with the application.
    pub fn sample() -> Result<Self> {
        Self::resolve(SAMPLE_IMAGE_NAME, SAMPLE_IMAGE)
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Intrinsic pixel size of the decoded image.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Everything the leaf widgets need from the host, resolved once at startup.
#[derive(Clone, Debug)]
pub struct Assets {
    pub image: ImageAsset,
}

impl Assets {
    pub fn bundled() -> Result<Self> {
        Ok(Self {
            image: ImageAsset::sample()?,
        })
    }
}
