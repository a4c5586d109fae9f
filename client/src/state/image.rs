//! Image source with a one-shot remote fallback.

#[cfg(test)]
#[path = "image_test.rs"]
mod image_test;

use crate::content::assets::ImageAsset;

/// Which source the image currently shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImageSource {
    #[default]
    Primary,
    Fallback,
}

/// Local image path plus the remote placeholder used when it fails to load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageFallback {
    pub primary: String,
    pub placeholder: String,
    pub state: ImageSource,
}

impl ImageFallback {
    pub fn new(primary: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self { primary: primary.into(), placeholder: placeholder.into(), state: ImageSource::Primary }
    }

    pub fn from_asset(asset: &ImageAsset) -> Self {
        Self::new(asset.path, asset.placeholder)
    }

    /// Source to render right now.
    pub fn current(&self) -> &str {
        match self.state {
            ImageSource::Primary => &self.primary,
            ImageSource::Fallback => &self.placeholder,
        }
    }

    /// Handle a load error. Switches to the placeholder at most once, and
    /// never when the failing source already is the placeholder.
    ///
    /// Returns whether the rendered source changed.
    pub fn on_error(&mut self) -> bool {
        if self.state == ImageSource::Fallback || self.current() == self.placeholder {
            return false;
        }
        self.state = ImageSource::Fallback;
        true
    }
}
