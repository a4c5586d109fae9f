//! Static image contract.
//!
//! Each local image is expected under `/images/` in the deployed site and is
//! paired with a remote placeholder shown when the local file fails to load.

#[cfg(test)]
#[path = "assets_test.rs"]
mod assets_test;

/// A local image path and the placeholder used when it fails to load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageAsset {
    pub path: &'static str,
    pub placeholder: &'static str,
}

pub const LOGO: ImageAsset = ImageAsset {
    path: "/images/Logo.jpg",
    placeholder: "https://source.unsplash.com/400x120/?lightning,bolt",
};

pub const HERO: ImageAsset = ImageAsset {
    path: "/images/hero.jpg",
    placeholder: "https://source.unsplash.com/1200x800/?warehouse,logistics",
};

pub const AHU: ImageAsset = ImageAsset {
    path: "/images/ahu.jpg",
    placeholder: "https://source.unsplash.com/1200x800/?filter,hvac",
};

pub const LIGHTS: ImageAsset = ImageAsset {
    path: "/images/lights.jpg",
    placeholder: "https://source.unsplash.com/1200x800/?emergency,light",
};

pub const GAUGES: ImageAsset = ImageAsset {
    path: "/images/gauges.jpg",
    placeholder: "https://source.unsplash.com/1200x800/?temperature,gauge",
};

pub const BARO: ImageAsset = ImageAsset {
    path: "/images/baro.jpg",
    placeholder: "https://source.unsplash.com/1200x800/?barometer,weather",
};

pub const OTHER_LIGHTS: ImageAsset = ImageAsset {
    path: "/images/other_lights.jpg",
    placeholder: "https://source.unsplash.com/1200x800/?led,lighting",
};

/// Every image the site references, in the order the host checks them.
pub const IMAGE_ASSETS: &[ImageAsset] = &[LOGO, HERO, AHU, LIGHTS, GAUGES, BARO, OTHER_LIGHTS];

/// URL prefix under which the local images are served.
pub const IMAGE_DIR: &str = "/images";
