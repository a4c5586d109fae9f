//! `<img>` that swaps to a remote placeholder when the local file fails.

use leptos::prelude::*;

use crate::content::assets::ImageAsset;
use crate::state::image::ImageFallback;

/// Image with a one-shot placeholder fallback.
#[component]
pub fn SafeImg(asset: ImageAsset, #[prop(into)] alt: String, #[prop(optional, into)] class: String) -> impl IntoView {
    let image = RwSignal::new(ImageFallback::from_asset(&asset));

    let on_error = move |_| {
        image.maybe_update(|img| {
            let changed = img.on_error();
            if changed {
                log::debug!("image {} failed; showing placeholder", img.primary);
            }
            changed
        });
    };

    view! {
        <img
            src=move || image.with(|img| img.current().to_owned())
            alt=alt
            class=class
            loading="lazy"
            on:error=on_error
        />
    }
}
