//! Site header: clickable logo and primary navigation.

use leptos::prelude::*;

use crate::components::safe_img::SafeImg;
use crate::content::assets::LOGO;
use crate::content::site::{BRAND, HEADER_LINKS};

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="bg-slate-800 text-white px-6 py-4 shadow flex items-center justify-between">
            <a href="#/" class="flex items-center gap-3 group" aria-label="Flashfy Home">
                <SafeImg asset=LOGO alt="Flashfy logo" class="h-10 w-auto object-contain"/>
                <span class="text-3xl md:text-4xl font-extrabold tracking-tight group-hover:opacity-90">{BRAND}</span>
            </a>
            <nav class="flex gap-4 text-sm md:text-base">
                {HEADER_LINKS
                    .iter()
                    .map(|nav| view! { <a href=nav.href class="hover:underline">{nav.label}</a> })
                    .collect_view()}
            </nav>
        </header>
    }
}
