//! Landing page: hero, category grid, trust bar.

use leptos::prelude::*;

use crate::components::{category_grid::CategoryGrid, safe_img::SafeImg, trust_bar::TrustBar};
use crate::content::assets::HERO;
use crate::content::site::{HERO_HEADING, HERO_TAGLINE};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="flex flex-col md:flex-row items-center justify-between gap-8 px-6 md:px-8 py-16 bg-gradient-to-br from-slate-100 to-slate-200">
            <div class="max-w-xl">
                <h2 class="text-4xl font-extrabold mb-3">{HERO_HEADING}</h2>
                <p class="text-slate-600 mb-5">{HERO_TAGLINE}</p>
                <div class="flex gap-3 flex-wrap">
                    <a href="#/quote" class="px-4 py-3 rounded-md bg-blue-600 text-white font-semibold">
                        "Request a Quote"
                    </a>
                    <a
                        href="#/categories"
                        class="px-4 py-3 rounded-md border border-blue-600 text-blue-600 font-semibold bg-white"
                    >
                        "Browse Categories"
                    </a>
                </div>
            </div>
            <SafeImg asset=HERO alt="Warehouse logistics" class="rounded-xl shadow max-w-xl w-full"/>
        </section>
        <CategoryGrid/>
        <TrustBar/>
    }
}
