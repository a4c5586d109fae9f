//! Category cards linking to product pages and the quote form.

use leptos::prelude::*;

use crate::app::Navigator;
use crate::components::safe_img::SafeImg;
use crate::content::catalog::{CATALOG, ContentEntry};
use crate::router::location::quote_href;

#[component]
pub fn CategoryGrid() -> impl IntoView {
    view! {
        <section class="px-6 md:px-8 py-10">
            <h3 class="text-2xl font-bold mb-6">"Categories"</h3>
            <div class="grid gap-5 sm:grid-cols-2 lg:grid-cols-4">
                {CATALOG.iter().map(|entry| view! { <CategoryCard entry=entry/> }).collect_view()}
            </div>
        </section>
    }
}

/// One card. The whole card navigates to the product page on click or
/// Enter; the inner actions stop propagation so they don't double-navigate.
#[component]
fn CategoryCard(entry: &'static ContentEntry) -> impl IntoView {
    let navigator = expect_context::<Navigator>();
    let product_path = format!("/product/{}", entry.id);

    let open_card = {
        let path = product_path.clone();
        move |_| navigator.go(path.clone())
    };
    let on_keydown = {
        let path = product_path.clone();
        move |ev: leptos::ev::KeyboardEvent| {
            if ev.key() == "Enter" {
                navigator.go(path.clone());
            }
        }
    };
    let on_view = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        navigator.go(product_path.clone());
    };

    view! {
        <div
            class="border border-slate-200 rounded-xl p-4 bg-white flex flex-col hover:-translate-y-0.5 hover:shadow transition min-h-[380px] cursor-pointer"
            role="button"
            tabindex="0"
            on:click=open_card
            on:keydown=on_keydown
        >
            <SafeImg asset=entry.image alt=entry.name class="w-full h-44 object-cover rounded mb-3"/>
            <h4 class="font-semibold">{entry.name}</h4>
            <p class="text-slate-600 text-sm mt-1 flex-1">{entry.summary}</p>
            <div class="flex gap-2 mt-3">
                <button class="px-3 py-2 rounded-md bg-blue-600 text-white font-semibold" on:click=on_view>
                    "View"
                </button>
                <a
                    href=quote_href(entry.name)
                    class="px-3 py-2 rounded-md border border-blue-600 text-blue-600 font-semibold bg-white text-center"
                    on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()
                >
                    "Quote Now"
                </a>
            </div>
        </div>
    }
}
