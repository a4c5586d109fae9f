//! Product detail page for one catalog entry.

#[cfg(test)]
#[path = "product_test.rs"]
mod product_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::safe_img::SafeImg;
use crate::content::catalog::{self, ContentEntry};
use crate::router::location::quote_href;

/// Renders the catalog entry for `id`, or a not-found message when the id
/// is unknown (including the empty id from `#/product/`).
#[component]
pub fn ProductPage(id: String) -> impl IntoView {
    match catalog::lookup(&id) {
        Some(entry) => view! { <ProductDetail entry=entry/> }.into_any(),
        None => {
            log::debug!("unknown product id {id:?}");
            view! {
                <div class="max-w-5xl mx-auto px-6 md:px-8 py-10">
                    <h2 class="text-2xl font-bold">"Product not found"</h2>
                </div>
            }
            .into_any()
        }
    }
}

/// One piece of product copy, in page order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetailItem {
    Title(&'static str),
    Bullet(&'static str),
    Paragraph(&'static str),
}

/// Title, then bullets, then description paragraphs; each string once.
pub fn detail_items(entry: &ContentEntry) -> Vec<DetailItem> {
    std::iter::once(DetailItem::Title(entry.title))
        .chain(entry.bullets.iter().copied().map(DetailItem::Bullet))
        .chain(entry.details.iter().copied().map(DetailItem::Paragraph))
        .collect()
}

#[component]
fn ProductDetail(entry: &'static ContentEntry) -> impl IntoView {
    let items = detail_items(entry);
    let title = items.iter().find_map(|item| match item {
        DetailItem::Title(t) => Some(view! { <h1 class="text-3xl font-extrabold mb-2">{*t}</h1> }),
        _ => None,
    });
    let bullets = items
        .iter()
        .filter_map(|item| match item {
            DetailItem::Bullet(b) => Some(view! { <li>{*b}</li> }),
            _ => None,
        })
        .collect_view();
    let paragraphs = items
        .iter()
        .filter_map(|item| match item {
            DetailItem::Paragraph(p) => Some(view! { <p class="text-slate-700 mb-3">{*p}</p> }),
            _ => None,
        })
        .collect_view();
    view! {
        <section class="max-w-6xl mx-auto px-6 md:px-8 py-12 flex flex-col md:flex-row gap-10 items-start">
            <SafeImg asset=entry.image alt=entry.title class="rounded-xl shadow w-full md:w-1/2"/>
            <div class="flex-1">
                {title}
                <ul class="list-disc pl-5 text-slate-700 mb-4">{bullets}</ul>
                {paragraphs}
                <a
                    href=quote_href(entry.title)
                    class="inline-block mt-2 px-4 py-3 rounded-md bg-blue-600 text-white font-semibold"
                >
                    "Request a Quote"
                </a>
            </div>
        </section>
    }
}
