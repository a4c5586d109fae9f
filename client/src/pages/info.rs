//! Generic renderer for the static informational pages.

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};

use crate::config::SUPPORT_EMAIL;
use crate::content::pages::{Block, InfoPage};

/// Title, intro paragraphs, then headed sections. Pages without sections
/// (About) are centered.
#[component]
pub fn InfoPageView(page: &'static InfoPage) -> impl IntoView {
    let class = if page.sections.is_empty() {
        "max-w-3xl mx-auto px-6 md:px-8 py-16 text-center"
    } else {
        "max-w-3xl mx-auto px-6 md:px-8 py-16"
    };

    view! {
        <section class=class>
            <h2 class="text-3xl font-extrabold mb-4 text-center">{page.title}</h2>
            {page.intro.iter().map(|p| view! { <p class="mb-4">{*p}</p> }).collect_view()}
            {page
                .sections
                .iter()
                .map(|section| {
                    view! {
                        <h3 class="font-bold mt-5 mb-2">{section.heading}</h3>
                        {section.blocks.iter().map(render_block).collect_view()}
                    }
                })
                .collect_view()}
        </section>
    }
}

fn render_block(block: &Block) -> AnyView {
    match *block {
        Block::Text(text) => view! { <p>{text}</p> }.into_any(),
        Block::Bullets(items) => {
            view! { <ul class="list-disc pl-5">{items.iter().map(|i| view! { <li>{*i}</li> }).collect_view()}</ul> }
                .into_any()
        }
        Block::Email { before, after } => view! {
            <p>
                {before}
                <a class="text-blue-600 underline" href=format!("mailto:{SUPPORT_EMAIL}")>
                    {SUPPORT_EMAIL}
                </a>
                {after}
            </p>
        }
        .into_any(),
    }
}
