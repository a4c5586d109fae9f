//! Site footer: link columns and copyright.

use leptos::prelude::*;

use crate::content::site::{BRAND, FOOTER_COLUMNS, copyright_line};
use crate::util::browser;

#[component]
pub fn Footer() -> impl IntoView {
    let copyright = copyright_line(browser::current_year());

    view! {
        <footer class="bg-slate-800 text-white px-8 py-10 grid gap-8 md:grid-cols-4">
            {FOOTER_COLUMNS
                .iter()
                .map(|column| {
                    view! {
                        <div>
                            <h4 class="font-bold mb-2">{column.heading}</h4>
                            {column
                                .links
                                .iter()
                                .map(|nav| {
                                    view! {
                                        <a href=nav.href class="block text-slate-200 hover:underline">
                                            {nav.label}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })
                .collect_view()}
            <div>
                <h4 class="font-bold mb-2">{BRAND}</h4>
                <p>{copyright}</p>
            </div>
        </footer>
    }
}
