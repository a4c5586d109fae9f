//! "Why Choose Flashfy?" strip shown on Home and Categories.

use leptos::prelude::*;

use crate::content::site::{TRUST_HEADING, TRUST_ITEMS};

#[component]
pub fn TrustBar() -> impl IntoView {
    view! {
        <section class="px-6 md:px-8 pb-12">
            <div class="bg-white border border-slate-200 rounded-2xl p-6 md:p-8 shadow-sm">
                <h3 class="text-2xl font-bold mb-4 text-center">{TRUST_HEADING}</h3>
                <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-4">
                    {TRUST_ITEMS
                        .iter()
                        .map(|item| {
                            view! {
                                <div class="p-4 rounded-xl bg-slate-50 border border-slate-200">
                                    <h4 class="font-semibold">{item.title}</h4>
                                    <p class="text-slate-600 text-sm mt-1">{item.desc}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
