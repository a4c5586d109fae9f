//! FAQ cards.

use leptos::prelude::*;

use crate::content::site::FAQS;

#[component]
pub fn FaqPage() -> impl IntoView {
    view! {
        <section class="max-w-5xl mx-auto px-6 md:px-8 py-12">
            <h2 class="text-3xl font-extrabold mb-6 text-center">"FAQs"</h2>
            <div class="grid gap-5 sm:grid-cols-2">
                {FAQS
                    .iter()
                    .map(|faq| {
                        view! {
                            <div class="border border-slate-200 rounded-xl p-5 bg-white">
                                <h3 class="font-semibold mb-2">{faq.q}</h3>
                                <p class="text-slate-700">{faq.a}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
