use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="max-w-3xl mx-auto px-6 md:px-8 py-12">
            <h2 class="text-2xl font-bold">"404"</h2>
            <p>"Page not found."</p>
        </section>
    }
}
