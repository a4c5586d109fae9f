use leptos::prelude::*;

use crate::config::SUPPORT_EMAIL;
use crate::pages::lead_form::LeadForm;
use crate::state::form::FormState;

#[component]
pub fn ContactPage() -> impl IntoView {
    let initial = FormState::contact();

    view! {
        <section class="max-w-3xl mx-auto px-6 md:px-8 py-12">
            <LeadForm initial=initial>
                <span class="text-slate-600 text-sm">
                    "Or email us: "
                    <a class="text-blue-600 underline" href=format!("mailto:{SUPPORT_EMAIL}")>
                        {SUPPORT_EMAIL}
                    </a>
                </span>
            </LeadForm>
        </section>
    }
}
