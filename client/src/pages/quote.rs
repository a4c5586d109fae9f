use leptos::prelude::*;

use crate::pages::lead_form::LeadForm;
use crate::router::Location;
use crate::state::form::FormState;

/// Quote request form. The `product` field is seeded once, at mount, from
/// the `product` query parameter.
#[component]
pub fn QuotePage() -> impl IntoView {
    let location = expect_context::<RwSignal<Location>>();
    let initial = FormState::quote(location.with_untracked(|loc| loc.param("product")));

    view! {
        <section class="max-w-3xl mx-auto px-6 md:px-8 py-12">
            <LeadForm initial=initial/>
        </section>
    }
}
