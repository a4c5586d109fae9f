//! Shared body of the quote and contact forms.
//!
//! LIFECYCLE
//! =========
//! Submit moves the form to `Sending` and spawns one delivery task. The task
//! writes the outcome back only if the form is still mounted; a result that
//! arrives after navigation away is logged and dropped.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};

use crate::config::DeliveryConfig;
use crate::net::gateway::BrowserGateway;
use crate::state::form::{FieldSpec, FormState, InputKind, SubmitStatus};

const INPUT_CLASS: &str = "border rounded px-3 py-2";
const TEXTAREA_CLASS: &str = "border rounded px-3 py-2 min-h-[140px]";

#[component]
pub fn LeadForm(initial: FormState, #[prop(optional)] children: Option<Children>) -> impl IntoView {
    let kind = initial.kind;
    let form = RwSignal::new(initial);
    let delivery = expect_context::<DeliveryConfig>();

    let alive = Arc::new(AtomicBool::new(true));
    {
        let alive = alive.clone();
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !form.try_update(FormState::begin_submit).unwrap_or(false) {
            return;
        }
        let (fields, payload) = form.with_untracked(|f| (f.values.clone(), f.template_payload()));
        let gateway = BrowserGateway::for_browser(delivery.clone());
        let alive = alive.clone();

        leptos::task::spawn_local(async move {
            let result = gateway.submit(&fields, &payload).await;
            if let Err(err) = &result {
                log::error!("{} submission failed: {err}", kind.form_type());
            }
            if !alive.load(Ordering::Relaxed) {
                log::debug!("{} form unmounted; dropping submission result", kind.form_type());
                return;
            }
            form.update(|f| f.finish(&result));
        });
    };

    let status_line = move || {
        form.with(|f| {
            let class = match f.status {
                SubmitStatus::Sent => "text-green-700 mt-3 text-center",
                _ => "text-red-700 mt-3 text-center",
            };
            f.status_message().map(|msg| view! { <p class=class>{msg}</p> })
        })
    };

    view! {
        <h2 class="text-3xl font-extrabold mb-4 text-center">{kind.heading()}</h2>
        <form class="grid gap-3 bg-white border border-slate-200 rounded-xl p-4" on:submit=on_submit>
            {kind.fields().iter().map(|spec| field_input(*spec, form)).collect_view()}
            <div class="flex items-center justify-between gap-3">
                {children.map(|c| c())}
                <button
                    class="px-4 py-3 rounded bg-blue-600 text-white font-semibold ml-auto"
                    type="submit"
                    disabled=move || form.with(FormState::is_sending)
                >
                    {move || form.with(FormState::submit_label)}
                </button>
            </div>
        </form>
        {status_line}
    }
}

fn field_input(spec: FieldSpec, form: RwSignal<FormState>) -> AnyView {
    let name = spec.name;
    let value = move || form.with(|f| f.value(name).to_owned());
    let on_input = move |ev: leptos::ev::Event| form.update(|f| f.set(name, event_target_value(&ev)));

    match spec.input {
        InputKind::TextArea => view! {
            <textarea
                class=TEXTAREA_CLASS
                name=name
                placeholder=spec.placeholder
                required=spec.required
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any(),
        InputKind::Text | InputKind::Email => view! {
            <input
                class=INPUT_CLASS
                type=input_type(spec.input)
                name=name
                placeholder=spec.placeholder
                required=spec.required
                prop:value=value
                on:input=on_input
            />
        }
        .into_any(),
    }
}

fn input_type(input: InputKind) -> &'static str {
    match input {
        InputKind::Email => "email",
        InputKind::Text | InputKind::TextArea => "text",
    }
}
