use super::*;
use crate::router::Location;

fn sent() -> Result<Delivery, DeliveryError> {
    Ok(Delivery::Remote)
}

fn failed() -> Result<Delivery, DeliveryError> {
    Err(DeliveryError::Network("offline".to_owned()))
}

// =============================================================
// Field specs
// =============================================================

#[test]
fn quote_fields_in_declared_order() {
    let names: Vec<&str> = FormKind::Quote.fields().iter().map(|f| f.name).collect();
    assert_eq!(names, ["name", "email", "company", "product", "details"]);
    let required: Vec<&str> = FormKind::Quote.fields().iter().filter(|f| f.required).map(|f| f.name).collect();
    assert_eq!(required, ["name", "email"]);
}

#[test]
fn contact_fields_all_required() {
    let fields = FormKind::Contact.fields();
    assert_eq!(fields.len(), 3);
    assert!(fields.iter().all(|f| f.required));
    assert_eq!(fields[1].input, InputKind::Email);
    assert_eq!(fields[2].input, InputKind::TextArea);
}

#[test]
fn new_form_is_idle_and_empty() {
    let form = FormState::contact();
    assert_eq!(form.status, SubmitStatus::Idle);
    assert!(form.values.iter().all(|(_, v)| v.is_empty()));
    assert_eq!(form.status_message(), None);
}

// =============================================================
// Editing
// =============================================================

#[test]
fn set_updates_one_field_only() {
    let mut form = FormState::quote(None);
    form.set("company", "Acme");
    assert_eq!(form.value("company"), "Acme");
    assert_eq!(form.value("name"), "");
    assert_eq!(form.value("details"), "");
}

#[test]
fn set_ignores_unknown_field() {
    let mut form = FormState::contact();
    form.set("company", "Acme");
    assert_eq!(form.values.get("company"), None);
    assert_eq!(form.values.len(), 3);
}

#[test]
fn quote_seeds_product_from_route_query() {
    let location = Location::parse("#/quote?product=AHU%20Filters");
    let form = FormState::quote(location.param("product"));
    assert_eq!(form.value("product"), "AHU Filters");
}

#[test]
fn quote_without_query_has_empty_product() {
    let form = FormState::quote(Location::parse("#/quote").param("product"));
    assert_eq!(form.value("product"), "");
}

// =============================================================
// Submit lifecycle
// =============================================================

#[test]
fn begin_submit_refused_while_sending() {
    let mut form = FormState::contact();
    assert!(form.begin_submit());
    assert!(form.is_sending());
    assert!(!form.begin_submit());
    assert_eq!(form.status, SubmitStatus::Sending);
    assert_eq!(form.submit_label(), "Sending...");
}

#[test]
fn success_keeps_field_values() {
    let mut form = FormState::contact();
    form.set("name", "Ada");
    form.set("message", "Hi");
    assert!(form.begin_submit());
    form.finish(&sent());
    assert_eq!(form.status, SubmitStatus::Sent);
    assert_eq!(form.value("name"), "Ada");
    assert_eq!(form.value("message"), "Hi");
    assert_eq!(form.status_message().as_deref(), Some("Thanks! We\u{2019}ll reply by email soon."));
}

#[test]
fn fallback_delivery_counts_as_sent() {
    let mut form = FormState::quote(None);
    assert!(form.begin_submit());
    form.finish(&Ok(Delivery::MailtoFallback { href: "mailto:x".to_owned() }));
    assert_eq!(form.status, SubmitStatus::Sent);
    assert_eq!(form.status_message().as_deref(), Some("Thanks! We got your request."));
}

#[test]
fn failure_shows_support_address() {
    let mut form = FormState::quote(None);
    assert!(form.begin_submit());
    form.finish(&failed());
    assert_eq!(form.status, SubmitStatus::Error);
    assert_eq!(
        form.status_message().as_deref(),
        Some("Something went wrong. Please email us at flashfyonlinestore@gmail.com.")
    );
}

#[test]
fn resubmit_allowed_after_outcome() {
    let mut form = FormState::contact();
    assert!(form.begin_submit());
    form.finish(&failed());
    assert!(form.begin_submit());
    assert_eq!(form.submit_label(), "Sending...");
    form.finish(&sent());
    assert_eq!(form.submit_label(), "Send Message");
}

#[test]
fn template_payload_tags_form_type() {
    let mut form = FormState::quote(Some("Barometers".to_owned()));
    form.set("name", "Ada");
    let payload = form.template_payload();
    assert_eq!(payload.params().get("form_type"), Some("quote"));
    assert_eq!(payload.params().get("product"), Some("Barometers"));
    assert_eq!(FormState::contact().template_payload().params().get("form_type"), Some("contact"));
}
