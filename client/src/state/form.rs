//! Lead-capture form controller.
//!
//! DESIGN
//! ======
//! One controller serves both the quote and contact forms; the difference is
//! data (`FormKind` picks the field list, labels, and messages). Transitions
//! are plain methods so the submit lifecycle is testable without a DOM.
//!
//! LIFECYCLE
//! =========
//! `Idle -> Sending -> Sent | Error`, and back to `Sending` on the next
//! submit. A second submit while `Sending` is refused. Field values survive
//! every transition.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::config::SUPPORT_EMAIL;
use crate::net::gateway::{Delivery, DeliveryError};
use crate::net::types::{FieldValues, TemplatePayload};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    Quote,
    Contact,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    TextArea,
}

/// Static description of one form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub placeholder: &'static str,
    pub input: InputKind,
    pub required: bool,
}

const fn field(name: &'static str, placeholder: &'static str, input: InputKind, required: bool) -> FieldSpec {
    FieldSpec { name, placeholder, input, required }
}

const QUOTE_FIELDS: &[FieldSpec] = &[
    field("name", "Your name", InputKind::Text, true),
    field("email", "Email", InputKind::Email, true),
    field("company", "Company (optional)", InputKind::Text, false),
    field("product", "Product name / number", InputKind::Text, false),
    field("details", "Specifications, quantities, delivery address...", InputKind::TextArea, false),
];

const CONTACT_FIELDS: &[FieldSpec] = &[
    field("name", "Your name", InputKind::Text, true),
    field("email", "Email", InputKind::Email, true),
    field("message", "How can we help?", InputKind::TextArea, true),
];

impl FormKind {
    pub fn fields(self) -> &'static [FieldSpec] {
        match self {
            Self::Quote => QUOTE_FIELDS,
            Self::Contact => CONTACT_FIELDS,
        }
    }

    /// Value of the `form_type` template parameter.
    pub fn form_type(self) -> &'static str {
        match self {
            Self::Quote => "quote",
            Self::Contact => "contact",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Self::Quote => "Request a Quote",
            Self::Contact => "Contact Us",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Quote => "Send Request",
            Self::Contact => "Send Message",
        }
    }

    pub fn sent_message(self) -> &'static str {
        match self {
            Self::Quote => "Thanks! We got your request.",
            Self::Contact => "Thanks! We\u{2019}ll reply by email soon.",
        }
    }

    pub fn error_message(self) -> String {
        match self {
            Self::Quote => format!("Something went wrong. Please email us at {SUPPORT_EMAIL}."),
            Self::Contact => format!("Could not send. Please email us at {SUPPORT_EMAIL}."),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormState {
    pub kind: FormKind,
    pub values: FieldValues,
    pub status: SubmitStatus,
}

impl FormState {
    pub fn new(kind: FormKind) -> Self {
        let values = FieldValues::with_names(kind.fields().iter().map(|f| f.name));
        Self { kind, values, status: SubmitStatus::Idle }
    }

    /// Quote form, optionally seeded with a product name from the route query.
    pub fn quote(initial_product: Option<String>) -> Self {
        let mut state = Self::new(FormKind::Quote);
        if let Some(product) = initial_product {
            state.values.set("product", product);
        }
        state
    }

    pub fn contact() -> Self {
        Self::new(FormKind::Contact)
    }

    /// Update one field. Names outside the form's field list are ignored.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        if self.kind.fields().iter().any(|f| f.name == name) {
            self.values.set(name, value);
        } else {
            log::warn!("ignoring unknown {} field {name}", self.kind.form_type());
        }
    }

    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).unwrap_or_default()
    }

    pub fn is_sending(&self) -> bool {
        self.status == SubmitStatus::Sending
    }

    /// Enter `Sending`. Returns `false` (and changes nothing) when a
    /// submission is already in flight.
    pub fn begin_submit(&mut self) -> bool {
        if self.is_sending() {
            return false;
        }
        self.status = SubmitStatus::Sending;
        true
    }

    /// Record the submission outcome.
    pub fn finish(&mut self, result: &Result<Delivery, DeliveryError>) {
        self.status = match result {
            Ok(_) => SubmitStatus::Sent,
            Err(_) => SubmitStatus::Error,
        };
    }

    pub fn template_payload(&self) -> TemplatePayload {
        TemplatePayload::new(&self.values, self.kind.form_type())
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_sending() { "Sending..." } else { self.kind.submit_label() }
    }

    /// Status line under the form, if any.
    pub fn status_message(&self) -> Option<String> {
        match self.status {
            SubmitStatus::Idle | SubmitStatus::Sending => None,
            SubmitStatus::Sent => Some(self.kind.sent_message().to_owned()),
            SubmitStatus::Error => Some(self.kind.error_message()),
        }
    }
}
