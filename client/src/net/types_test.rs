use super::*;

fn quote_fields() -> FieldValues {
    let mut fields = FieldValues::with_names(["name", "email", "company", "product", "details"]);
    fields.set("name", "Ada");
    fields.set("email", "ada@example.com");
    fields.set("product", "AHU Filters");
    fields
}

// =============================================================
// FieldValues
// =============================================================

#[test]
fn with_names_starts_empty_in_order() {
    let fields = FieldValues::with_names(["b", "a"]);
    let names: Vec<&str> = fields.iter().map(|(k, _)| k).collect();
    assert_eq!(names, ["b", "a"]);
    assert!(fields.iter().all(|(_, v)| v.is_empty()));
}

#[test]
fn set_updates_only_the_named_field() {
    let mut fields = FieldValues::with_names(["name", "email"]);
    fields.set("email", "x@y.z");
    assert_eq!(fields.get("email"), Some("x@y.z"));
    assert_eq!(fields.get("name"), Some(""));
    assert_eq!(fields.len(), 2);
}

#[test]
fn set_unknown_name_appends() {
    let mut fields = FieldValues::new();
    assert!(fields.is_empty());
    fields.set("extra", "1");
    assert_eq!(fields.get("extra"), Some("1"));
    assert_eq!(fields.get("missing"), None);
}

#[test]
fn to_lines_joins_key_value_pairs() {
    assert_eq!(
        quote_fields().to_lines(),
        "name: Ada\nemail: ada@example.com\ncompany: \nproduct: AHU Filters\ndetails: "
    );
    assert_eq!(FieldValues::new().to_lines(), "");
}

#[test]
fn field_values_serialize_as_ordered_object() {
    let json = serde_json::to_string(&quote_fields()).unwrap_or_default();
    assert_eq!(
        json,
        r#"{"name":"Ada","email":"ada@example.com","company":"","product":"AHU Filters","details":""}"#
    );
}

// =============================================================
// TemplatePayload
// =============================================================

#[test]
fn template_payload_appends_form_type() {
    let payload = TemplatePayload::new(&quote_fields(), "quote");
    assert_eq!(payload.params().get("form_type"), Some("quote"));
    assert_eq!(payload.params().get("name"), Some("Ada"));
    let json = serde_json::to_value(&payload).unwrap_or_default();
    assert_eq!(json["form_type"], "quote");
    assert_eq!(json["product"], "AHU Filters");
}

#[test]
fn template_payload_leaves_source_fields_untouched() {
    let fields = quote_fields();
    let _payload = TemplatePayload::new(&fields, "quote");
    assert_eq!(fields.get("form_type"), None);
}
