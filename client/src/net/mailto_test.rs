use super::*;

#[test]
fn mailto_href_encodes_subject_and_body() {
    let mut fields = FieldValues::with_names(["name", "email", "message"]);
    fields.set("name", "Ada Lovelace");
    fields.set("email", "ada@example.com");
    fields.set("message", "Need 20 F7 bags & 4 H13");

    let href = mailto_href("flashfyonlinestore@gmail.com", "Flashfy request", &fields);
    assert_eq!(
        href,
        "mailto:flashfyonlinestore@gmail.com?subject=Flashfy%20request\
         &body=name%3A%20Ada%20Lovelace%0Aemail%3A%20ada%40example.com%0Amessage%3A%20Need%2020%20F7%20bags%20%26%204%20H13"
    );
}

#[test]
fn mailto_href_with_no_fields_has_empty_body() {
    let href = mailto_href("a@b.c", "Hi", &FieldValues::new());
    assert_eq!(href, "mailto:a@b.c?subject=Hi&body=");
}

#[test]
fn mailto_body_never_contains_raw_separators() {
    let mut fields = FieldValues::new();
    fields.set("details", "a&b=c\nd?e#f");
    let href = mailto_href("a@b.c", "s", &fields);
    let body = href.split_once("&body=").map_or("", |(_, b)| b);
    assert!(!body.contains('&'));
    assert!(!body.contains('\n'));
    assert!(!body.contains('#'));
}
