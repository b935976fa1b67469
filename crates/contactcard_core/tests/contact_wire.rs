use contactcard_core::{ContactRecord, ContactValidationError};

fn sample() -> ContactRecord {
    let mut contact = ContactRecord::new("Alex", "Lexov", "Addr").expect("valid contact");
    contact.surname = Some("B".to_string());
    contact.image_ref = Some("http://x/img.png".to_string());
    contact.is_favorite = true;
    contact.phone = Some("123".to_string());
    contact.email = Some("e@x.com".to_string());
    contact
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let json = serde_json::to_value(sample()).unwrap();
    assert_eq!(json["name"], "Alex");
    assert_eq!(json["surname"], "B");
    assert_eq!(json["family_name"], "Lexov");
    assert_eq!(json["image_ref"], "http://x/img.png");
    assert_eq!(json["is_favorite"], true);
    assert_eq!(json["phone"], "123");
    assert_eq!(json["address"], "Addr");
    assert_eq!(json["email"], "e@x.com");
}

#[test]
fn round_trip_preserves_value_equality() {
    let contact = sample();
    let json = serde_json::to_value(&contact).unwrap();
    let decoded: ContactRecord = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, contact);
}

#[test]
fn deserialize_defaults_absent_optional_fields() {
    let value = serde_json::json!({
        "name": "Alex",
        "family_name": "Lexov",
        "address": "Addr"
    });

    let decoded: ContactRecord = serde_json::from_value(value).unwrap();
    assert_eq!(decoded.surname, None);
    assert_eq!(decoded.image_ref, None);
    assert!(!decoded.is_favorite);
    assert_eq!(decoded.phone, None);
    assert_eq!(decoded.email, None);
}

#[test]
fn deserialize_rejects_empty_required_fields() {
    let value = serde_json::json!({
        "name": "  ",
        "family_name": "Lexov",
        "address": "Addr"
    });

    let err = serde_json::from_value::<ContactRecord>(value).unwrap_err();
    assert!(
        err.to_string()
            .contains(ContactValidationError::EmptyName.to_string().as_str()),
        "unexpected error: {err}"
    );
}
