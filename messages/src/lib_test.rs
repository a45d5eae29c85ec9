use super::*;

// =============================================================
// Codec
// =============================================================

#[test]
fn decode_valid_frame() {
    let message = decode_message(r#"{"sender":"cascade","text":"hi"}"#).expect("frame should decode");
    assert_eq!(message.sender, "cascade");
    assert_eq!(message.text, "hi");
}

#[test]
fn decode_tolerates_extra_fields() {
    let message = decode_message(r#"{"sender":"cascade","text":"hi","ts":12}"#).expect("frame should decode");
    assert_eq!(message.sender, "cascade");
    assert_eq!(message.text, "hi");
}

#[test]
fn decode_rejects_invalid_json() {
    assert!(matches!(decode_message("not json"), Err(CodecError::Decode(_))));
}

#[test]
fn decode_rejects_missing_text_field() {
    assert!(decode_message(r#"{"sender":"cascade"}"#).is_err());
}

#[test]
fn decode_rejects_non_string_fields() {
    assert!(decode_message(r#"{"sender":"cascade","text":5}"#).is_err());
}

#[test]
fn decode_rejects_non_object_payload() {
    assert!(decode_message(r#""just a string""#).is_err());
}

#[test]
fn encode_produces_two_field_object() {
    let message = Message { sender: "human".into(), text: "hello".into() };
    assert_eq!(encode_message(&message), r#"{"sender":"human","text":"hello"}"#);
}

#[test]
fn encode_decode_preserves_unicode_text() {
    let message = Message { sender: "cascade".into(), text: "héllo → wörld".into() };
    let restored = decode_message(&encode_message(&message)).expect("frame should decode");
    assert_eq!(restored, message);
}

// =============================================================
// Sender classification
// =============================================================

#[test]
fn classify_known_senders() {
    assert_eq!(SenderKind::classify("human"), SenderKind::Human);
    assert_eq!(SenderKind::classify("cascade"), SenderKind::Cascade);
    assert_eq!(SenderKind::classify("roo-code"), SenderKind::RooCode);
}

#[test]
fn classify_is_case_insensitive() {
    assert_eq!(SenderKind::classify("Human"), SenderKind::Human);
    assert_eq!(SenderKind::classify("CASCADE"), SenderKind::Cascade);
    assert_eq!(SenderKind::classify("Roo-Code"), SenderKind::RooCode);
}

#[test]
fn unknown_sender_classifies_as_generic_agent() {
    assert_eq!(SenderKind::classify("other-bot"), SenderKind::Agent);
    assert_eq!(SenderKind::classify(""), SenderKind::Agent);
}

#[test]
fn style_classes_are_distinct_per_kind() {
    let classes = [
        SenderKind::Human.style_class(),
        SenderKind::Cascade.style_class(),
        SenderKind::RooCode.style_class(),
        SenderKind::Agent.style_class(),
    ];
    for (i, a) in classes.iter().enumerate() {
        for (j, b) in classes.iter().enumerate() {
            if i != j {
                assert_ne!(a, b);
            }
        }
    }
}

// =============================================================
// Display labels
// =============================================================

#[test]
fn display_label_replaces_human_with_friendly_string() {
    assert_eq!(display_label("human"), "You");
    assert_eq!(display_label("Human"), "You");
}

#[test]
fn display_label_shows_raw_label_for_everyone_else() {
    assert_eq!(display_label("cascade"), "cascade");
    assert_eq!(display_label("Roo-Code"), "Roo-Code");
    assert_eq!(display_label("other-bot"), "other-bot");
}

#[test]
fn from_human_stamps_fixed_sender() {
    let message = Message::from_human("hello");
    assert_eq!(message.sender, HUMAN_SENDER);
    assert_eq!(message.sender_kind(), SenderKind::Human);
    assert_eq!(message.text, "hello");
}
