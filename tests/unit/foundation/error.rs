use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        BlueprintError::parse(2, "div;opacity:1", ParseCause::MissingName)
            .to_string()
            .contains("parse error in element #2")
    );
    assert!(
        BlueprintError::conversion("x")
            .to_string()
            .contains("conversion error:")
    );
    assert!(
        BlueprintError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn parse_error_names_offending_string_and_cause() {
    let err = BlueprintError::parse(
        0,
        "div;opacity:1",
        ParseCause::MissingId {
            name: "div".to_owned(),
        },
    );
    let msg = err.to_string();
    assert!(msg.contains("'div;opacity:1'"));
    assert!(msg.contains("missing required 'id'"));
    assert_eq!(
        err.parse_cause(),
        Some(&ParseCause::MissingId {
            name: "div".to_owned()
        })
    );
    assert!(BlueprintError::conversion("x").parse_cause().is_none());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = BlueprintError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
