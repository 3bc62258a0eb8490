use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ScrollreelError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        ScrollreelError::resolution("x")
            .to_string()
            .contains("resolution error:")
    );
    assert!(
        ScrollreelError::lifecycle("x")
            .to_string()
            .contains("lifecycle error:")
    );
    assert!(
        ScrollreelError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(
        ScrollreelError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("host went away");
    let err = ScrollreelError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("host went away"));
}

#[test]
fn json_errors_map_to_serde_variant() {
    let err: ScrollreelError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, ScrollreelError::Serde(_)));
}
