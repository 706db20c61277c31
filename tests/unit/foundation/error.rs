use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        CuelineError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        CuelineError::invalid_segment("x")
            .to_string()
            .contains("invalid segment:")
    );
    assert!(
        CuelineError::degenerate_range("x")
            .to_string()
            .contains("degenerate range:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = CuelineError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
