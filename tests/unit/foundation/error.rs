use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        BankLockerError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        BankLockerError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(
        BankLockerError::evaluation("x")
            .to_string()
            .contains("evaluation error:")
    );
    assert!(
        BankLockerError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        BankLockerError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = BankLockerError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
