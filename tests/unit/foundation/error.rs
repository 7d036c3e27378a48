use super::*;
use crate::document::path::{BindError, DocPath};

#[test]
fn display_prefixes_are_stable() {
    assert!(
        PuppeteerError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert!(
        PuppeteerError::from(CompileError::new(3, "boom"))
            .to_string()
            .contains("compile error:")
    );
    assert!(
        PuppeteerError::from(BindError::missing(&DocPath::root().field("mass")))
            .to_string()
            .contains("structure error: $.mass")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = PuppeteerError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_become_serde() {
    let err: PuppeteerError = serde_json::from_str::<serde_json::Value>("{")
        .unwrap_err()
        .into();
    assert!(matches!(err, PuppeteerError::Serde(_)));
}
