use error_coder::{Coder, DefaultCoder, UNKNOWN_CODE, UNKNOWN_CODER};

mod registry;

#[test]
fn default_coder_exposes_metadata() {
    let coder = DefaultCoder::new(
        100_101,
        404,
        "User not found",
        "https://docs.example.com/errors#100101",
    );

    assert_eq!(coder.code(), 100_101);
    assert_eq!(coder.http_status(), 404);
    assert_eq!(coder.message(), "User not found");
    assert_eq!(coder.reference(), "https://docs.example.com/errors#100101");
    assert_eq!(coder.to_string(), "User not found");
}

#[test]
fn default_coder_accepts_owned_strings() {
    let user = "alice";
    let coder = DefaultCoder::new(9, 401, format!("{user} must sign in"), String::new());

    assert_eq!(coder.message(), "alice must sign in");
    assert_eq!(coder.reference(), "");
}

#[test]
fn unknown_coder_is_internal_server_error() {
    assert_eq!(UNKNOWN_CODER.code(), UNKNOWN_CODE);
    assert_eq!(UNKNOWN_CODER.http_status(), 500);
    assert_eq!(UNKNOWN_CODER.message(), "An internal server error occurred");
    assert!(UNKNOWN_CODER.reference().ends_with("README.md"));
}

#[cfg(feature = "serde")]
#[test]
fn default_coder_serializes_metadata() {
    let coder = DefaultCoder::new(100_102, 409, "Already exists", "https://docs.example.com");

    let json = serde_json::to_value(&coder).unwrap();
    assert_eq!(json["code"], 100_102);
    assert_eq!(json["http_status"], 409);
    assert_eq!(json["message"], "Already exists");

    let back: DefaultCoder = serde_json::from_value(json).unwrap();
    assert_eq!(back, coder);
}
