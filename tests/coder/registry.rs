use std::sync::Arc;
use std::thread;

use error_coder::{
    lookup, register, CodeRegistry, Coder, DefaultCoder, Error, RegistryError, UNKNOWN_CODE,
};

#[derive(Debug)]
struct QuotaCoder;

impl Coder for QuotaCoder {
    fn code(&self) -> i32 {
        120_001
    }

    fn http_status(&self) -> u16 {
        429
    }

    fn message(&self) -> &str {
        "Too many requests"
    }

    fn reference(&self) -> &str {
        "https://docs.example.com/quota"
    }
}

#[test]
fn lookup_falls_back_to_unknown_coder() {
    let registry = CodeRegistry::new();

    let coder = registry.lookup(404_404);
    assert_eq!(coder.code(), UNKNOWN_CODE);
    assert_eq!(coder.http_status(), 500);
    assert!(registry.get(404_404).is_none());
}

#[test]
fn register_overwrites_existing_entry() {
    let registry = CodeRegistry::new();

    registry.register(DefaultCoder::new(11, 400, "first", ""));
    registry.register(DefaultCoder::new(11, 422, "second", ""));

    let coder = registry.lookup(11);
    assert_eq!(coder.message(), "second");
    assert_eq!(coder.http_status(), 422);
    assert_eq!(registry.codes(), vec![11]);
}

#[test]
#[should_panic(expected = "code `0` is reserved by the unknown coder")]
fn register_rejects_reserved_code() {
    CodeRegistry::new().register(DefaultCoder::new(0, 400, "shadow", ""));
}

#[test]
#[should_panic(expected = "code `0` is reserved by the unknown coder")]
fn must_register_rejects_reserved_code() {
    CodeRegistry::new().must_register(DefaultCoder::new(0, 400, "shadow", ""));
}

#[test]
#[should_panic(expected = "code: 12 already exists")]
fn must_register_rejects_duplicate_code() {
    let registry = CodeRegistry::new();
    registry.must_register(DefaultCoder::new(12, 400, "first", ""));
    registry.must_register(DefaultCoder::new(12, 400, "second", ""));
}

#[test]
fn try_forms_report_invalid_registrations() {
    let registry = CodeRegistry::new();

    assert_eq!(
        registry.try_register(DefaultCoder::new(0, 400, "shadow", "")).err(),
        Some(RegistryError::ReservedCode)
    );

    assert_eq!(registry.try_must_register(DefaultCoder::new(13, 400, "first", "")), Ok(()));
    assert_eq!(
        registry.try_must_register(DefaultCoder::new(13, 400, "second", "")),
        Err(RegistryError::DuplicateCode(13))
    );

    // The first registration survives a rejected duplicate.
    assert_eq!(registry.lookup(13).message(), "first");
    assert_eq!(registry.lookup(UNKNOWN_CODE).http_status(), 500);
}

#[test]
fn custom_coder_implementations_can_be_registered() {
    let registry = CodeRegistry::new();
    registry.must_register(QuotaCoder);

    let err = Error::with_code(120_001, "tenant 7 exceeded 100 req/s");
    let coder = registry.parse_coder(&err);

    assert_eq!(coder.http_status(), 429);
    assert_eq!(coder.message(), "Too many requests");
    assert_eq!(coder.reference(), "https://docs.example.com/quota");
}

#[test]
fn parse_coder_consults_outermost_node_only() {
    let registry = CodeRegistry::new();
    registry.register(DefaultCoder::new(21, 503, "Service unavailable", ""));

    let coded = Error::with_code(21, "upstream down");
    assert_eq!(registry.parse_coder(&coded).code(), 21);

    let stacked = coded.with_stack();
    assert_eq!(registry.parse_coder(&stacked).code(), 21);

    let annotated = coded.with_message("while syncing");
    assert_eq!(registry.parse_coder(&annotated).code(), UNKNOWN_CODE);

    let plain = Error::new("plain");
    assert_eq!(registry.parse_coder(&plain).code(), UNKNOWN_CODE);
}

#[test]
fn global_registry_resolves_after_registration() {
    let err = Error::with_code(7, "x");
    assert_eq!(err.parse_coder().code(), UNKNOWN_CODE);
    assert_eq!(err.parse_coder().http_status(), 500);

    register(DefaultCoder::new(7, 418, "I'm a teapot", ""));

    let coder = err.parse_coder();
    assert_eq!(coder.code(), 7);
    assert_eq!(coder.http_status(), 418);
    assert_eq!(lookup(7).message(), "I'm a teapot");
}

#[test]
fn global_returns_the_same_instance() {
    assert!(std::ptr::eq(CodeRegistry::global(), CodeRegistry::global()));
}

#[test]
fn concurrent_registration_and_lookup() {
    let registry = Arc::new(CodeRegistry::new());

    let writers: Vec<_> = (1..=8)
        .map(|worker| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                for i in 0..50 {
                    let code = worker * 1_000 + i;
                    registry.must_register(DefaultCoder::new(code, 400, "bulk", ""));
                    assert_eq!(registry.lookup(code).code(), code);
                }
            })
        })
        .collect();

    for writer in writers {
        writer.join().unwrap();
    }

    assert_eq!(registry.len(), 8 * 50);
    assert_eq!(registry.codes().first(), Some(&1_000));
    assert_eq!(registry.codes().last(), Some(&8_049));
}
