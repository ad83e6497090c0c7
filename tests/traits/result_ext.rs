use std::io;

use error_coder::traits::ResultExt;
use error_coder::{Error, NodeKind};

#[test]
fn wrap_err_on_err() {
    let result: Result<(), &str> = Err("original");
    let err = result.wrap_err("context added").unwrap_err();

    assert_eq!(err.to_string(), "context added");
    assert_eq!(err.cause().to_string(), "original");
    assert_eq!(err.kind(), NodeKind::WithStack);
}

#[test]
fn wrap_err_on_ok() {
    let result: Result<i32, &str> = Ok(42);
    assert_eq!(result.wrap_err("should not appear").unwrap(), 42);
}

#[test]
fn wrap_err_with_is_lazy_on_ok() {
    let mut called = false;
    let result: Result<(), Error> = Ok(());

    let _ = result.wrap_err_with(|| {
        called = true;
        "should not be called"
    });
    assert!(!called, "Closure for wrap_err_with should not be called on Ok result");
}

#[test]
fn wrap_err_with_evaluates_on_err() {
    let result: Result<(), Error> = Err(Error::new("base"));

    let err = result.wrap_err_with(|| format!("user {}", 7)).unwrap_err();
    assert_eq!(err.to_string(), "user 7");
}

#[test]
fn with_stack_and_with_message_on_err() {
    let result: Result<(), Error> = Err(Error::with_code(4, "coded"));
    let stacked = result.with_stack().unwrap_err();
    assert_eq!(stacked.code(), Some(4));
    assert_eq!(stacked.to_string(), "coded");

    let result: Result<(), Error> = Err(Error::new("plain"));
    let annotated = result.with_message("note").unwrap_err();
    assert_eq!(annotated.kind(), NodeKind::WithMessage);
    assert!(annotated.stack().is_none());
}

#[test]
fn wrap_code_on_foreign_error() {
    let result: Result<String, io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "gone"));
    let err = result.wrap_code(150_001, "settings unavailable").unwrap_err();

    assert_eq!(err.code(), Some(150_001));
    assert_eq!(err.cause().kind(), NodeKind::Foreign);
    assert_eq!(err.to_string(), "settings unavailable");
}

#[test]
fn chaining_across_layers() {
    fn repository() -> Result<(), Error> {
        Err(Error::new("row missing"))
    }

    fn service() -> Result<(), Error> {
        repository().wrap_code(404, "user not found")
    }

    fn handler() -> Result<(), Error> {
        service().wrap_err("GET /users/9")
    }

    let err = handler().unwrap_err();
    assert_eq!(err.code(), Some(404));
    assert_eq!(err.to_string(), "GET /users/9");
    assert_eq!(err.cause().to_string(), "row missing");
    assert_eq!(err.codes().as_slice(), &[404, 404]);
}

#[test]
fn methods_record_caller_location() {
    let result: Result<(), &str> = Err("x");
    let err = result.wrap_err("y").unwrap_err();

    assert_eq!(err.stack().map(|s| s.line()), Some(line!() - 2));
    assert!(err.stack().is_some_and(|s| s.file().ends_with("result_ext.rs")));
}
