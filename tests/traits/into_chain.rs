use std::error::Error as StdError;
use std::io;

use error_coder::traits::IntoChain;
use error_coder::{Error, NodeKind};

#[test]
fn error_converts_to_itself() {
    let err = Error::new("same");
    let converted = err.clone().into_chain();

    assert!(converted.ptr_eq(&err));
}

#[test]
fn strings_become_fundamental_roots() {
    let from_str = "socket closed".into_chain();
    let from_string = String::from("pipe broken").into_chain();

    assert_eq!(from_str.kind(), NodeKind::Fundamental);
    assert_eq!(from_string.to_string(), "pipe broken");
    assert!(from_str.stack().is_some());
}

#[test]
fn foreign_errors_become_foreign_roots() {
    let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied").into_chain();
    let line = line!() - 1;
    assert_eq!(io_err.kind(), NodeKind::Foreign);
    assert_eq!(io_err.stack().map(|s| (s.file(), s.line())), Some((file!(), line)));
    assert!(io_err.downcast_ref::<io::Error>().is_some());

    let fmt_err = std::fmt::Error.into_chain();
    assert_eq!(fmt_err.kind(), NodeKind::Foreign);

    let boxed: Box<dyn StdError + Send + Sync> = "boxed message".into();
    let boxed_err = boxed.into_chain();
    assert_eq!(boxed_err.kind(), NodeKind::Foreign);
    assert_eq!(boxed_err.to_string(), "boxed message");
}
