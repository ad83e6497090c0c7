use error_coder::{CaptureMode, Error, Stack};

#[track_caller]
fn fail_here() -> Error {
    Error::new("from helper")
}

#[test]
fn location_mode_records_only_the_call_site() {
    let stack = Stack::capture_with(CaptureMode::Location);

    assert_eq!(stack.line(), line!() - 2);
    assert!(stack.file().ends_with("stack.rs"));
    assert!(stack.backtrace().is_none());
}

#[test]
fn capturing_constructors_record_caller_location() {
    let err = fail_here();
    let line = line!() - 1;

    assert_eq!(err.stack().map(Stack::line), Some(line));
    assert_eq!(err.wrap("outer").stack().map(Stack::line), Some(line!()));
}

#[test]
fn forced_backtrace_has_frames_when_supported() {
    let stack = Stack::capture_with(CaptureMode::Force);

    if let Some(bt) = stack.backtrace() {
        assert!(bt.to_string().lines().count() > 1);
        assert!(stack.to_string().starts_with("at "));
    }
}
