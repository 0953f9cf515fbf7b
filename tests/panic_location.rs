#![expect(
    clippy::unwrap_used,
    reason = "test code uses unwrap for concise assertions"
)]

// Kept in its own test binary: the panic hook is process-wide.

use std::sync::{Arc, Mutex};

use validation_taxonomy::{PanicReporter, must_be_field_error};

#[derive(thiserror::Error, Debug)]
#[error("store unavailable")]
struct Unavailable;

#[test]
fn panic_reporter_points_at_the_calling_test() {
    let seen: Arc<Mutex<Option<(String, u32)>>> = Arc::new(Mutex::new(None));
    let hook_seen = Arc::clone(&seen);
    std::panic::set_hook(Box::new(move |info| {
        if let Some(location) = info.location() {
            *hook_seen.lock().unwrap() = Some((location.file().to_string(), location.line()));
        }
    }));

    let line = line!() + 2;
    let outcome = std::panic::catch_unwind(|| {
        must_be_field_error(&mut PanicReporter, Some(&Unavailable), "team");
    });
    drop(std::panic::take_hook());

    assert!(outcome.is_err());
    let (file, reported_line) = seen.lock().unwrap().clone().unwrap();
    assert_eq!(file, file!());
    assert_eq!(reported_line, line);
}
