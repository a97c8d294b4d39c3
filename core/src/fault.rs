//! Failure normalization for caller-supplied callbacks.
//!
//! Listeners and compensations may fail by returning an error or by
//! panicking. Both are reduced to a plain message so every failure path
//! reports the same shape.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// Boxed error returned by caller-supplied callbacks.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Describe a panic payload.
pub fn describe_panic(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("panicked: {s}")
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("panicked: {s}")
    } else {
        "panicked with a non-string payload".to_string()
    }
}

/// Run a fallible callback inside a fault boundary.
///
/// Returns `Err(message)` if the callback returned an error or panicked.
pub fn run_guarded<F>(f: F) -> Result<(), String>
where
    F: FnOnce() -> Result<(), BoxError>,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => Err(e.to_string()),
        Err(payload) => Err(describe_panic(payload.as_ref())),
    }
}
