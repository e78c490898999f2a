//! Window creation happens inside macroquad before our async main runs and
//! fails by panicking. Until the window is up, a panic is reported as
//! [`AppError::Window`] and the process exits with its status.

use std::any::Any;
use std::panic;
use std::process;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::error;

use crate::error::AppError;

static WINDOW_READY: AtomicBool = AtomicBool::new(false);

/// Install the panic hook. Call before the window is created,
/// i.e. from the `window_conf` function handed to `#[macroquad::main]`.
pub fn install_window_failure_hook() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        if WINDOW_READY.load(Ordering::Acquire) {
            default_hook(info);
            return;
        }
        let err = window_failure(info.payload());
        error!("{err}");
        process::exit(err.exit_code());
    }));
}

/// Panics from here on are ordinary panics again
pub fn mark_window_ready() {
    WINDOW_READY.store(true, Ordering::Release);
}

fn window_failure(payload: &(dyn Any + Send)) -> AppError {
    let message = payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown windowing error".to_string());
    AppError::Window(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_str_payload() {
        let payload: Box<dyn Any + Send> = Box::new("XOpenDisplay() failed!");
        let err = window_failure(&*payload);
        assert_eq!(err.to_string(), "could not create window: XOpenDisplay() failed!");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_formatted_payload() {
        let payload: Box<dyn Any + Send> = Box::new(format!("no GL context ({})", 3));
        let err = window_failure(&*payload);
        assert!(matches!(&err, AppError::Window(msg) if msg == "no GL context (3)"));
    }

    #[test]
    fn test_opaque_payload() {
        let payload: Box<dyn Any + Send> = Box::new(42_u32);
        let err = window_failure(&*payload);
        assert_eq!(err.to_string(), "could not create window: unknown windowing error");
    }

    #[test]
    fn test_payload_from_real_panic() {
        let result: std::thread::Result<()> =
            panic::catch_unwind(|| panic!("XOpenDisplay() failed!"));
        let payload = result.unwrap_err();
        assert!(matches!(
            window_failure(&*payload),
            AppError::Window(msg) if msg == "XOpenDisplay() failed!"
        ));
    }
}
