//! Log and change-event callbacks.
//!
//! The library does not depend on a logging framework. Hosts that want
//! diagnostics register a log callback; hosts that bind a masked field to a
//! model register an event callback and receive [`MaskEvent`]s.

use std::sync::{Mutex, OnceLock};

/// Log level for debug callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Notification emitted by [`InputHandler`](crate::InputHandler).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MaskEvent<'a> {
    /// The raw text changed as the result of user input.
    ValueChanged {
        raw: &'a str,
        value: Option<f64>,
    },
    /// The field lost focus.
    Touched,
}

type EventCallback = Box<dyn Fn(&MaskEvent<'_>) + Send + Sync + 'static>;
type LogCallback = Box<dyn Fn(LogLevel, &str) + Send + Sync + 'static>;

fn event_callback() -> &'static Mutex<Option<EventCallback>> {
    static CALLBACK: OnceLock<Mutex<Option<EventCallback>>> = OnceLock::new();
    CALLBACK.get_or_init(|| Mutex::new(None))
}

fn log_callback() -> &'static Mutex<Option<LogCallback>> {
    static CALLBACK: OnceLock<Mutex<Option<LogCallback>>> = OnceLock::new();
    CALLBACK.get_or_init(|| Mutex::new(None))
}

/// Set the global event callback, replacing any previous one.
pub fn set_event_callback<F>(callback: F)
where
    F: Fn(&MaskEvent<'_>) + Send + Sync + 'static,
{
    if let Ok(mut guard) = event_callback().lock() {
        *guard = Some(Box::new(callback));
    }
}

/// Emit an event to the registered callback.
pub fn emit_event(event: &MaskEvent<'_>) {
    if let Ok(guard) = event_callback().lock() {
        if let Some(callback) = guard.as_ref() {
            callback(event);
        }
    }
}

/// Set the global log callback, replacing any previous one.
pub fn set_log_callback<F>(callback: F)
where
    F: Fn(LogLevel, &str) + Send + Sync + 'static,
{
    if let Ok(mut guard) = log_callback().lock() {
        *guard = Some(Box::new(callback));
    }
}

/// Whether a log callback is installed.
///
/// Check this before building an expensive message.
#[must_use]
pub fn log_enabled() -> bool {
    log_callback().lock().is_ok_and(|guard| guard.is_some())
}

/// Emit a log message.
pub fn emit_log(level: LogLevel, message: &str) {
    if let Ok(guard) = log_callback().lock() {
        if let Some(callback) = guard.as_ref() {
            callback(level, message);
        }
    }
}

/// Remove both callbacks.
pub fn clear_callbacks() {
    if let Ok(mut guard) = event_callback().lock() {
        *guard = None;
    }
    if let Ok(mut guard) = log_callback().lock() {
        *guard = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    // Callbacks are process-wide and other tests emit concurrently, so these
    // tests only look for their own marker.

    #[test]
    fn test_event_callback() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        set_event_callback(move |event| {
            if let MaskEvent::ValueChanged { raw, value } = event {
                sink.lock().unwrap().push(((*raw).to_string(), *value));
            }
        });
        emit_event(&MaskEvent::ValueChanged {
            raw: "event-marker",
            value: Some(1.5),
        });
        assert!(
            seen.lock()
                .unwrap()
                .iter()
                .any(|(raw, value)| raw == "event-marker" && *value == Some(1.5))
        );
    }

    #[test]
    fn test_log_callback() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        set_log_callback(move |level, msg| {
            sink.lock().unwrap().push((level, msg.to_string()));
        });
        assert!(log_enabled());
        emit_log(LogLevel::Info, "log-marker");
        assert!(
            seen.lock()
                .unwrap()
                .iter()
                .any(|(level, msg)| *level == LogLevel::Info && msg == "log-marker")
        );
    }

    #[test]
    fn test_log_levels_order() {
        assert!(LogLevel::Debug < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
    }
}
