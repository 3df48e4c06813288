//! Blocking user notifications.

/// Show a blocking notification dialog with `message`.
///
/// Wraps `window.alert`; when the dialog cannot be shown the message falls
/// back to the diagnostic log.
#[cfg(feature = "csr")]
pub fn alert(message: &str) {
    let shown = web_sys::window()
        .map_or(false, |window| window.alert_with_message(message).is_ok());
    if !shown {
        log::warn!("notification could not be shown: {message}");
    }
}
