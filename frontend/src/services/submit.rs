use shared::RegistrationValues;

/// Hands an accepted registration off to the outside world. No transport
/// exists here; accepted values are serialized and written to the browser
/// console.
pub fn deliver(values: &RegistrationValues) {
    match serde_json::to_string(values) {
        Ok(payload) => gloo::console::log!("Form is valid, submitting:", payload),
        Err(e) => gloo::console::error!("Failed to serialize registration:", e.to_string()),
    }
}
