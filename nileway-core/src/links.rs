//! Deep links into the WhatsApp messaging service.
//!
//! The site never posts anywhere; "sending" a contact message means opening
//! a `wa.me` link with the message pre-filled.

use crate::validation::ContactMessage;

/// The agency's WhatsApp number, international format without `+`.
pub const WHATSAPP_NUMBER: &str = "201124943927";

/// Delay between the "redirecting" notification and actually opening the
/// link, so the user sees the notification before focus moves away.
pub const REDIRECT_DELAY_MS: u32 = 1500;

/// Deep link carrying an arbitrary pre-filled text.
#[must_use]
pub fn greeting_link(text: &str) -> String {
    format!(
        "https://wa.me/{WHATSAPP_NUMBER}?text={}",
        urlencoding::encode(text)
    )
}

/// Deep link carrying a contact-form submission, one labelled line per field.
#[must_use]
pub fn contact_link(msg: &ContactMessage) -> String {
    let text = format!(
        "Name: {}\nEmail: {}\nMessage: {}",
        msg.name, msg.email, msg.message
    );
    greeting_link(&text)
}
