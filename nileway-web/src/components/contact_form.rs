use crate::dom::{input_value, textarea_value};
use crate::i18n::t;
use gloo::timers::future::TimeoutFuture;
use nileway_core::Lang;
use nileway_core::links::{REDIRECT_DELAY_MS, contact_link};
use nileway_core::toast::Severity;
use nileway_core::validation::{ContactMessage, ValidationError};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlFormElement, SubmitEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub lang: Lang,
    pub on_notify: Callback<(String, Severity)>,
}

/// The contact form never posts anywhere; a valid submission opens a
/// pre-filled WhatsApp conversation in a new tab after a short delay, then
/// resets the fields.
#[function_component(ContactForm)]
pub fn contact_form(p: &Props) -> Html {
    let form_ref = use_node_ref();
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let message_ref = use_node_ref();

    let onsubmit = {
        let notify = p.on_notify.clone();
        let form_ref = form_ref.clone();
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let message_ref = message_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let msg = ContactMessage::trimmed(
                &input_value(&name_ref),
                &input_value(&email_ref),
                &textarea_value(&message_ref),
            );
            match msg.validate() {
                Err(ValidationError::MissingField) => {
                    notify.emit((t("toast.fill_fields"), Severity::Error));
                }
                Err(ValidationError::InvalidEmail) => {
                    notify.emit((t("toast.invalid_email"), Severity::Error));
                }
                Ok(()) => {
                    notify.emit((t("toast.redirecting"), Severity::Success));
                    let url = contact_link(&msg);
                    let form_ref = form_ref.clone();
                    spawn_local(async move {
                        TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                        crate::dom::open_in_new_tab(&url);
                        if let Some(form) = form_ref.cast::<HtmlFormElement>() {
                            form.reset();
                        }
                    });
                }
            }
        })
    };

    html! {
        <form id="contactForm" ref={form_ref} onsubmit={onsubmit}>
            <input
                id="UserName"
                ref={name_ref}
                type="text"
                name="name"
                placeholder={t("contact.name_placeholder")} />
            <input
                id="UserEmail"
                ref={email_ref}
                type="text"
                name="email"
                placeholder={t("contact.email_placeholder")} />
            <textarea
                id="message"
                ref={message_ref}
                name="message"
                placeholder={t("contact.message_placeholder")}>
            </textarea>
            <button type="submit">{ t("contact.send") }</button>
        </form>
    }
}
