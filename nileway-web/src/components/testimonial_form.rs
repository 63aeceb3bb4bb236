use crate::dom::{input_value, textarea_value};
use crate::i18n::t;
use nileway_core::Lang;
use nileway_core::toast::Severity;
use nileway_core::validation::TestimonialEntry;
use web_sys::SubmitEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub lang: Lang,
    pub on_notify: Callback<(String, Severity)>,
}

/// Testimonials submit through whatever form action the page configures.
/// Validation only decides whether that default submission proceeds; the
/// thanks toast is optimistic and shows before any response.
#[function_component(TestimonialForm)]
pub fn testimonial_form(p: &Props) -> Html {
    let name_ref = use_node_ref();
    let country_ref = use_node_ref();
    let message_ref = use_node_ref();

    let onsubmit = {
        let notify = p.on_notify.clone();
        let name_ref = name_ref.clone();
        let country_ref = country_ref.clone();
        let message_ref = message_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            let entry = TestimonialEntry::trimmed(
                &input_value(&name_ref),
                &input_value(&country_ref),
                &textarea_value(&message_ref),
            );
            if entry.validate().is_err() {
                e.prevent_default();
                notify.emit((t("toast.fill_review_fields"), Severity::Error));
                return;
            }
            notify.emit((t("toast.review_submitted"), Severity::Success));
        })
    };

    html! {
        <form id="testimonialForm" onsubmit={onsubmit}>
            <input
                id="testimonialName"
                ref={name_ref}
                type="text"
                name="name"
                placeholder={t("review.name_placeholder")} />
            <input
                id="testimonialCountry"
                ref={country_ref}
                type="text"
                name="country"
                placeholder={t("review.country_placeholder")} />
            <textarea
                id="testimonialMessage"
                ref={message_ref}
                name="message"
                placeholder={t("review.message_placeholder")}>
            </textarea>
            <button type="submit">{ t("review.submit") }</button>
        </form>
    }
}
