#![cfg(target_arch = "wasm32")]

use gloo::timers::future::TimeoutFuture;
use nileway_core::Lang;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{HtmlElement, HtmlFormElement};
use yew::Renderer;

use nileway_web::app::App;
use nileway_web::dom;

wasm_bindgen_test_configure!(run_in_browser);

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document();
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

fn render_app() {
    // Default language must be set to populate translated strings.
    nileway_web::i18n::set_lang("en");
    Renderer::<App>::with_root(ensure_app_root()).render();
}

#[wasm_bindgen_test]
fn language_switch_sets_document_attributes() {
    render_app();
    nileway_web::i18n::set_lang("ar");
    let html = dom::document().document_element().expect("html element");
    assert_eq!(html.get_attribute("lang").unwrap_or_default(), "ar");
    assert_eq!(html.get_attribute("dir").unwrap_or_default(), "rtl");
    let body = dom::document().body().expect("body");
    assert!(body.class_list().contains("font-cairo"));

    nileway_web::i18n::set_lang("en");
    assert_eq!(html.get_attribute("dir").unwrap_or_default(), "ltr");
    assert!(!body.class_list().contains("font-cairo"));
}

#[wasm_bindgen_test]
fn unsupported_language_code_changes_nothing() {
    render_app();
    nileway_web::i18n::set_lang("en");
    nileway_web::i18n::set_lang("xx");
    assert_eq!(nileway_web::i18n::current_lang(), Lang::En);
    let html = dom::document().document_element().expect("html element");
    assert_eq!(html.get_attribute("lang").unwrap_or_default(), "en");
}

#[wasm_bindgen_test]
fn language_choice_persists_to_local_storage() {
    render_app();
    nileway_web::i18n::set_lang("de");
    let stored = dom::window()
        .local_storage()
        .ok()
        .flatten()
        .and_then(|storage| storage.get_item("nileway.locale").ok().flatten());
    assert_eq!(stored.as_deref(), Some("de"));
    nileway_web::i18n::set_lang("en");
}

#[wasm_bindgen_test]
async fn blank_contact_submit_shows_error_toast() {
    render_app();
    TimeoutFuture::new(50).await;
    let form: HtmlFormElement = dom::document()
        .get_element_by_id("contactForm")
        .expect("contact form")
        .dyn_into()
        .expect("form element");
    form.request_submit().expect("submit");
    TimeoutFuture::new(50).await;
    let message = dom::document()
        .get_element_by_id("notification-message")
        .and_then(|el| el.text_content())
        .unwrap_or_default();
    assert_eq!(message, "Please fill all fields.");
}

#[wasm_bindgen_test]
async fn card_click_toggles_the_viewer() {
    render_app();
    TimeoutFuture::new(50).await;
    let doc = dom::document();
    let card: HtmlElement = doc
        .query_selector(".photo-card")
        .expect("query cards")
        .expect("at least one card")
        .dyn_into()
        .expect("card element");
    card.click();
    TimeoutFuture::new(50).await;

    let overlay = doc
        .get_element_by_id("gallery-overlay")
        .expect("gallery overlay");
    assert!(overlay.class_list().contains("active"));
    let card = doc
        .query_selector(".photo-card.is-active")
        .expect("query active card")
        .expect("one card is active");
    let style = card.get_attribute("style").unwrap_or_default();
    assert!(style.contains("translate("));
    assert!(style.contains("rotate(0deg)"));

    let overlay: HtmlElement = overlay.dyn_into().expect("overlay element");
    overlay.click();
    TimeoutFuture::new(50).await;
    assert!(!overlay.class_list().contains("active"));
    // The active class clears only after the reverse transition window.
    TimeoutFuture::new(700).await;
    assert!(
        doc.query_selector(".photo-card.is-active")
            .expect("query active card")
            .is_none()
    );
}
