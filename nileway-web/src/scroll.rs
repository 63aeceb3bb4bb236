//! Window scroll reactor.
//!
//! A single scroll listener drives three visual states outside the component
//! tree: the nav link of the section in view, the scroll-to-top affordance,
//! and the navbar's solid styling. Class toggles happen directly on the DOM;
//! Yew never rewrites these attributes because the rendered values do not
//! change between renders.

/// Install the scroll listener and apply the initial state once.
///
/// The listener stays registered for the lifetime of the page.
#[cfg(target_arch = "wasm32")]
pub fn attach() {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let closure = Closure::<dyn FnMut()>::new(on_scroll);
    if let Err(err) = crate::dom::window()
        .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
    {
        crate::dom::console_error(&crate::dom::js_error_message(&err));
    }
    closure.forget();

    on_scroll();
}

#[cfg(not(target_arch = "wasm32"))]
pub fn attach() {}

#[cfg(target_arch = "wasm32")]
fn on_scroll() {
    use nileway_core::scroll::{active_section, navbar_solid, scroll_top_visible};
    use wasm_bindgen::JsCast;

    let doc = crate::dom::document();
    let scroll_y = crate::dom::scroll_y();

    let mut sections = Vec::new();
    if let Ok(nodes) = doc.query_selector_all("section[id]") {
        for i in 0..nodes.length() {
            if let Some(el) = nodes
                .get(i)
                .and_then(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
            {
                sections.push((el.id(), f64::from(el.offset_top())));
            }
        }
    }
    let target = active_section(&sections, scroll_y).map(|id| format!("#{id}"));

    if let Ok(links) = doc.query_selector_all(".nav-link") {
        for i in 0..links.length() {
            if let Some(el) = links
                .get(i)
                .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
            {
                let href = el.get_attribute("href").unwrap_or_default();
                let is_active = target
                    .as_deref()
                    .is_some_and(|anchor| href.contains(anchor));
                set_class(&el, "active", is_active);
            }
        }
    }

    if let Some(button) = doc.get_element_by_id("scrollToTopBtn") {
        set_class(&button, "hidden", !scroll_top_visible(scroll_y));
    }

    if let Some(navbar) = doc.get_element_by_id("navbar") {
        let has_hero = matches!(doc.query_selector(".hero-section"), Ok(Some(_)));
        set_class(&navbar, "nav-scrolled", navbar_solid(scroll_y, has_hero));
    }
}

#[cfg(target_arch = "wasm32")]
fn set_class(el: &web_sys::Element, class: &str, on: bool) {
    let list = el.class_list();
    let result = if on {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
    if let Err(err) = result {
        log::warn!(
            "class toggle failed: {}",
            crate::dom::js_error_message(&err)
        );
    }
}
