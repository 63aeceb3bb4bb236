use web_sys::MouseEvent;
use yew::prelude::*;

/// Back-to-top affordance. It renders hidden; the scroll reactor toggles
/// the `hidden` class past the scroll threshold.
#[function_component(ScrollTop)]
pub fn scroll_top() -> Html {
    let onclick = Callback::from(|_: MouseEvent| crate::dom::scroll_to_top());
    html! {
        <button id="scrollToTopBtn" class="hidden" aria-label="Back to top" onclick={onclick}>
            <i class="fa fa-arrow-up"></i>
        </button>
    }
}
