use crate::app::state::ToastState;
use yew::prelude::*;

/// Utility classes the toast always carries; phase and severity add the
/// visibility and color classes on top.
const BASE_CLASSES: &str = "fixed bottom-5 left-1/2 -translate-x-1/2 text-white py-2 px-6 rounded-full shadow-lg z-50 transition-all duration-300 transform";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub toast: Option<ToastState>,
}

#[function_component(Toast)]
pub fn toast(p: &Props) -> Html {
    let Some(state) = &p.toast else {
        return html! {
            <div id="notification" class={classes!(BASE_CLASSES, "hidden")}></div>
        };
    };

    let mut class = classes!(BASE_CLASSES);
    if state.phase.colored() {
        class.push(state.severity.css_class());
    }
    if state.phase.translucent() {
        class.push("opacity-0");
        class.push("-translate-y-4");
    }

    html! {
        <div id="notification" class={class}>
            <span id="notification-message">{ state.message.clone() }</span>
        </div>
    }
}
