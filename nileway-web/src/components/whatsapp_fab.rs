use crate::i18n::t;
use nileway_core::Lang;
use nileway_core::links::greeting_link;
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub lang: Lang,
}

/// Floating quick-contact button. The greeting resolves in the current
/// language at click time, falling back to English where a locale has no
/// entry.
#[function_component(WhatsappFab)]
pub fn whatsapp_fab(_p: &Props) -> Html {
    let onclick = Callback::from(|_: MouseEvent| {
        crate::dom::open_in_new_tab(&greeting_link(&t("whatsapp.greeting")));
    });
    html! {
        <button id="whatsapp-fab" class="whatsapp-fab" aria-label="WhatsApp" onclick={onclick}>
            <i class="fab fa-whatsapp"></i>
        </button>
    }
}
