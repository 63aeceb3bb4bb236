use crate::components::sections::SECTIONS;
use crate::i18n::t;
use nileway_core::Lang;
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub lang: Lang,
    pub open: bool,
    pub on_close: Callback<()>,
}

/// Full-screen navigation overlay for small viewports. Any in-menu link
/// closes it; the caller releases the body scroll lock.
#[function_component(MobileMenu)]
pub fn mobile_menu(p: &Props) -> Html {
    let close = {
        let cb = p.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit(());
        })
    };
    html! {
        <div id="mobile-menu" class={classes!("mobile-menu", p.open.then_some("is-open"))}>
            <button id="close-mobile-menu" aria-label={t("nav.menu")} onclick={close}>
                <i class="fa fa-times"></i>
            </button>
            <ul>
                { for SECTIONS.iter().map(|section| {
                    let onclick = {
                        let cb = p.on_close.clone();
                        Callback::from(move |_: MouseEvent| cb.emit(()))
                    };
                    html! {
                        <li key={section.id}>
                            <a href={format!("#{}", section.id)} onclick={onclick}>
                                { t(section.title_key) }
                            </a>
                        </li>
                    }
                }) }
            </ul>
        </div>
    }
}
