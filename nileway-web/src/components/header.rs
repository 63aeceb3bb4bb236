use crate::components::lang_switch::LangSwitch;
use crate::components::sections::SECTIONS;
use crate::i18n::t;
use nileway_core::Lang;
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub lang: Lang,
    pub menu_open: bool,
    pub on_lang_change: Callback<Lang>,
    pub on_menu_toggle: Callback<()>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let toggle = {
        let cb = p.on_menu_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit(());
        })
    };
    let menu_icon = if p.menu_open { "fa-times" } else { "fa-bars" };
    html! {
        <nav id="navbar" class="site-nav">
            <a class="nav-brand" href="#home">{ "Nileway" }</a>
            <ul class="nav-links">
                { for SECTIONS.iter().map(|section| html! {
                    <li key={section.id}>
                        <a class="nav-link" href={format!("#{}", section.id)}>
                            { t(section.title_key) }
                        </a>
                    </li>
                }) }
            </ul>
            <LangSwitch current={p.lang} on_change={p.on_lang_change.clone()} />
            <button id="mobile-menu-button" aria-label={t("nav.menu")} onclick={toggle}>
                <i class={classes!("fa", menu_icon)}></i>
            </button>
        </nav>
    }
}
