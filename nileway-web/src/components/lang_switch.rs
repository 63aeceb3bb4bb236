use nileway_core::Lang;
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub current: Lang,
    pub on_change: Callback<Lang>,
}

/// The language flag row. Clicks stop propagating so outer handlers never
/// see them.
#[function_component(LangSwitch)]
pub fn lang_switch(p: &Props) -> Html {
    html! {
        <div class="lang-switch">
            { for Lang::ALL.iter().copied().map(|lang| {
                let onclick = {
                    let cb = p.on_change.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.stop_propagation();
                        cb.emit(lang);
                    })
                };
                html! {
                    <button
                        class={classes!("lang-flag", (lang == p.current).then_some("active"))}
                        data-lang={lang.code()}
                        title={lang.native_name()}
                        onclick={onclick}>
                        { lang.code().to_uppercase() }
                    </button>
                }
            }) }
        </div>
    }
}
