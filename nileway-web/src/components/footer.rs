use crate::i18n::tr;
use nileway_core::Lang;
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub lang: Lang,
}

fn current_year() -> u32 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::new_0().get_full_year()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        // Server-side renders carry a fixed year; the browser stamps the
        // real one.
        2026
    }
}

#[function_component(Footer)]
pub fn footer(_p: &Props) -> Html {
    let year = current_year().to_string();
    let mut args = BTreeMap::new();
    args.insert("year", year.as_str());
    html! {
        <footer>{ tr("footer.copyright", Some(&args)) }</footer>
    }
}
