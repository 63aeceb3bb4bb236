use crate::i18n::locales::load_translations;
use nileway_core::Lang;
use serde_json::Value;
use std::cell::RefCell;

/// The language preference persists under this localStorage key.
const STORAGE_KEY: &str = "nileway.locale";

pub struct I18nBundle {
    pub lang: Lang,
    pub translations: Value,
    pub fallback: Value,
}

fn build_bundle(lang: Lang) -> Option<I18nBundle> {
    let fallback = load_translations(Lang::En)?;
    let translations = load_translations(lang)?;

    Some(I18nBundle {
        lang,
        translations,
        fallback,
    })
}

fn fallback_bundle() -> I18nBundle {
    let fallback = load_translations(Lang::En).unwrap_or(Value::Object(serde_json::Map::new()));

    I18nBundle {
        lang: Lang::En,
        translations: fallback.clone(),
        fallback,
    }
}

fn saved_lang() -> Lang {
    #[cfg(all(not(test), target_arch = "wasm32"))]
    {
        web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
            .and_then(|code| Lang::from_code(&code))
            .unwrap_or_default()
    }

    #[cfg(any(test, not(target_arch = "wasm32")))]
    {
        Lang::default()
    }
}

thread_local! {
    pub(super) static CURRENT: RefCell<I18nBundle> = RefCell::new(
        build_bundle(saved_lang()).unwrap_or_else(fallback_bundle)
    );
}

pub(super) fn with_bundle<R>(f: impl FnOnce(&I18nBundle) -> R) -> R {
    CURRENT.with(|cell| f(&cell.borrow()))
}

fn replace_bundle(bundle: I18nBundle) {
    CURRENT.with(|cell| {
        cell.replace(bundle);
    });
}

/// Switch the site language.
///
/// Unsupported codes leave everything untouched. A supported code swaps the
/// active bundle, persists the choice, sets `<html lang dir>` (rtl only for
/// Arabic), and toggles the Arabic display font on `<body>`.
pub fn set_lang(code: &str) {
    let Some(lang) = Lang::from_code(code) else {
        return;
    };
    if let Some(bundle) = build_bundle(lang) {
        replace_bundle(bundle);
        apply_document_language(lang);
    }
}

#[cfg(target_arch = "wasm32")]
fn apply_document_language(lang: Lang) {
    let Some(win) = web_sys::window() else {
        return;
    };

    if let Some(doc) = win.document() {
        if let Some(el) = doc.document_element() {
            let _ = el.set_attribute("lang", lang.code());
            let _ = el.set_attribute("dir", lang.dir());
        }
        if let Some(body) = doc.body() {
            let list = body.class_list();
            let _ = if lang == Lang::Ar {
                list.add_1("font-cairo")
            } else {
                list.remove_1("font-cairo")
            };
        }
    }

    if let Some(storage) = win.local_storage().ok().flatten() {
        let _ = storage.set_item(STORAGE_KEY, lang.code());
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn apply_document_language(lang: Lang) {
    let _ = lang;
}

/// The currently active language.
#[must_use]
pub fn current_lang() -> Lang {
    with_bundle(|bundle| bundle.lang)
}

/// Whether the current language renders right-to-left.
#[must_use]
pub fn is_rtl() -> bool {
    with_bundle(|bundle| bundle.lang.is_rtl())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_bundle_loads_requested_locale() {
        let bundle = build_bundle(Lang::Ar).expect("bundle should load");
        assert_eq!(bundle.lang, Lang::Ar);
        assert!(bundle.lang.is_rtl());
        assert!(bundle.translations.is_object());
        assert!(bundle.fallback.is_object());
    }

    #[test]
    fn fallback_bundle_defaults_to_en() {
        let bundle = fallback_bundle();
        assert_eq!(bundle.lang, Lang::En);
        assert!(!bundle.lang.is_rtl());
        assert!(bundle.translations.is_object());
    }

    #[test]
    fn set_lang_switches_supported_codes() {
        set_lang("en");
        set_lang("de");
        assert_eq!(current_lang(), Lang::De);
        set_lang("en");
        assert_eq!(current_lang(), Lang::En);
    }

    #[test]
    fn set_lang_ignores_unsupported_codes() {
        set_lang("it");
        set_lang("fr");
        assert_eq!(current_lang(), Lang::It);
        set_lang("");
        assert_eq!(current_lang(), Lang::It);
        set_lang("en");
    }
}
