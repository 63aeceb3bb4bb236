use nileway_core::Lang;
use serde_json::Value;

const LOCALE_TABLE: [(Lang, &str); 6] = [
    (Lang::En, include_str!("../../i18n/en.json")),
    (Lang::Ar, include_str!("../../i18n/ar.json")),
    (Lang::De, include_str!("../../i18n/de.json")),
    (Lang::Ru, include_str!("../../i18n/ru.json")),
    (Lang::Ro, include_str!("../../i18n/ro.json")),
    (Lang::It, include_str!("../../i18n/it.json")),
];

pub fn load_translations(lang: Lang) -> Option<Value> {
    let data = LOCALE_TABLE
        .iter()
        .find_map(|(code, data)| (*code == lang).then_some(*data))?;

    serde_json::from_str(data).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_locale_table_parses() {
        for lang in Lang::ALL {
            let value = load_translations(lang).expect("locale table parses");
            assert!(value.is_object(), "{} table should be an object", lang.code());
        }
    }

    #[test]
    fn russian_table_leans_on_english_fallback() {
        // The Russian message set never localized these; resolution falls
        // back to English at render time.
        let ru = load_translations(Lang::Ru).unwrap();
        assert!(ru.get("toast").and_then(|t| t.get("redirecting")).is_none());
        assert!(ru.get("toast").and_then(|t| t.get("fill_fields")).is_some());
    }
}
