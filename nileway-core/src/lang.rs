//! Languages the site ships translations for.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Lang {
    #[default]
    En,
    Ar,
    De,
    Ru,
    Ro,
    It,
}

impl Lang {
    /// Every supported language, in the order the flag row displays them.
    pub const ALL: [Lang; 6] = [Lang::En, Lang::Ar, Lang::De, Lang::Ru, Lang::Ro, Lang::It];

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Ar => "ar",
            Lang::De => "de",
            Lang::Ru => "ru",
            Lang::Ro => "ro",
            Lang::It => "it",
        }
    }

    /// Parse a language code, case-insensitively. Unsupported codes yield
    /// `None`; callers treat that as "leave the current language alone".
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "en" => Some(Lang::En),
            "ar" => Some(Lang::Ar),
            "de" => Some(Lang::De),
            "ru" => Some(Lang::Ru),
            "ro" => Some(Lang::Ro),
            "it" => Some(Lang::It),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_rtl(self) -> bool {
        matches!(self, Lang::Ar)
    }

    /// Value for the document's `dir` attribute.
    #[must_use]
    pub const fn dir(self) -> &'static str {
        if self.is_rtl() { "rtl" } else { "ltr" }
    }

    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Lang::En => "English",
            Lang::Ar => "العربية",
            Lang::De => "Deutsch",
            Lang::Ru => "Русский",
            Lang::Ro => "Română",
            Lang::It => "Italiano",
        }
    }
}
