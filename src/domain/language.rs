// Languages the tool is tuned for. Other codes are passed through to the service.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

pub const LANGUAGES: &[Language] = &[
    Language { code: "en", name: "English" },
    Language { code: "hi", name: "हिंदी (Hindi)" },
    Language { code: "ta", name: "தமிழ் (Tamil)" },
    Language { code: "te", name: "తెలుగు (Telugu)" },
    Language { code: "kn", name: "ಕನ್ನಡ (Kannada)" },
    Language { code: "ml", name: "മലയാളം (Malayalam)" },
    Language { code: "gu", name: "ગુજરાતી (Gujarati)" },
];

/// Look up the display name for a language code (case-insensitive)
pub fn language_name(code: &str) -> Option<&'static str> {
    LANGUAGES
        .iter()
        .find(|lang| lang.code.eq_ignore_ascii_case(code.trim()))
        .map(|lang| lang.name)
}

pub fn is_known_language(code: &str) -> bool {
    language_name(code).is_some()
}
