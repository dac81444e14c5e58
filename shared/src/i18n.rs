//! English and Urdu string tables.
//!
//! Both tables are complete: every [`StringKey`] resolves in every
//! [`Language`], there is no fallback between them.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    English,
    Urdu,
}

impl Language {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::English => Self::Urdu,
            Self::Urdu => Self::English,
        }
    }

    /// ISO 639-1 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Urdu => "ur",
        }
    }

    #[must_use]
    pub const fn direction(self) -> TextDirection {
        match self {
            Self::English => TextDirection::Ltr,
            Self::Urdu => TextDirection::Rtl,
        }
    }

    #[must_use]
    pub const fn all() -> &'static [Language] {
        &[Language::English, Language::Urdu]
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextDirection {
    Ltr,
    Rtl,
}

/// A pair of texts, one per language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Localized {
    pub en: &'static str,
    pub ur: &'static str,
}

impl Localized {
    #[must_use]
    pub const fn new(en: &'static str, ur: &'static str) -> Self {
        Self { en, ur }
    }

    #[must_use]
    pub const fn get(&self, language: Language) -> &'static str {
        match language {
            Language::English => self.en,
            Language::Urdu => self.ur,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StringKey {
    Welcome,
    ScanButton,
    InvalidBarcode,
    UnknownOrigin,
    MadeBy,
    Boycott,
    SafeToUse,
    PermissionText,
    GrantPermission,
    ScanAgain,
    SwitchLanguage,
    AlignBarcode,
}

impl StringKey {
    pub const ALL: [StringKey; 12] = [
        Self::Welcome,
        Self::ScanButton,
        Self::InvalidBarcode,
        Self::UnknownOrigin,
        Self::MadeBy,
        Self::Boycott,
        Self::SafeToUse,
        Self::PermissionText,
        Self::GrantPermission,
        Self::ScanAgain,
        Self::SwitchLanguage,
        Self::AlignBarcode,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::ScanButton => "scan_button",
            Self::InvalidBarcode => "invalid_barcode",
            Self::UnknownOrigin => "unknown_origin",
            Self::MadeBy => "made_by",
            Self::Boycott => "boycott",
            Self::SafeToUse => "safe_to_use",
            Self::PermissionText => "permission_text",
            Self::GrantPermission => "grant_permission",
            Self::ScanAgain => "scan_again",
            Self::SwitchLanguage => "switch_language",
            Self::AlignBarcode => "align_barcode",
        }
    }
}

/// Every UI label for one language.
#[derive(Debug, PartialEq, Eq)]
pub struct Strings {
    pub welcome: &'static str,
    pub scan_button: &'static str,
    pub invalid_barcode: &'static str,
    pub unknown_origin: &'static str,
    pub made_by: &'static str,
    pub boycott: &'static str,
    pub safe_to_use: &'static str,
    pub permission_text: &'static str,
    pub grant_permission: &'static str,
    pub scan_again: &'static str,
    /// Label of the toggle button, written in the *other* language.
    pub switch_language: &'static str,
    pub align_barcode: &'static str,
}

impl Strings {
    #[must_use]
    pub const fn get(&self, key: StringKey) -> &'static str {
        match key {
            StringKey::Welcome => self.welcome,
            StringKey::ScanButton => self.scan_button,
            StringKey::InvalidBarcode => self.invalid_barcode,
            StringKey::UnknownOrigin => self.unknown_origin,
            StringKey::MadeBy => self.made_by,
            StringKey::Boycott => self.boycott,
            StringKey::SafeToUse => self.safe_to_use,
            StringKey::PermissionText => self.permission_text,
            StringKey::GrantPermission => self.grant_permission,
            StringKey::ScanAgain => self.scan_again,
            StringKey::SwitchLanguage => self.switch_language,
            StringKey::AlignBarcode => self.align_barcode,
        }
    }
}

static ENGLISH: Strings = Strings {
    welcome: "Welcome to Barcode Scanner",
    scan_button: "SCAN PRODUCT",
    invalid_barcode: "Invalid Barcode",
    unknown_origin: "Unknown Origin",
    made_by: "Made by Muhammad Attiq",
    boycott: "BOYCOTT THIS PRODUCT",
    safe_to_use: "SAFE TO USE",
    permission_text: "We need your permission to show the camera",
    grant_permission: "Grant Permission",
    scan_again: "Scan Again",
    switch_language: "اردو",
    align_barcode: "Align barcode within frame",
};

static URDU: Strings = Strings {
    welcome: "بارکوڈ سکینر میں خوش آمدید",
    scan_button: "مصنوعات سکین کریں",
    invalid_barcode: "غلط بارکوڈ",
    unknown_origin: "اصل ملک معلوم نہیں",
    made_by: "محمد عتیق کی طرف سے بنایا گیا",
    boycott: "اس مصنوعات کا بائیکاٹ کریں",
    safe_to_use: "استعمال کے لیے محفوظ",
    permission_text: "کیمرہ دکھانے کے لیے ہمیں آپ کی اجازت درکار ہے",
    grant_permission: "اجازت دیں",
    scan_again: "دوبارہ سکین کریں",
    switch_language: "English",
    align_barcode: "بارکوڈ کو فریم کے اندر رکھیں",
};

#[must_use]
pub fn strings_for(language: Language) -> &'static Strings {
    match language {
        Language::English => &ENGLISH,
        Language::Urdu => &URDU,
    }
}

#[must_use]
pub fn text(language: Language, key: StringKey) -> &'static str {
    strings_for(language).get(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_present_in_both_tables() {
        for &language in Language::all() {
            for key in StringKey::ALL {
                assert!(
                    !text(language, key).trim().is_empty(),
                    "missing {} for {language}",
                    key.name()
                );
            }
        }
    }

    #[test]
    fn test_tables_are_distinct() {
        for key in StringKey::ALL {
            assert_ne!(
                text(Language::English, key),
                text(Language::Urdu, key),
                "{} is not translated",
                key.name()
            );
        }
    }

    #[test]
    fn test_switch_label_names_other_language() {
        assert_eq!(strings_for(Language::English).switch_language, "اردو");
        assert_eq!(strings_for(Language::Urdu).switch_language, "English");
    }

    #[test]
    fn test_toggle_is_involution() {
        for &language in Language::all() {
            assert_ne!(language.toggled(), language);
            assert_eq!(language.toggled().toggled(), language);
        }
    }

    #[test]
    fn test_direction() {
        assert_eq!(Language::English.direction(), TextDirection::Ltr);
        assert_eq!(Language::Urdu.direction(), TextDirection::Rtl);
    }

    #[test]
    fn test_key_names_unique() {
        let mut names: Vec<_> = StringKey::ALL.iter().map(|k| k.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), StringKey::ALL.len());
    }
}
