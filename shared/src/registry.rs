//! Static prefix → country table.
//!
//! Only the three leading characters of a payload are ever matched; there is
//! no GS1 range matching and no check-digit validation.

use serde::{Deserialize, Serialize};

use crate::i18n::{Language, Localized, StringKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Boycott,
    Safe,
    Unknown,
    Invalid,
}

impl Classification {
    /// Colour of the result card.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Boycott | Self::Invalid => "red",
            Self::Safe => "green",
            Self::Unknown => "orange",
        }
    }

    #[must_use]
    pub const fn action_key(self) -> Option<StringKey> {
        match self {
            Self::Boycott => Some(StringKey::Boycott),
            Self::Safe => Some(StringKey::SafeToUse),
            Self::Unknown | Self::Invalid => None,
        }
    }

    #[must_use]
    pub const fn is_country(self) -> bool {
        matches!(self, Self::Boycott | Self::Safe)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryRecord {
    pub prefix: &'static str,
    pub flag: &'static str,
    pub name: Localized,
    pub message: Localized,
    pub classification: Classification,
}

impl CountryRecord {
    /// Flag plus localized product name, e.g. "🇩🇪 German Product".
    #[must_use]
    pub fn title(&self, language: Language) -> String {
        format!("{} {}", self.flag, self.name.get(language))
    }

    #[must_use]
    pub fn action(&self, language: Language) -> &'static str {
        self.classification
            .action_key()
            .map_or("", |key| crate::i18n::text(language, key))
    }
}

const fn country(
    prefix: &'static str,
    flag: &'static str,
    name: Localized,
    message: Localized,
    classification: Classification,
) -> CountryRecord {
    CountryRecord {
        prefix,
        flag,
        name,
        message,
        classification,
    }
}

use Classification::{Boycott, Safe};

static COUNTRIES: [CountryRecord; 14] = [
    country(
        "890",
        "🇮🇳",
        Localized::new("Indian Product", "ہندوستانی مصنوعات"),
        Localized::new("This product is from India.", "یہ مصنوعات ہندوستان سے ہے۔"),
        Boycott,
    ),
    country(
        "729",
        "🇮🇱",
        Localized::new("Israeli Product", "اسرائیلی مصنوعات"),
        Localized::new("This product is from Israel.", "یہ مصنوعات اسرائیل سے ہے۔"),
        Boycott,
    ),
    country(
        "690",
        "🇨🇳",
        Localized::new("Chinese Product", "چینی مصنوعات"),
        Localized::new("This product is from China.", "یہ مصنوعات چین سے ہے۔"),
        Safe,
    ),
    country(
        "400",
        "🇩🇪",
        Localized::new("German Product", "جرمن مصنوعات"),
        Localized::new("This product is from Germany.", "یہ مصنوعات جرمنی سے ہے۔"),
        Safe,
    ),
    country(
        "500",
        "🇬🇧",
        Localized::new("UK Product", "برطانوی مصنوعات"),
        Localized::new("This product is from United Kingdom.", "یہ مصنوعات برطانیہ سے ہے۔"),
        Safe,
    ),
    country(
        "750",
        "🇲🇽",
        Localized::new("Mexican Product", "میکسیکن مصنوعات"),
        Localized::new("This product is from Mexico.", "یہ مصنوعات میکسیکو سے ہے۔"),
        Safe,
    ),
    country(
        "789",
        "🇧🇷",
        Localized::new("Brazilian Product", "برازیلی مصنوعات"),
        Localized::new("This product is from Brazil.", "یہ مصنوعات برازیل سے ہے۔"),
        Safe,
    ),
    country(
        "880",
        "🇰🇷",
        Localized::new("South Korean Product", "جنوبی کوریائی مصنوعات"),
        Localized::new("This product is from South Korea.", "یہ مصنوعات جنوبی کوریا سے ہے۔"),
        Safe,
    ),
    country(
        "885",
        "🇹🇭",
        Localized::new("Thai Product", "تھائی مصنوعات"),
        Localized::new("This product is from Thailand.", "یہ مصنوعات تھائی لینڈ سے ہے۔"),
        Safe,
    ),
    country(
        "888",
        "🇸🇬",
        Localized::new("Singaporean Product", "سنگاپوری مصنوعات"),
        Localized::new("This product is from Singapore.", "یہ مصنوعات سنگاپور سے ہے۔"),
        Safe,
    ),
    country(
        "893",
        "🇻🇳",
        Localized::new("Vietnamese Product", "ویتنامی مصنوعات"),
        Localized::new("This product is from Vietnam.", "یہ مصنوعات ویتنام سے ہے۔"),
        Safe,
    ),
    country(
        "896",
        "🇵🇰",
        Localized::new("Pakistani Product", "پاکستانی مصنوعات"),
        Localized::new("This product is from Pakistan.", "یہ مصنوعات پاکستان سے ہے۔"),
        Safe,
    ),
    country(
        "899",
        "🇮🇩",
        Localized::new("Indonesian Product", "انڈونیشیائی مصنوعات"),
        Localized::new("This product is from Indonesia.", "یہ مصنوعات انڈونیشیا سے ہے۔"),
        Safe,
    ),
    country(
        "955",
        "🇲🇾",
        Localized::new("Malaysian Product", "ملائیشیائی مصنوعات"),
        Localized::new("This product is from Malaysia.", "یہ مصنوعات ملائیشیا سے ہے۔"),
        Safe,
    ),
];

/// Exact-match lookup on a three character prefix.
#[must_use]
pub fn lookup(prefix: &str) -> Option<&'static CountryRecord> {
    COUNTRIES.iter().find(|record| record.prefix == prefix)
}

#[must_use]
pub fn is_known(prefix: &str) -> bool {
    lookup(prefix).is_some()
}

pub fn records() -> impl Iterator<Item = &'static CountryRecord> {
    COUNTRIES.iter()
}
