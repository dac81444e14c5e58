use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, instrument};

use crate::i18n::{self, Language, StringKey};
use crate::registry::{self, Classification};
use crate::PREFIX_LEN;

/// Raw payload as delivered by the shell's scanner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanPayload {
    Text(String),
    /// QR codes can carry arbitrary bytes; those never name a country.
    Binary(Vec<u8>),
}

impl ScanPayload {
    #[must_use]
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BarcodeError {
    #[error("barcode too short: {len} characters, need at least {min}")]
    TooShort { len: usize, min: usize },

    #[error("barcode payload is not text ({bytes} bytes)")]
    NotText { bytes: usize },
}

/// A payload long enough to carry a country prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Barcode<'a> {
    raw: &'a str,
    prefix_end: usize,
}

impl<'a> Barcode<'a> {
    pub fn parse(raw: &'a str) -> Result<Self, BarcodeError> {
        // Byte offset just past the PREFIX_LEN-th character.
        let mut indices = raw.char_indices().map(|(i, _)| i).chain(std::iter::once(raw.len()));
        match indices.nth(PREFIX_LEN) {
            Some(prefix_end) => Ok(Self { raw, prefix_end }),
            None => Err(BarcodeError::TooShort {
                len: raw.chars().count(),
                min: PREFIX_LEN,
            }),
        }
    }

    pub fn from_payload(payload: &'a ScanPayload) -> Result<Self, BarcodeError> {
        match payload {
            ScanPayload::Text(raw) => Self::parse(raw),
            ScanPayload::Binary(bytes) => Err(BarcodeError::NotText { bytes: bytes.len() }),
        }
    }

    #[must_use]
    pub fn prefix(&self) -> &'a str {
        &self.raw[..self.prefix_end]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    pub title: String,
    pub message: String,
    pub classification: Classification,
}

impl ScanResult {
    fn from_key(language: Language, key: StringKey, classification: Classification) -> Self {
        let text = i18n::text(language, key);
        Self {
            title: text.to_owned(),
            message: text.to_owned(),
            classification,
        }
    }

    #[must_use]
    pub fn invalid(language: Language) -> Self {
        Self::from_key(language, StringKey::InvalidBarcode, Classification::Invalid)
    }

    #[must_use]
    pub fn unknown(language: Language) -> Self {
        Self::from_key(language, StringKey::UnknownOrigin, Classification::Unknown)
    }

    #[must_use]
    pub const fn color(&self) -> &'static str {
        self.classification.color()
    }

    /// What the speech engine reads out.
    #[must_use]
    pub fn spoken_text(&self) -> String {
        format!("{}. {}", self.title, self.message)
    }
}

/// Classify a parsed barcode. Never fails: unknown prefixes are a result.
#[must_use]
pub fn classify_barcode(barcode: &Barcode<'_>, language: Language) -> ScanResult {
    let prefix = barcode.prefix();
    let result = match registry::lookup(prefix) {
        Some(record) => ScanResult {
            title: record.title(language),
            message: format!(
                "{}\n\n{}",
                record.message.get(language),
                record.action(language)
            ),
            classification: record.classification,
        },
        None => ScanResult::unknown(language),
    };
    info!(prefix, classification = ?result.classification, "barcode classified");
    result
}

#[instrument(level = "debug", skip(raw), fields(len = raw.len()))]
#[must_use]
pub fn classify(raw: &str, language: Language) -> ScanResult {
    match Barcode::parse(raw) {
        Ok(barcode) => classify_barcode(&barcode, language),
        Err(e) => {
            info!(error = %e, "rejected scan");
            ScanResult::invalid(language)
        }
    }
}

#[instrument(level = "debug", skip(payload))]
#[must_use]
pub fn classify_payload(payload: &ScanPayload, language: Language) -> ScanResult {
    match Barcode::from_payload(payload) {
        Ok(barcode) => classify_barcode(&barcode, language),
        Err(e) => {
            info!(error = %e, "rejected scan");
            ScanResult::invalid(language)
        }
    }
}
