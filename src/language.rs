// SPDX-License-Identifier: MPL-2.0
//! The closed set of UI translation language codes supported by the host
//! framework.
//!
//! This module mirrors the enumeration the framework supplies to all of its
//! plugins; nothing in this crate extends or validates it. The dependency
//! direction is strictly one-way: the rest of the crate consumes
//! [`LanguageCode`], this module depends on nothing else in the crate.
//!
//! Codes follow BCP-47 (`"pt-BR"`, `"zh-Hans"`). Parsing accepts `_` as a
//! separator alias since configuration files written by hand frequently use
//! the underscore form.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use unic_langid::LanguageIdentifier;

/// A language code from the host framework's closed enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LanguageCode {
    /// Afrikaans
    Af,
    /// Arabic
    Ar,
    /// Bulgarian
    Bg,
    /// Bengali
    Bn,
    /// Catalan
    Ca,
    /// Czech
    Cs,
    /// Danish
    Da,
    /// German
    De,
    /// Greek
    El,
    /// English
    En,
    /// Spanish
    Es,
    /// Estonian
    Et,
    /// Persian
    Fa,
    /// Finnish
    Fi,
    /// French
    Fr,
    /// Irish
    Ga,
    /// Hebrew
    He,
    /// Hindi
    Hi,
    /// Croatian
    Hr,
    /// Hungarian
    Hu,
    /// Indonesian
    Id,
    /// Italian
    It,
    /// Japanese
    Ja,
    /// Korean
    Ko,
    /// Lithuanian
    Lt,
    /// Latvian
    Lv,
    /// Malay
    Ms,
    /// Norwegian Bokmål
    Nb,
    /// Nepali
    Ne,
    /// Dutch
    Nl,
    /// Polish
    Pl,
    /// Portuguese
    Pt,
    /// Brazilian Portuguese
    PtBr,
    /// European Portuguese
    PtPt,
    /// Romanian
    Ro,
    /// Russian
    Ru,
    /// Slovak
    Sk,
    /// Slovenian
    Sl,
    /// Serbian
    Sr,
    /// Swedish
    Sv,
    /// Swahili
    Sw,
    /// Tamil
    Ta,
    /// Thai
    Th,
    /// Turkish
    Tr,
    /// Ukrainian
    Uk,
    /// Urdu
    Ur,
    /// Vietnamese
    Vi,
    /// Chinese
    Zh,
    /// Simplified Chinese
    ZhHans,
    /// Traditional Chinese
    ZhHant,
}

impl LanguageCode {
    /// Every member of the enumeration, in code order.
    pub const ALL: [LanguageCode; 50] = [
        LanguageCode::Af,
        LanguageCode::Ar,
        LanguageCode::Bg,
        LanguageCode::Bn,
        LanguageCode::Ca,
        LanguageCode::Cs,
        LanguageCode::Da,
        LanguageCode::De,
        LanguageCode::El,
        LanguageCode::En,
        LanguageCode::Es,
        LanguageCode::Et,
        LanguageCode::Fa,
        LanguageCode::Fi,
        LanguageCode::Fr,
        LanguageCode::Ga,
        LanguageCode::He,
        LanguageCode::Hi,
        LanguageCode::Hr,
        LanguageCode::Hu,
        LanguageCode::Id,
        LanguageCode::It,
        LanguageCode::Ja,
        LanguageCode::Ko,
        LanguageCode::Lt,
        LanguageCode::Lv,
        LanguageCode::Ms,
        LanguageCode::Nb,
        LanguageCode::Ne,
        LanguageCode::Nl,
        LanguageCode::Pl,
        LanguageCode::Pt,
        LanguageCode::PtBr,
        LanguageCode::PtPt,
        LanguageCode::Ro,
        LanguageCode::Ru,
        LanguageCode::Sk,
        LanguageCode::Sl,
        LanguageCode::Sr,
        LanguageCode::Sv,
        LanguageCode::Sw,
        LanguageCode::Ta,
        LanguageCode::Th,
        LanguageCode::Tr,
        LanguageCode::Uk,
        LanguageCode::Ur,
        LanguageCode::Vi,
        LanguageCode::Zh,
        LanguageCode::ZhHans,
        LanguageCode::ZhHant,
    ];

    /// Returns the BCP-47 code for this language.
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageCode::Af => "af",
            LanguageCode::Ar => "ar",
            LanguageCode::Bg => "bg",
            LanguageCode::Bn => "bn",
            LanguageCode::Ca => "ca",
            LanguageCode::Cs => "cs",
            LanguageCode::Da => "da",
            LanguageCode::De => "de",
            LanguageCode::El => "el",
            LanguageCode::En => "en",
            LanguageCode::Es => "es",
            LanguageCode::Et => "et",
            LanguageCode::Fa => "fa",
            LanguageCode::Fi => "fi",
            LanguageCode::Fr => "fr",
            LanguageCode::Ga => "ga",
            LanguageCode::He => "he",
            LanguageCode::Hi => "hi",
            LanguageCode::Hr => "hr",
            LanguageCode::Hu => "hu",
            LanguageCode::Id => "id",
            LanguageCode::It => "it",
            LanguageCode::Ja => "ja",
            LanguageCode::Ko => "ko",
            LanguageCode::Lt => "lt",
            LanguageCode::Lv => "lv",
            LanguageCode::Ms => "ms",
            LanguageCode::Nb => "nb",
            LanguageCode::Ne => "ne",
            LanguageCode::Nl => "nl",
            LanguageCode::Pl => "pl",
            LanguageCode::Pt => "pt",
            LanguageCode::PtBr => "pt-BR",
            LanguageCode::PtPt => "pt-PT",
            LanguageCode::Ro => "ro",
            LanguageCode::Ru => "ru",
            LanguageCode::Sk => "sk",
            LanguageCode::Sl => "sl",
            LanguageCode::Sr => "sr",
            LanguageCode::Sv => "sv",
            LanguageCode::Sw => "sw",
            LanguageCode::Ta => "ta",
            LanguageCode::Th => "th",
            LanguageCode::Tr => "tr",
            LanguageCode::Uk => "uk",
            LanguageCode::Ur => "ur",
            LanguageCode::Vi => "vi",
            LanguageCode::Zh => "zh",
            LanguageCode::ZhHans => "zh-Hans",
            LanguageCode::ZhHant => "zh-Hant",
        }
    }

    /// English display name, as shown in a language picker.
    pub fn name(&self) -> &'static str {
        match self {
            LanguageCode::Af => "Afrikaans",
            LanguageCode::Ar => "Arabic",
            LanguageCode::Bg => "Bulgarian",
            LanguageCode::Bn => "Bengali",
            LanguageCode::Ca => "Catalan",
            LanguageCode::Cs => "Czech",
            LanguageCode::Da => "Danish",
            LanguageCode::De => "German",
            LanguageCode::El => "Greek",
            LanguageCode::En => "English",
            LanguageCode::Es => "Spanish",
            LanguageCode::Et => "Estonian",
            LanguageCode::Fa => "Persian",
            LanguageCode::Fi => "Finnish",
            LanguageCode::Fr => "French",
            LanguageCode::Ga => "Irish",
            LanguageCode::He => "Hebrew",
            LanguageCode::Hi => "Hindi",
            LanguageCode::Hr => "Croatian",
            LanguageCode::Hu => "Hungarian",
            LanguageCode::Id => "Indonesian",
            LanguageCode::It => "Italian",
            LanguageCode::Ja => "Japanese",
            LanguageCode::Ko => "Korean",
            LanguageCode::Lt => "Lithuanian",
            LanguageCode::Lv => "Latvian",
            LanguageCode::Ms => "Malay",
            LanguageCode::Nb => "Norwegian Bokmål",
            LanguageCode::Ne => "Nepali",
            LanguageCode::Nl => "Dutch",
            LanguageCode::Pl => "Polish",
            LanguageCode::Pt => "Portuguese",
            LanguageCode::PtBr => "Brazilian Portuguese",
            LanguageCode::PtPt => "European Portuguese",
            LanguageCode::Ro => "Romanian",
            LanguageCode::Ru => "Russian",
            LanguageCode::Sk => "Slovak",
            LanguageCode::Sl => "Slovenian",
            LanguageCode::Sr => "Serbian",
            LanguageCode::Sv => "Swedish",
            LanguageCode::Sw => "Swahili",
            LanguageCode::Ta => "Tamil",
            LanguageCode::Th => "Thai",
            LanguageCode::Tr => "Turkish",
            LanguageCode::Uk => "Ukrainian",
            LanguageCode::Ur => "Urdu",
            LanguageCode::Vi => "Vietnamese",
            LanguageCode::Zh => "Chinese",
            LanguageCode::ZhHans => "Simplified Chinese",
            LanguageCode::ZhHant => "Traditional Chinese",
        }
    }

    /// Converts the code to a [`LanguageIdentifier`] for locale-aware
    /// consumers. Infallible: every member carries a valid BCP-47 code.
    pub fn language_identifier(&self) -> LanguageIdentifier {
        self.as_str()
            .parse()
            .expect("every LanguageCode is a valid BCP-47 identifier")
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a string that is not a member of the
/// enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLanguageCode(pub String);

impl fmt::Display for UnknownLanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown language code: {}", self.0)
    }
}

impl std::error::Error for UnknownLanguageCode {}

impl FromStr for LanguageCode {
    type Err = UnknownLanguageCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.replace('_', "-");
        LanguageCode::ALL
            .iter()
            .find(|code| code.as_str() == normalized)
            .copied()
            .ok_or_else(|| UnknownLanguageCode(s.to_string()))
    }
}

// Serialized as the plain code string ("pt-BR"), not as a variant name, so
// configuration files read the same as the codes shown in the UI.
impl Serialize for LanguageCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LanguageCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
