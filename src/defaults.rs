// SPDX-License-Identifier: MPL-2.0
//! The plugin's default values. Single source of truth: every other layer
//! (the resolver in [`crate::config`], the host's bootstrap step) reads from
//! here and never redefines these.
//!
//! Nothing in this module validates anything. Whether the bundled app
//! directory exists, or whether a selected language is sensible, is the
//! consumer's concern.

use crate::language::LanguageCode;

pub use crate::paths::default_app_path;

/// Tag attached by the host's logger to every log line this plugin emits.
pub const LOGGER_CTX: &str = "AdminUiPlugin";

/// Language used when the host configures no explicit UI language.
pub const DEFAULT_LANGUAGE: LanguageCode = LanguageCode::En;

/// Locale used when the host configures no explicit locale.
///
/// `None` is meaningful: it tells the consuming system to fall back to its
/// own default rather than treating the value as missing or invalid. It is
/// deliberately not an empty string.
pub const DEFAULT_LOCALE: Option<&str> = None;

/// Languages offered out of the box, in the order the UI language picker
/// presents them. The order is part of the contract; do not sort.
///
/// [`DEFAULT_LANGUAGE`] is expected to appear in this list. That expectation
/// is not asserted here (this layer performs no validation) but is enforced
/// when a [`crate::config::ResolvedConfig`] is built, and pinned by tests.
pub const DEFAULT_AVAILABLE_LANGUAGES: [LanguageCode; 17] = [
    LanguageCode::He,
    LanguageCode::Ar,
    LanguageCode::De,
    LanguageCode::En,
    LanguageCode::Es,
    LanguageCode::Pl,
    LanguageCode::ZhHans,
    LanguageCode::ZhHant,
    LanguageCode::PtBr,
    LanguageCode::PtPt,
    LanguageCode::Cs,
    LanguageCode::Fr,
    LanguageCode::Ru,
    LanguageCode::Uk,
    LanguageCode::It,
    LanguageCode::Fa,
    LanguageCode::Ne,
];
