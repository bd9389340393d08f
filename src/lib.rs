// SPDX-License-Identifier: MPL-2.0
//! Default configuration provider for a bundled e-commerce admin UI plugin.
//!
//! The host framework's plugin-configuration step reads a handful of values
//! from here: where the compiled admin UI lives on disk, the tag its log
//! lines carry, and which UI languages are offered by default. The values in
//! [`defaults`] are static and never mutate; [`config`] layers optional host
//! overrides on top and produces the immutable [`config::ResolvedConfig`]
//! bundle the rest of the host passes around.

#![doc(html_root_url = "https://docs.rs/admin-ui-plugin/0.1.0")]

pub mod config;
pub mod defaults;
pub mod error;
pub mod language;
pub mod paths;

pub use config::{Config, ResolvedConfig};
pub use defaults::{
    default_app_path, DEFAULT_AVAILABLE_LANGUAGES, DEFAULT_LANGUAGE, DEFAULT_LOCALE, LOGGER_CTX,
};
pub use error::{Error, Result};
pub use language::LanguageCode;
