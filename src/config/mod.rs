// SPDX-License-Identifier: MPL-2.0
//! Runtime configuration.
//!
//! Nothing is read from or written to disk: settings come from optional
//! command line flags with environment fallbacks, and every value is clamped
//! to a supported range so a bad flag cannot produce a broken session.
//!
//! # Examples
//!
//! ```
//! use iced_sorter::config::Config;
//!
//! let args = pico_args::Arguments::from_vec(vec!["--cache-size".into(), "16".into()]);
//! let config = Config::from_arguments(args, None).expect("valid flags");
//! assert_eq!(config.cache_capacity, 16);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use std::path::PathBuf;

/// Usage text printed for `--help`.
pub const HELP: &str = "\
iced_sorter - route photos from a source folder into up to five destinations

USAGE:
    iced_sorter [OPTIONS] [SOURCE_DIR]

OPTIONS:
    --lang <LOCALE>      UI language (e.g. en-US, id)
    --theme <MODE>       light, dark or system (default: system)
    --cache-size <N>     decoded images kept in memory (8-512, default: 64)
    -h, --help           print this help

ENVIRONMENT:
    ICED_SORTER_LANG     UI language when --lang is not given
    ICED_SORTER_LOG      tracing filter (default: iced_sorter=info)
";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Locale override in BCP-47 form (e.g. `id`, `en-US`).
    pub language: Option<String>,
    pub theme_mode: ThemeMode,
    /// Bounding box for displayed images (width, height).
    pub display_max: (u32, u32),
    /// Number of decoded images kept by the display cache.
    pub cache_capacity: usize,
    /// Source folder to load at startup.
    pub initial_source: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: ThemeMode::System,
            display_max: (DEFAULT_DISPLAY_MAX_WIDTH, DEFAULT_DISPLAY_MAX_HEIGHT),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            initial_source: None,
        }
    }
}

impl Config {
    /// Language requested through `ICED_SORTER_LANG`, ignoring empty values.
    pub fn env_language() -> Option<String> {
        std::env::var(ENV_LANG).ok().filter(|s| !s.is_empty())
    }

    /// Builds the configuration from already-collected arguments.
    ///
    /// `env_lang` is used only when `--lang` is absent. Unknown flags are
    /// rejected; a single positional argument is taken as the source folder.
    pub fn from_arguments(mut args: pico_args::Arguments, env_lang: Option<String>) -> Result<Self> {
        let language: Option<String> = args.opt_value_from_str("--lang")?;
        let theme_mode = args
            .opt_value_from_fn("--theme", parse_theme_mode)?
            .unwrap_or_default();
        let cache_capacity = args
            .opt_value_from_str::<_, usize>("--cache-size")?
            .map_or(DEFAULT_CACHE_CAPACITY, clamp_cache_capacity);

        let mut rest = args.finish().into_iter();
        let initial_source = rest.next().map(PathBuf::from);
        if let Some(extra) = rest.next() {
            return Err(Error::Config(format!(
                "unexpected argument '{}'",
                extra.to_string_lossy()
            )));
        }
        if let Some(flag) = initial_source
            .as_ref()
            .and_then(|p| p.to_str())
            .filter(|s| s.starts_with('-'))
        {
            return Err(Error::Config(format!("unknown flag '{flag}'")));
        }

        Ok(Self {
            language: language.or(env_lang),
            theme_mode,
            cache_capacity,
            initial_source,
            ..Self::default()
        })
    }
}

/// Keeps the cache capacity inside the supported range.
fn clamp_cache_capacity(value: usize) -> usize {
    value.clamp(MIN_CACHE_CAPACITY, MAX_CACHE_CAPACITY)
}

fn parse_theme_mode(value: &str) -> std::result::Result<ThemeMode, String> {
    match value.to_ascii_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(format!("unknown theme '{other}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn args(list: &[&str]) -> pico_args::Arguments {
        pico_args::Arguments::from_vec(list.iter().map(OsString::from).collect())
    }

    #[test]
    fn no_arguments_yield_defaults() {
        let config = Config::from_arguments(args(&[]), None).expect("empty args are valid");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn lang_flag_wins_over_environment() {
        let config = Config::from_arguments(args(&["--lang", "id"]), Some("en-US".into()))
            .expect("valid args");
        assert_eq!(config.language.as_deref(), Some("id"));
    }

    #[test]
    fn environment_language_is_fallback() {
        let config = Config::from_arguments(args(&[]), Some("id".into())).expect("valid args");
        assert_eq!(config.language.as_deref(), Some("id"));
    }

    #[test]
    fn cache_size_is_clamped() {
        let low = Config::from_arguments(args(&["--cache-size", "1"]), None).expect("valid");
        let high = Config::from_arguments(args(&["--cache-size", "100000"]), None).expect("valid");
        assert_eq!(low.cache_capacity, MIN_CACHE_CAPACITY);
        assert_eq!(high.cache_capacity, MAX_CACHE_CAPACITY);
    }

    #[test]
    fn theme_flag_is_parsed_case_insensitively() {
        let config = Config::from_arguments(args(&["--theme", "Dark"]), None).expect("valid");
        assert_eq!(config.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn unknown_theme_is_rejected() {
        let result = Config::from_arguments(args(&["--theme", "sepia"]), None);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn positional_argument_is_initial_source() {
        let config = Config::from_arguments(args(&["/photos/inbox"]), None).expect("valid");
        assert_eq!(config.initial_source, Some(PathBuf::from("/photos/inbox")));
    }

    #[test]
    fn unknown_flag_is_rejected() {
        let result = Config::from_arguments(args(&["--fullscreen"]), None);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn second_positional_is_rejected() {
        let result = Config::from_arguments(args(&["/a", "/b"]), None);
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
