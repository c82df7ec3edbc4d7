//! Runtime environment metadata attached to exports.

use serde::Serialize;
use terminal_size::{terminal_size, Height, Width};

/// Locale variables consulted for the language tag, in priority order.
const LOCALE_VARS: &[&str] = &["LC_ALL", "LC_MESSAGES", "LANG"];

/// Language tag used when no usable locale is configured.
pub const UNDETERMINED_LANGUAGE: &str = "und";

/// Snapshot of where an export was produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Environment {
    pub user_agent: String,
    pub platform: String,
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screen_width: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screen_height: Option<u16>,
}

impl Environment {
    /// Sample the current process environment.
    ///
    /// Screen size is the attached terminal's columns and rows, if any.
    pub fn sample() -> Self {
        let locale = LOCALE_VARS
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|value| !value.is_empty());
        let size = terminal_size();

        Self {
            user_agent: format!(
                "pastedbg/{} ({}; {})",
                env!("CARGO_PKG_VERSION"),
                std::env::consts::OS,
                std::env::consts::ARCH
            ),
            platform: format!("{}-{}", std::env::consts::OS, std::env::consts::ARCH),
            language: locale
                .as_deref()
                .map(language_tag)
                .unwrap_or_else(|| UNDETERMINED_LANGUAGE.to_string()),
            screen_width: size.map(|(Width(w), _)| w),
            screen_height: size.map(|(_, Height(h))| h),
        }
    }
}

/// Convert a POSIX locale (`en_US.UTF-8@euro`) into a language tag (`en-US`).
pub fn language_tag(locale: &str) -> String {
    let base = locale
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .trim();
    if base.is_empty() || base == "C" || base == "POSIX" {
        return UNDETERMINED_LANGUAGE.to_string();
    }
    base.replace('_', "-")
}
