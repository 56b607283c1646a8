//! Theme context for the root layout.
//!
//! The preferred mode lives in the `theme` cookie. Explicit light/dark choices
//! are rendered server-side; `system` is resolved in the browser from
//! `prefers-color-scheme` and follows it when the OS setting changes.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

pub const THEME_COOKIE: &str = "theme";

/// Rule injected for one frame while the theme flips, so nothing animates.
const NO_TRANSITION_CSS: &str = "*,*::before,*::after{transition:none!important}";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            other => Err(format!("unknown theme: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeProvider {
    /// HTML attribute carrying the theme; `class` toggles `light`/`dark` classes.
    pub attribute: &'static str,
    pub default_theme: ThemeMode,
    pub enable_system: bool,
    pub disable_transition_on_change: bool,
}

pub const SITE_THEME: ThemeProvider = ThemeProvider {
    attribute: "class",
    default_theme: ThemeMode::System,
    enable_system: true,
    disable_transition_on_change: true,
};

impl ThemeProvider {
    /// Mode for this request: the cookie choice, else the default.
    #[must_use]
    pub fn resolve(&self, jar: &CookieJar) -> ThemeMode {
        let mode = jar
            .get(THEME_COOKIE)
            .and_then(|cookie| cookie.value().parse().ok())
            .unwrap_or(self.default_theme);

        if mode == ThemeMode::System && !self.enable_system {
            ThemeMode::Light
        } else {
            mode
        }
    }

    /// Attributes for the `<html>` element. Empty for `system`, which is applied
    /// by [`Self::script`] before first paint.
    #[must_use]
    pub fn html_attributes(&self, mode: ThemeMode) -> String {
        match mode {
            ThemeMode::System => String::new(),
            ThemeMode::Light | ThemeMode::Dark => format!(
                r#" {}="{}" style="color-scheme: {}""#,
                self.attribute, mode, mode
            ),
        }
    }

    /// Inline script that applies the system theme and tracks OS changes.
    /// Returns `None` when the mode was fixed server-side.
    #[must_use]
    pub fn script(&self, mode: ThemeMode) -> Option<String> {
        if mode != ThemeMode::System {
            return None;
        }

        let apply = if self.attribute == "class" {
            "d.classList.remove('light','dark');d.classList.add(t);".to_string()
        } else {
            format!("d.setAttribute('{}',t);", self.attribute)
        };

        let on_change = if self.disable_transition_on_change {
            format!(
                "var s=document.createElement('style');\
                 s.appendChild(document.createTextNode('{NO_TRANSITION_CSS}'));\
                 document.head.appendChild(s);a();\
                 window.getComputedStyle(document.body);\
                 setTimeout(function(){{document.head.removeChild(s)}},1);"
            )
        } else {
            "a();".to_string()
        };

        Some(format!(
            "(function(){{var d=document.documentElement,\
             m=window.matchMedia('(prefers-color-scheme: dark)');\
             function a(){{var t=m.matches?'dark':'light';{apply}d.style.colorScheme=t}}\
             a();m.addEventListener('change',function(){{{on_change}}})}})();"
        ))
    }

    /// Long-lived cookie remembering the chosen mode. Readable by page scripts.
    #[must_use]
    pub fn cookie(&self, mode: ThemeMode, secure: bool) -> Cookie<'static> {
        Cookie::build((THEME_COOKIE, mode.as_str()))
            .path("/")
            .same_site(SameSite::Lax)
            .secure(secure)
            .permanent()
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_modes() {
        assert_eq!("dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert_eq!(" Light ".parse::<ThemeMode>(), Ok(ThemeMode::Light));
        assert_eq!("system".parse::<ThemeMode>(), Ok(ThemeMode::System));
        assert!("sepia".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn resolve_defaults_to_system() {
        assert_eq!(SITE_THEME.resolve(&CookieJar::new()), ThemeMode::System);

        let jar = CookieJar::new().add(Cookie::new(THEME_COOKIE, "sepia"));
        assert_eq!(SITE_THEME.resolve(&jar), ThemeMode::System);
    }

    #[test]
    fn resolve_reads_cookie() {
        let jar = CookieJar::new().add(Cookie::new(THEME_COOKIE, "dark"));
        assert_eq!(SITE_THEME.resolve(&jar), ThemeMode::Dark);
    }

    #[test]
    fn resolve_without_system_support_falls_back_to_light() {
        let provider = ThemeProvider {
            enable_system: false,
            ..SITE_THEME
        };
        assert_eq!(provider.resolve(&CookieJar::new()), ThemeMode::Light);
    }

    #[test]
    fn explicit_mode_renders_class_and_no_script() {
        assert_eq!(
            SITE_THEME.html_attributes(ThemeMode::Dark),
            r#" class="dark" style="color-scheme: dark""#
        );
        assert!(SITE_THEME.script(ThemeMode::Dark).is_none());
    }

    #[test]
    fn system_mode_script_suppresses_transitions() {
        assert_eq!(SITE_THEME.html_attributes(ThemeMode::System), "");
        let script = SITE_THEME.script(ThemeMode::System).unwrap_or_default();
        assert!(script.contains("prefers-color-scheme: dark"));
        assert!(script.contains("classList.add(t)"));
        assert!(script.contains("transition:none!important"));

        let provider = ThemeProvider {
            attribute: "data-theme",
            disable_transition_on_change: false,
            ..SITE_THEME
        };
        let script = provider.script(ThemeMode::System).unwrap_or_default();
        assert!(script.contains("setAttribute('data-theme',t)"));
        assert!(!script.contains("transition:none"));
    }

    #[test]
    fn theme_cookie_is_persistent() {
        let cookie = SITE_THEME.cookie(ThemeMode::Dark, false);
        assert_eq!(cookie.name(), THEME_COOKIE);
        assert_eq!(cookie.value(), "dark");
        assert_eq!(cookie.path(), Some("/"));
        assert!(cookie.max_age().is_some());
    }
}
