pub mod api;

use clap::{
    Arg, ArgAction, ColorChoice, Command,
    builder::{
        ValueParser,
        styling::{AnsiColor, Effects, Styles},
    },
};

pub const ARG_PORT: &str = "port";
pub const ARG_VERBOSITY: &str = "verbosity";

/// Accepted `--verbose` / `RATEMYBYTE_LOG_LEVEL` names, quietest first.
const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Accept a level name or its index in [`LOG_LEVELS`].
fn parse_log_level(level: &str) -> Result<u8, String> {
    let level = level.trim();
    if let Ok(index) = level.parse::<u8>() {
        if usize::from(index) < LOG_LEVELS.len() {
            return Ok(index);
        }
    }

    LOG_LEVELS
        .iter()
        .position(|name| name.eq_ignore_ascii_case(level))
        .and_then(|index| u8::try_from(index).ok())
        .ok_or_else(|| format!("invalid log level: {level}"))
}

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("ratemybyte")
        .about("Rate My Byte web session gateway")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new(ARG_PORT)
                .short('p')
                .long(ARG_PORT)
                .help("Port to listen on")
                .default_value("8080")
                .env("RATEMYBYTE_PORT")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new(ARG_VERBOSITY)
                .short('v')
                .long("verbose")
                .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
                .env("RATEMYBYTE_LOG_LEVEL")
                .global(true)
                .action(ArgAction::Count)
                .value_parser(ValueParser::from(parse_log_level)),
        );

    api::with_args(command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{ARG_API_URL, ARG_COOKIE_SECURE};

    // Keep env-driven defaults from leaking into argument tests.
    fn with_cleared_env<F, R>(f: F) -> R
    where
        F: FnOnce() -> R,
    {
        temp_env::with_vars(
            [
                ("RATEMYBYTE_API_URL", None::<&str>),
                ("RATEMYBYTE_PORT", None::<&str>),
                ("RATEMYBYTE_COOKIE_SECURE", None::<&str>),
                ("RATEMYBYTE_LOG_LEVEL", None::<&str>),
            ],
            f,
        )
    }

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "ratemybyte");
        assert_eq!(
            command.get_about().map(ToString::to_string),
            Some("Rate My Byte web session gateway".to_string())
        );
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
    }

    #[test]
    fn test_check_port_and_api_url() {
        with_cleared_env(|| {
            let matches = new().get_matches_from(vec![
                "ratemybyte",
                "--port",
                "3000",
                "--api-url",
                "http://localhost:5000/api/v1",
                "--cookie-secure",
            ]);

            assert_eq!(matches.get_one::<u16>(ARG_PORT).copied(), Some(3000));
            assert_eq!(
                matches.get_one::<String>(ARG_API_URL).cloned(),
                Some("http://localhost:5000/api/v1".to_string())
            );
            assert!(matches.get_flag(ARG_COOKIE_SECURE));
        });
    }

    #[test]
    fn test_defaults() {
        with_cleared_env(|| {
            let matches =
                new().get_matches_from(vec!["ratemybyte", "--api-url", "http://localhost:5000"]);

            assert_eq!(matches.get_one::<u16>(ARG_PORT).copied(), Some(8080));
            assert!(!matches.get_flag(ARG_COOKIE_SECURE));
            assert_eq!(matches.get_one::<u8>(ARG_VERBOSITY).copied(), Some(0));
        });
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("RATEMYBYTE_API_URL", Some("https://api.ratemybyte.dev")),
                ("RATEMYBYTE_PORT", Some("443")),
                ("RATEMYBYTE_COOKIE_SECURE", Some("true")),
                ("RATEMYBYTE_LOG_LEVEL", Some("info")),
            ],
            || {
                let matches = new().get_matches_from(vec!["ratemybyte"]);
                assert_eq!(matches.get_one::<u16>(ARG_PORT).copied(), Some(443));
                assert_eq!(
                    matches.get_one::<String>(ARG_API_URL).cloned(),
                    Some("https://api.ratemybyte.dev".to_string())
                );
                assert!(matches.get_flag(ARG_COOKIE_SECURE));
                assert_eq!(matches.get_one::<u8>(ARG_VERBOSITY).copied(), Some(2));
            },
        );
    }

    #[test]
    fn test_missing_api_url_fails() {
        with_cleared_env(|| {
            let result = new().try_get_matches_from(vec!["ratemybyte"]);
            assert_eq!(
                result.map_err(|e| e.kind()).err(),
                Some(clap::error::ErrorKind::MissingRequiredArgument)
            );
        });
    }

    #[test]
    fn test_check_log_level_env() {
        for (index, &level) in LOG_LEVELS.iter().enumerate() {
            temp_env::with_vars(
                [
                    ("RATEMYBYTE_LOG_LEVEL", Some(level)),
                    ("RATEMYBYTE_API_URL", Some("http://localhost:5000")),
                ],
                || {
                    let matches = new().get_matches_from(vec!["ratemybyte"]);
                    assert_eq!(
                        matches.get_one::<u8>(ARG_VERBOSITY).copied(),
                        u8::try_from(index).ok()
                    );
                },
            );
        }
    }

    #[test]
    fn test_check_log_level_verbosity() {
        for index in 0..LOG_LEVELS.len() {
            with_cleared_env(|| {
                let mut args = vec![
                    "ratemybyte".to_string(),
                    "--api-url".to_string(),
                    "http://localhost:5000".to_string(),
                ];

                // Add the appropriate number of "-v" flags based on the index
                if index > 0 {
                    args.push(format!("-{}", "v".repeat(index)));
                }

                let matches = new().get_matches_from(args);

                assert_eq!(
                    matches.get_one::<u8>(ARG_VERBOSITY).copied(),
                    u8::try_from(index).ok()
                );
            });
        }
    }

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("DEBUG"), Ok(3));
        assert_eq!(parse_log_level("4"), Ok(4));
        assert!(parse_log_level("5").is_err());
        assert!(parse_log_level("loud").is_err());
    }
}
