//! Maps validated CLI arguments to the action the binary runs.

use crate::cli::actions::{Action, server::Args};
use crate::cli::commands::{ARG_PORT, api};
use anyhow::Result;

/// Map validated CLI matches to a server action.
///
/// # Errors
/// Returns an error if the API URL is missing.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let port = matches.get_one::<u16>(ARG_PORT).copied().unwrap_or(8080);
    let api_opts = api::Options::parse(matches)?;

    Ok(Action::Server(Args {
        port,
        api_url: api_opts.url,
        cookie_secure: api_opts.cookie_secure,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands;

    #[test]
    fn server_action_from_env() {
        temp_env::with_vars(
            [
                ("RATEMYBYTE_API_URL", Some("http://localhost:5000/api/v1")),
                ("RATEMYBYTE_PORT", Some("3000")),
                ("RATEMYBYTE_COOKIE_SECURE", None::<&str>),
                ("RATEMYBYTE_LOG_LEVEL", None::<&str>),
            ],
            || {
                let matches = commands::new().get_matches_from(vec!["ratemybyte"]);
                let action = handler(&matches);
                assert!(action.is_ok());

                if let Ok(Action::Server(args)) = action {
                    assert_eq!(args.port, 3000);
                    assert_eq!(args.api_url, "http://localhost:5000/api/v1");
                    assert!(!args.cookie_secure);
                }
            },
        );
    }

    #[test]
    fn blank_api_url_is_rejected() {
        temp_env::with_vars(
            [
                ("RATEMYBYTE_API_URL", None::<&str>),
                ("RATEMYBYTE_PORT", None::<&str>),
            ],
            || {
                let matches =
                    commands::new().get_matches_from(vec!["ratemybyte", "--api-url", "  "]);
                assert!(handler(&matches).is_err());
            },
        );
    }
}
