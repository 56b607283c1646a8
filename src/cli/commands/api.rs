use clap::{Arg, ArgAction, ArgMatches, Command};

pub const ARG_API_URL: &str = "api-url";
pub const ARG_COOKIE_SECURE: &str = "cookie-secure";

#[derive(Debug, Clone)]
pub struct Options {
    pub url: String,
    pub cookie_secure: bool,
}

impl Options {
    /// Parse remote API arguments from matches.
    ///
    /// # Errors
    /// Returns an error if the API URL is missing or blank.
    pub fn parse(matches: &ArgMatches) -> anyhow::Result<Self> {
        let url = matches
            .get_one::<String>(ARG_API_URL)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| anyhow::anyhow!("missing required argument: --{ARG_API_URL}"))?;

        Ok(Self {
            url,
            cookie_secure: matches.get_flag(ARG_COOKIE_SECURE),
        })
    }
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_API_URL)
                .long(ARG_API_URL)
                .help("Base URL of the Rate My Byte API, example: https://api.ratemybyte.dev/api/v1")
                .env("RATEMYBYTE_API_URL")
                .required(true),
        )
        .arg(
            Arg::new(ARG_COOKIE_SECURE)
                .long(ARG_COOKIE_SECURE)
                .help("Mark session cookies Secure (serve the site over HTTPS)")
                .env("RATEMYBYTE_COOKIE_SECURE")
                .action(ArgAction::SetTrue),
        )
}
