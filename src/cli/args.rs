//! Command-line parsing.
//!
//! clap collects argv into raw tokens; [`interpret`] decides which [`Query`] they
//! describe. The invocation shapes (flags that may appear anywhere, a mode chosen by
//! the first token) do not map onto a clap subcommand tree, so clap's own help flag
//! is disabled and `-h/--help` are handled here like any other token.

use crate::error::{AppError, Result};
use crate::models::Query;
use clap::Parser;

/// Print the current air quality index for a location (data from IQAir)
#[derive(Parser, Debug)]
#[command(name = "aqi", author, version, about, long_about = None, disable_help_flag = true)]
pub struct Cli {
    /// `<city> <country> [state]`, `--lat <lat> --lon <lon>`, `--nearest` or `--help`
    #[arg(
        value_name = "ARGS",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub tokens: Vec<String>,
}

impl Cli {
    pub fn query(&self) -> Result<Query> {
        interpret(&self.tokens)
    }
}

/// Classifies raw argument tokens (program name excluded) into a [`Query`].
pub fn interpret<S: AsRef<str>>(tokens: &[S]) -> Result<Query> {
    let args: Vec<&str> = tokens.iter().map(AsRef::as_ref).collect();

    match args.first() {
        None | Some(&"-h") | Some(&"--help") => return Ok(Query::Help),
        _ => {},
    }

    let lat_idx = args.iter().position(|a| *a == "--lat");
    let lon_idx = args.iter().position(|a| *a == "--lon");
    if let (Some(lat_idx), Some(lon_idx)) = (lat_idx, lon_idx) {
        let (Some(lat), Some(lon)) = (args.get(lat_idx + 1), args.get(lon_idx + 1)) else {
            return Err(AppError::usage("--lat and --lon require values"));
        };
        return Ok(Query::Coordinates {
            lat: parse_coordinate("latitude", lat)?,
            lon: parse_coordinate("longitude", lon)?,
        });
    }

    if args[0] == "--nearest" {
        return Ok(Query::NearestCity);
    }

    match args.as_slice() {
        [city, country, rest @ ..] => {
            let state = rest.first().copied().unwrap_or(*city);
            Ok(Query::City {
                city: city.to_string(),
                country: country.to_string(),
                state: state.to_string(),
            })
        },
        _ => Err(AppError::Usage {
            message: "Provide city and country (and optionally state)".to_string(),
            hint: Some("Usage: aqi <city> <country> [state]".to_string()),
        }),
    }
}

fn parse_coordinate(name: &str, raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| AppError::usage(format!("Invalid {} '{}'", name, raw)))
}
