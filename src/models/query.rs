//! The lookup a user asked for, independent of how it was typed on the command line.

/// IQAir endpoint used by a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    City,
    NearestCity,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::City => "city",
            Endpoint::NearestCity => "nearest_city",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    /// Print usage and exit successfully.
    Help,
    /// Nearest station to the given point.
    Coordinates { lat: f64, lon: f64 },
    /// Nearest station to the caller, located by IP on the provider side.
    NearestCity,
    /// A named city. `state` equals `city` when the user did not give one.
    City {
        city: String,
        country: String,
        state: String,
    },
}

impl Query {
    /// Endpoint for queries that hit the network. `None` for [`Query::Help`].
    pub fn endpoint(&self) -> Option<Endpoint> {
        match self {
            Query::Help => None,
            Query::Coordinates { .. } | Query::NearestCity => Some(Endpoint::NearestCity),
            Query::City { .. } => Some(Endpoint::City),
        }
    }

    /// Query-string parameters, excluding the API key.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            Query::Help | Query::NearestCity => Vec::new(),
            Query::Coordinates { lat, lon } => {
                vec![("lat", lat.to_string()), ("lon", lon.to_string())]
            },
            Query::City {
                city,
                country,
                state,
            } => vec![
                ("city", city.clone()),
                ("state", state.clone()),
                ("country", country.clone()),
            ],
        }
    }
}
