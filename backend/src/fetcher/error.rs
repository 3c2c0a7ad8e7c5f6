//! Error types for contribution fetching.

/// Result type for fetcher operations
pub type FetchResult<T> = Result<T, FetchError>;

/// Everything that can go wrong while fetching a contribution history.
///
/// Each variant carries a message that can be shown to the end user as is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("Username query parameter is required")]
    MissingUsername,

    #[error("GitHub token not configured")]
    MissingToken,

    /// The upstream API answered with a non-success status.
    #[error("GitHub API responded with {status} for year {year}")]
    Http { status: u16, year: i32, body: String },

    /// The GraphQL response carried an `errors` array.
    #[error("Error fetching data for year {year}: {}", messages.join("; "))]
    GraphQl { year: i32, messages: Vec<String> },

    #[error("No contribution data found for user '{username}'")]
    NoData { username: String },

    /// The request never produced a response (DNS, TLS, timeout, ...).
    #[error("Failed to reach GitHub: {0}")]
    Transport(String),

    #[error("Failed to decode GitHub response: {0}")]
    Decode(String),
}

impl FetchError {
    /// Upstream detail worth returning alongside the message, if any.
    pub fn details(&self) -> Option<String> {
        match self {
            FetchError::Http { body, .. } if !body.is_empty() => Some(body.clone()),
            FetchError::GraphQl { messages, .. } => Some(messages.join("\n")),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            FetchError::MissingUsername.to_string(),
            "Username query parameter is required"
        );
        let http = FetchError::Http {
            status: 502,
            year: 2023,
            body: "bad gateway".to_string(),
        };
        assert_eq!(http.to_string(), "GitHub API responded with 502 for year 2023");
        assert_eq!(http.details().as_deref(), Some("bad gateway"));

        let gql = FetchError::GraphQl {
            year: 2021,
            messages: vec!["a".to_string(), "b".to_string()],
        };
        assert_eq!(gql.to_string(), "Error fetching data for year 2021: a; b");
        assert!(FetchError::MissingToken.details().is_none());
    }
}
