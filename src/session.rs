use axum::http::HeaderMap;

/// What the identity provider tells us about the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    Anonymous,
    SignedIn { display_name: String },
}

impl Session {
    pub fn signed_in(display_name: impl Into<String>) -> Self {
        Session::SignedIn {
            display_name: display_name.into(),
        }
    }

    /// Reads the display name an upstream auth proxy put in `header`.
    /// A missing, blank or non-UTF-8 value means no session.
    pub fn from_headers(headers: &HeaderMap, header: &str) -> Self {
        headers
            .get(header)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(Session::signed_in)
            .unwrap_or_default()
    }

    pub fn greeting(&self) -> Option<String> {
        match self {
            Session::Anonymous => None,
            Session::SignedIn { display_name } => Some(format!("Welcome, {}!", display_name)),
        }
    }
}
