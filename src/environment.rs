use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Where the assessment API lives.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// Local development server (Flask default port).
    #[default]
    Local,
    /// Any other deployment, addressed by its base URL.
    Custom { api_base_url: String },
}

impl Environment {
    /// Returns the API base URL associated with the environment.
    pub fn api_base_url(&self) -> String {
        match self {
            Environment::Local => "http://localhost:5000".to_string(),
            Environment::Custom { api_base_url } => api_base_url.clone(),
        }
    }

    /// Resolves the environment from the places a URL can come from, in
    /// precedence order: `--api-url` flag, `LEADERSHIP_API_URL` variable,
    /// saved configuration file, local default.
    pub fn resolve(
        cli_url: Option<&str>,
        env_url: Option<&str>,
        saved_url: Option<&str>,
    ) -> Self {
        cli_url
            .or(env_url)
            .or(saved_url)
            .and_then(|url| url.parse::<Environment>().ok())
            .unwrap_or_default()
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(());
        }
        if s.eq_ignore_ascii_case("local") {
            return Ok(Environment::Local);
        }
        if s.starts_with("http://") || s.starts_with("https://") {
            return Ok(Environment::Custom {
                api_base_url: s.trim_end_matches('/').to_string(),
            });
        }
        Err(())
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Custom { api_base_url } => write!(f, "{}", api_base_url),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.api_base_url())
    }
}
