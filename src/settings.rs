use serde::Deserialize;

/// Application-wide CORS defaults, loaded once at startup and handed to every
/// [`CorsHandler`](crate::CorsHandler) that is created.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CorsSettings {
    /// Origins allowed on every endpoint. Compared by exact string equality.
    pub cors_origins: Vec<String>,
}

impl CorsSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_origins<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cors_origins: origins.into_iter().map(Into::into).collect(),
        }
    }

    pub fn origins(&self) -> impl Iterator<Item = &str> {
        self.cors_origins.iter().map(String::as_str)
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;
