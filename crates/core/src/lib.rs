pub mod deck;
pub mod domain;
pub mod slidegen;
pub mod stats;
pub mod suggest;

pub mod config {
    use anyhow::Context;

    #[derive(Debug, Clone)]
    pub struct Settings {
        pub slidegen_api_key: Option<String>,
        pub sentry_dsn: Option<String>,
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            Ok(Self {
                slidegen_api_key: std::env::var("SLIDEGEN_API_KEY").ok(),
                sentry_dsn: std::env::var("SENTRY_DSN").ok(),
            })
        }

        pub fn require_slidegen_api_key(&self) -> anyhow::Result<&str> {
            self.slidegen_api_key
                .as_deref()
                .context("SLIDEGEN_API_KEY is required")
        }
    }
}
