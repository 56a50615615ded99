use thiserror::Error;

#[derive(Error, Debug)]
pub enum RouteError {
    #[error("no eligible agent for capabilities: {}", .required.join(", "))]
    NoEligibleAgent { required: Vec<String> },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("agent store error: {0}")]
    Store(String),

    #[error("execution failed: {0}")]
    Execution(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl RouteError {
    /// Hard selection failure: the pool has no agent worth assigning.
    /// Recoverable only by widening the agent pool.
    pub fn is_no_eligible_agent(&self) -> bool {
        matches!(self, Self::NoEligibleAgent { .. })
    }
}

pub type Result<T> = std::result::Result<T, RouteError>;
