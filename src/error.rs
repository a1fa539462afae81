/// Rejected [`Config`](crate::config::Config) values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The trail must keep at least one indicator lit behind the leading edge.
    ZeroTrailLength,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroTrailLength => write!(f, "trail length must be at least 1"),
        }
    }
}

impl core::error::Error for ConfigError {}
