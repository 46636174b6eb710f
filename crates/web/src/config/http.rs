//! HTTP listener and session cookie settings.

use std::{fmt, time::Duration};

use clap::Args;

/// Cookie signing keys need at least this many bytes.
const MIN_SESSION_SECRET_LEN: usize = 64;

/// Where the storefront listens and how it signs session cookies.
#[derive(Debug, Args)]
pub struct HttpConfig {
    /// Server host address
    #[arg(short = 'H', long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Server port
    #[arg(short, long, env = "SERVER_PORT", default_value = "8080")]
    pub port: u16,

    /// Secret used to sign and encrypt session cookies (at least 64 bytes)
    #[arg(
        long,
        env = "SESSION_SECRET",
        hide_env_values = true,
        value_parser = SessionSecret::parse
    )]
    pub session_secret: SessionSecret,

    /// Seconds in-flight requests get to finish after a shutdown signal
    #[arg(long, env = "SHUTDOWN_GRACE_SECS", default_value_t = 30_u64)]
    pub shutdown_grace_secs: u64,
}

impl HttpConfig {
    /// Address the listener binds to.
    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    #[must_use]
    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_secs(self.shutdown_grace_secs)
    }
}

/// Session signing key. Never printed.
#[derive(Clone)]
pub struct SessionSecret(String);

impl SessionSecret {
    fn parse(value: &str) -> Result<Self, String> {
        if value.len() < MIN_SESSION_SECRET_LEN {
            return Err(format!(
                "session secret must be at least {MIN_SESSION_SECRET_LEN} bytes, got {}",
                value.len()
            ));
        }

        Ok(Self(value.to_string()))
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for SessionSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionSecret([redacted])")
    }
}
