//! Login and register command handlers.

use anyhow::{Result, anyhow};
use vigil_core::auth::{AuthAction, AuthClient, ErrorKind};
use vigil_core::config::Config;
use vigil_core::validate::Credentials;

pub async fn run(
    config: &Config,
    action: AuthAction,
    email: String,
    password: String,
) -> Result<()> {
    let client = AuthClient::new(&config.api)?;
    let credentials = Credentials::new(email.trim(), password);

    match client.submit(action, &credentials).await {
        Ok(_session) => {
            println!("{}", action.success_message());
            println!("→ {}", action.landing_route());
            Ok(())
        }
        Err(err) if err.kind() == ErrorKind::Validation => Err(err.into()),
        Err(err) => {
            tracing::warn!(%action, kind = ?err.kind(), error = %err, "Auth command failed");
            Err(anyhow!(action.failure_message()))
        }
    }
}
