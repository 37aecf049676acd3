//! Inbound port. UI (adapter) calls into the application.

use crate::domain::DomainError;

/// Input port: CLI/TUI drives the upload client.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    /// Run until the user quits (interactive) or the single submission finishes (one-shot).
    async fn run(&self) -> Result<(), DomainError>;
}
