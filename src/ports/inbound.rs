//! Inbound port. UI (adapter) calls into the application.

use crate::domain::DomainError;

/// Input port: UI/CLI drives the styling session.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    /// Run the interactive session until the user quits.
    async fn run(&self) -> Result<(), DomainError>;
}
