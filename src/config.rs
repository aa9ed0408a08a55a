use crate::error::AppError;

/// Process-wide configuration, assembled once from flags and environment
/// in the binary and passed by reference into the command handlers.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub resource_group: Option<String>,
    pub zone: Option<String>,
    pub credentials: CredentialOptions,
}

/// Service-principal credential fields as provided on the command line or
/// via `AZURE_*` environment variables. Any of them may be absent when an
/// SDK auth file supplies the credentials instead.
#[derive(Debug, Clone, Default)]
pub struct CredentialOptions {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub tenant_id: Option<String>,
    pub subscription_id: Option<String>,
}

impl AppConfig {
    /// The resource group holding the zone; required for every command.
    pub fn resource_group(&self) -> Result<&str, AppError> {
        require(&self.resource_group, "resource group name")
    }

    /// The DNS zone of interest; required for every command.
    pub fn zone(&self) -> Result<&str, AppError> {
        require(&self.zone, "DNS zone name")
    }
}

fn require<'a>(value: &'a Option<String>, what: &'static str) -> Result<&'a str, AppError> {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .ok_or(AppError::MissingConfig(what))
}
