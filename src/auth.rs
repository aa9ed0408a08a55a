//! Service-principal credential resolution and bearer token acquisition.
use std::path::Path;

use anyhow::{Context, bail};
use serde::Deserialize;
use tracing::debug;

use crate::config::CredentialOptions;
use crate::error::AppError;

/// Environment variable naming an Azure SDK auth file, as written by
/// `az ad sp create-for-rbac --sdk-auth`.
pub const AUTH_FILE_ENV: &str = "AZURE_AUTH_LOCATION";

const DEFAULT_ACTIVE_DIRECTORY_ENDPOINT: &str = "https://login.microsoftonline.com";
const MANAGEMENT_SCOPE: &str = "https://management.azure.com/.default";

/// A complete set of service-principal credentials.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub tenant_id: String,
    pub subscription_id: String,
    pub active_directory_endpoint: String,
}

/// On-disk shape of an SDK auth file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthFile {
    client_id: String,
    client_secret: String,
    tenant_id: String,
    subscription_id: String,
    #[serde(default)]
    active_directory_endpoint_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

impl Credentials {
    /// Resolve credentials from an auth file if `$AZURE_AUTH_LOCATION`
    /// points at a readable one, falling back to the explicitly provided
    /// options. A missing option fails naming the flag.
    pub fn resolve(options: &CredentialOptions) -> Result<Self, AppError> {
        if let Ok(path) = std::env::var(AUTH_FILE_ENV) {
            match Self::from_auth_file(Path::new(&path)) {
                Ok(credentials) => return Ok(credentials),
                Err(err) => debug!("ignoring auth file {path}: {err:#}"),
            }
        }

        Self::from_options(options)
    }

    /// Load credentials from an SDK auth file.
    pub fn from_auth_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read auth file {}", path.display()))?;
        let file: AuthFile = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse auth file {}", path.display()))?;

        let endpoint = file
            .active_directory_endpoint_url
            .unwrap_or_else(|| DEFAULT_ACTIVE_DIRECTORY_ENDPOINT.to_string());

        Ok(Self {
            client_id: file.client_id,
            client_secret: file.client_secret,
            tenant_id: file.tenant_id,
            subscription_id: file.subscription_id,
            active_directory_endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }

    fn from_options(options: &CredentialOptions) -> Result<Self, AppError> {
        Ok(Self {
            client_id: require(&options.client_id, "client-id")?,
            client_secret: require(&options.client_secret, "client-secret")?,
            tenant_id: require(&options.tenant_id, "tenant-id")?,
            subscription_id: require(&options.subscription_id, "subscription-id")?,
            active_directory_endpoint: DEFAULT_ACTIVE_DIRECTORY_ENDPOINT.to_string(),
        })
    }

    /// Obtain a bearer token for the management API via the OAuth2
    /// client-credentials flow.
    pub async fn fetch_token(&self, http: &reqwest::Client) -> anyhow::Result<String> {
        let token_url = format!(
            "{}/{}/oauth2/v2.0/token",
            self.active_directory_endpoint, self.tenant_id
        );

        let res = http
            .post(&token_url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("scope", MANAGEMENT_SCOPE),
            ])
            .send()
            .await
            .context("token request failed")?;

        if !res.status().is_success() {
            bail!("token request failed with {}", res.status());
        }

        let token: TokenResponse = res
            .json()
            .await
            .context("failed to parse token response")?;

        Ok(token.access_token)
    }
}

fn require(value: &Option<String>, option: &'static str) -> Result<String, AppError> {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
        .ok_or(AppError::MissingCredential(option))
}
