use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::auth::Credentials;
use crate::azure::types::RecordSet;
use crate::recordset::RecordType;

const MANAGEMENT_BASE: &str = "https://management.azure.com";
const API_VERSION: &str = "2018-05-01";

/// Thin client for the record-set operations of the Azure DNS
/// management API.
#[derive(Clone)]
pub struct RecordSetClient {
    http: Client,
    base_url: String,
    subscription_id: String,
    bearer_token: String,
}

impl RecordSetClient {
    /// Build a client authenticated as the given service principal.
    pub async fn connect(credentials: &Credentials) -> anyhow::Result<Self> {
        let http = Client::new();
        let bearer_token = credentials.fetch_token(&http).await?;

        Ok(Self {
            http,
            base_url: MANAGEMENT_BASE.to_string(),
            subscription_id: credentials.subscription_id.clone(),
            bearer_token,
        })
    }

    fn auth_header(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req.bearer_auth(&self.bearer_token)
    }

    fn url(
        &self,
        resource_group: &str,
        zone: &str,
        record_name: &str,
        record_type: RecordType,
    ) -> String {
        format!(
            "{}/subscriptions/{}/resourceGroups/{}/providers/Microsoft.Network/dnsZones/{}/{}/{}?api-version={}",
            self.base_url,
            self.subscription_id,
            resource_group,
            zone,
            record_type,
            record_name,
            API_VERSION
        )
    }

    pub async fn get_record_set(
        &self,
        resource_group: &str,
        zone: &str,
        record_name: &str,
        record_type: RecordType,
    ) -> anyhow::Result<RecordSet> {
        let url = self.url(resource_group, zone, record_name, record_type);
        debug!("GET {url}");

        let res = self.auth_header(self.http.get(url)).send().await?;
        if !res.status().is_success() {
            anyhow::bail!(
                "fetching {} record set {} failed with {}",
                record_type,
                record_name,
                res.status()
            );
        }

        Ok(res.json::<RecordSet>().await?)
    }

    /// PUT the record set, creating or replacing it wholesale.
    pub async fn create_or_update_record_set(
        &self,
        resource_group: &str,
        zone: &str,
        record_name: &str,
        record_type: RecordType,
        params: &RecordSet,
    ) -> anyhow::Result<RecordSet> {
        let url = self.url(resource_group, zone, record_name, record_type);
        debug!("PUT {url}");

        let res = self.auth_header(self.http.put(url)).json(params).send().await?;
        if !res.status().is_success() {
            anyhow::bail!(
                "updating {} record set {} failed with {}",
                record_type,
                record_name,
                res.status()
            );
        }

        Ok(res.json::<RecordSet>().await?)
    }

    /// Delete the record set. Deleting a set that does not exist is not
    /// an error; the provider answers 404 and the outcome is the same.
    pub async fn delete_record_set(
        &self,
        resource_group: &str,
        zone: &str,
        record_name: &str,
        record_type: RecordType,
    ) -> anyhow::Result<()> {
        let url = self.url(resource_group, zone, record_name, record_type);
        debug!("DELETE {url}");

        let res = self.auth_header(self.http.delete(url)).send().await?;
        let status = res.status();
        if !status.is_success() && status != StatusCode::NOT_FOUND {
            anyhow::bail!(
                "deleting {} record set {} failed with {}",
                record_type,
                record_name,
                status
            );
        }

        Ok(())
    }
}
