use crate::auth::Credentials;
use crate::azure::client::RecordSetClient;
use crate::config::AppConfig;
use crate::error::AppError;
use crate::recordname::record_name;
use crate::recordset::{self, RecordType};

/// Create or replace a record set from raw values. The payload is built
/// and validated before any network traffic.
pub async fn run(
    config: &AppConfig,
    record_type: RecordType,
    hostname: &str,
    values: &[String],
    ttl: u32,
    relative: bool,
) -> Result<(), AppError> {
    let resource_group = config.resource_group()?;
    let zone = config.zone()?;
    let name = record_name(hostname, zone, relative);

    let params = recordset::build(record_type, ttl, values)?;

    let credentials = Credentials::resolve(&config.credentials)?;
    let client = RecordSetClient::connect(&credentials).await?;
    client
        .create_or_update_record_set(resource_group, zone, &name, record_type, &params)
        .await?;

    println!("success");

    Ok(())
}
