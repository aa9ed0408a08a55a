use crate::auth::Credentials;
use crate::azure::client::RecordSetClient;
use crate::config::AppConfig;
use crate::error::AppError;
use crate::recordname::record_name;
use crate::recordset::RecordType;

/// Delete a record set.
pub async fn run(
    config: &AppConfig,
    record_type: RecordType,
    hostname: &str,
    relative: bool,
) -> Result<(), AppError> {
    let resource_group = config.resource_group()?;
    let zone = config.zone()?;
    let name = record_name(hostname, zone, relative);

    let credentials = Credentials::resolve(&config.credentials)?;
    let client = RecordSetClient::connect(&credentials).await?;
    client
        .delete_record_set(resource_group, zone, &name, record_type)
        .await?;

    println!("success");

    Ok(())
}
