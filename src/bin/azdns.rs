use anyhow::Result;
use clap::{Parser, Subcommand};

use azdns::commands;
use azdns::config::{AppConfig, CredentialOptions};
use azdns::recordset::RecordType;

#[derive(Parser, Debug)]
#[command(
    name = "azdns",
    version,
    about = "Azure DNS record set manipulator",
    long_about = "A simple command-line tool for manipulating Azure DNS record sets.

This client provides an easy way to view and manipulate record sets in Azure
DNS. It authenticates as an Azure Active Directory service principal, using
credentials provided via command-line flags, environment variables, or an
Azure SDK auth file with its path in $AZURE_AUTH_LOCATION.",
    rename_all = "kebab-case"
)]
struct Cli {
    /// Azure client ID
    #[arg(long, value_name = "ID", env = "AZURE_CLIENT_ID", global = true)]
    client_id: Option<String>,
    /// Azure client secret
    #[arg(long, value_name = "SECRET", env = "AZURE_CLIENT_SECRET", global = true)]
    client_secret: Option<String>,
    /// Azure tenant ID
    #[arg(long, value_name = "ID", env = "AZURE_TENANT_ID", global = true)]
    tenant_id: Option<String>,
    /// Azure subscription ID
    #[arg(long, value_name = "ID", env = "AZURE_SUBSCRIPTION_ID", global = true)]
    subscription_id: Option<String>,
    /// Name of the resource group
    #[arg(short = 'g', long, value_name = "NAME", env = "AZURE_RESOURCE_GROUP", global = true)]
    resource_group: Option<String>,
    /// Name of the DNS zone
    #[arg(short = 'z', long, value_name = "ZONE", env = "AZURE_ZONE", global = true)]
    zone: Option<String>,
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Retrieve a DNS record set
    #[command(
        long_about = "Retrieve a record set from Azure DNS

This will print the contents of a particular record set on Azure DNS. The
currently-supported record types are A, AAAA, CAA, CNAME, and TXT. HOSTNAME
may be a fully-qualified domain name contained within the zone, a record name
relative to the zone, or either the empty string or @ for the apex. If a
record name contains the zone name (e.g. example.com.example.com), you should
either provide the FQDN or use the --relative flag.",
        after_help = "Examples:
    azdns get A example.com -z example.com
        Prints A records for example.com
    azdns get AAAA sub -z example.com
        Prints AAAA records for sub.example.com
    azdns get CNAME sub.example.com -r -z example.com
        Prints the CNAME record for sub.example.com.example.com"
    )]
    Get {
        /// Record type (A, AAAA, CAA, CNAME, or TXT)
        #[arg(value_name = "TYPE")]
        record_type: RecordType,
        /// Hostname, FQDN, or empty/@ for the zone apex
        #[arg(value_name = "HOSTNAME")]
        hostname: String,
        /// HOSTNAME is a zone-relative label
        #[arg(short, long)]
        relative: bool,
    },
    /// Create or update a DNS record set
    #[command(
        long_about = "Create or update a record set in Azure DNS

This will create or update a record set on Azure DNS, depending on whether a
record of the same type already exists for the provided value of HOSTNAME.
The currently-supported record types are A, AAAA, CAA, and TXT. HOSTNAME may
be a fully-qualified domain name contained within the zone, a record name
relative to the zone, or either the empty string or @ for the apex. If a
record name contains the zone name (e.g. example.com.example.com), you should
either provide the FQDN or use the --relative flag.",
        after_help = "Examples:
    azdns set A example.com 1.1.1.1 -z example.com
        Creates an A record at the apex of example.com pointing to 1.1.1.1
    azdns set A sub 1.1.1.1 2.2.2.2 -z example.com
        Creates an A record for sub.example.com pointing to 1.1.1.1 and 2.2.2.2
    azdns set AAAA local.example.com ::1 -t 600 -r -z example.com
        Creates an AAAA record for local.example.com.example.com with TTL of
        600 pointing at ::1
    azdns set CAA example.com 0 issue letsencrypt.org -z example.com
        Creates a CAA record at the apex of example.com with value:
            0 issue \"letsencrypt.org\"
    azdns set CAA @ 0 issue letsencrypt.org 0 issuewild ';' -z example.com
        Creates CAA records at the apex of example.com with values:
            0 issue \"letsencrypt.org\"
            0 issuewild \";\""
    )]
    Set {
        /// Record type (A, AAAA, CAA, or TXT)
        #[arg(value_name = "TYPE")]
        record_type: RecordType,
        /// Hostname, FQDN, or empty/@ for the zone apex
        #[arg(value_name = "HOSTNAME")]
        hostname: String,
        /// Record values; CAA takes flags, tag, and value per record
        #[arg(value_name = "VALUES", required = true, num_args = 1..)]
        values: Vec<String>,
        /// Record set TTL in seconds
        #[arg(short, long, value_name = "SECONDS", default_value_t = 300)]
        ttl: u32,
        /// HOSTNAME is a zone-relative label
        #[arg(short, long)]
        relative: bool,
    },
    /// Delete a DNS record set
    #[command(
        long_about = "Delete a record set from Azure DNS

This will remove a record set from Azure DNS. HOSTNAME may be a
fully-qualified domain name contained within the zone, a record name relative
to the zone, or either the empty string or @ for the apex. If a record name
contains the zone name (e.g. example.com.example.com), you should either
provide the FQDN or use the --relative flag.",
        after_help = "Examples:
    azdns clear A example.com -z example.com
        Removes the A record at the apex of example.com
    azdns clear TXT sub -z example.com
        Removes the TXT record for sub.example.com"
    )]
    Clear {
        /// Record type (A, AAAA, CAA, CNAME, or TXT)
        #[arg(value_name = "TYPE")]
        record_type: RecordType,
        /// Hostname, FQDN, or empty/@ for the zone apex
        #[arg(value_name = "HOSTNAME")]
        hostname: String,
        /// HOSTNAME is a zone-relative label
        #[arg(short, long)]
        relative: bool,
    },
    /// Print version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = build_app_config(&cli);

    match &cli.command {
        Command::Get {
            record_type,
            hostname,
            relative,
        } => commands::get::run(&config, *record_type, hostname, *relative).await?,
        Command::Set {
            record_type,
            hostname,
            values,
            ttl,
            relative,
        } => commands::set::run(&config, *record_type, hostname, values, *ttl, *relative).await?,
        Command::Clear {
            record_type,
            hostname,
            relative,
        } => commands::clear::run(&config, *record_type, hostname, *relative).await?,
        Command::Version => {
            println!("azdns version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

fn build_app_config(cli: &Cli) -> AppConfig {
    AppConfig {
        resource_group: cli.resource_group.clone(),
        zone: cli.zone.clone(),
        credentials: CredentialOptions {
            client_id: cli.client_id.clone(),
            client_secret: cli.client_secret.clone(),
            tenant_id: cli.tenant_id.clone(),
            subscription_id: cli.subscription_id.clone(),
        },
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
