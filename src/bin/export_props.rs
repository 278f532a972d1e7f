/// Export the merged property map without going through the HTTP layer
///
/// Usage:
///   cargo run --bin export_props
///   cargo run --bin export_props -- --format dotenv --output props.env
use clap::{Parser, ValueEnum};
use sysprops_service::properties::{merge_secrets, runtime_properties};
use sysprops_service::secret_store::AwsSecretStore;
use sysprops_service::{config, observability};

#[derive(Parser, Debug)]
#[command(name = "export_props")]
#[command(about = "Export runtime properties merged with secret values", long_about = None)]
struct Args {
    /// Output format
    #[arg(short, long, default_value = "json")]
    format: Format,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    output: Option<String>,

    /// Configuration file path
    #[arg(long, env = "SYSPROPS_CONFIG", default_value = "config/sysprops.toml")]
    config: String,
}

#[derive(Debug, Clone, ValueEnum)]
enum Format {
    Json,
    Dotenv,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    observability::init_tracing();
    let args = Args::parse();

    let cfg = config::load(&args.config).await?;
    if cfg.is_in_maintenance() {
        anyhow::bail!("service is in maintenance; refusing to export");
    }

    let store = AwsSecretStore::from_config(&cfg.secret_store).await;
    let mut properties = runtime_properties();
    merge_secrets(&store, cfg.secret_store.max_results, &mut properties).await?;

    let output = match args.format {
        Format::Json => serde_json::to_string_pretty(&properties)?,
        Format::Dotenv => properties
            .iter()
            .map(|(key, value)| format!("{}={}", dotenv_key(key), value))
            .collect::<Vec<_>>()
            .join("\n"),
    };

    if let Some(path) = args.output {
        std::fs::write(&path, &output)?;
        eprintln!("exported {} properties to {}", properties.len(), path);
    } else {
        println!("{}", output);
    }

    Ok(())
}

/// Uppercase and replace everything outside [A-Za-z0-9_] for dotenv keys.
fn dotenv_key(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}
