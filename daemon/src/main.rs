//! native-auth: issue, sign, decode and validate MultiversX native-auth tokens.

mod config;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use nauth_client::NativeAuthClient;
use nauth_crypto::{parse_pem, sign_message};
use nauth_protocol::{encode_access, signable_payload};
use nauth_server::NativeAuthServer;
use nauth_types::Timestamp;
use serde_json::Value;

use crate::config::CliConfig;

#[derive(Parser)]
#[command(name = "native-auth", about = "MultiversX native-auth token tool")]
struct Cli {
    /// Path to a TOML configuration file with `[client]` and `[server]`
    /// sections. CLI flags and env vars override it.
    #[arg(long, env = "NATIVE_AUTH_CONFIG")]
    config: Option<PathBuf>,

    /// Ledger API base URL, for both issuing and validating.
    #[arg(long, env = "NATIVE_AUTH_API_URL")]
    api_url: Option<String>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, default_value = "info", env = "NATIVE_AUTH_LOG_LEVEL")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Fetch the latest block and print a challenge to sign.
    Init {
        /// Host the token is for (defaults to config, then the local hostname).
        #[arg(long)]
        host: Option<String>,

        /// Validity window in seconds.
        #[arg(long)]
        ttl: Option<u64>,

        /// Extra info as a JSON object.
        #[arg(long)]
        extra_info: Option<String>,
    },

    /// Sign a challenge with a PEM wallet and print the access token.
    Sign {
        #[arg(long)]
        pem: PathBuf,

        /// The challenge printed by `init`.
        #[arg(long)]
        token: String,
    },

    /// Assemble an access token from an externally produced signature.
    Token {
        #[arg(long)]
        address: String,

        #[arg(long)]
        token: String,

        /// Hex signature over `${address}${token}{}`.
        #[arg(long)]
        signature: String,
    },

    /// Print the claims of an access token without checking anything.
    Decode { access_token: String },

    /// Fully validate an access token against the ledger.
    Validate {
        access_token: String,

        /// Accepted host; repeat for several. Replaces the configured list.
        #[arg(long = "accepted-host")]
        accepted_hosts: Vec<String>,

        /// Maximum ttl in seconds a token may carry.
        #[arg(long)]
        max_expiry: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    nauth_utils::init_tracing(&cli.log_level);

    let mut config = CliConfig::load(cli.config.as_deref())?;
    if let Some(ref api_url) = cli.api_url {
        config.override_api_url(api_url);
    }

    match cli.command {
        Command::Init {
            host,
            ttl,
            extra_info,
        } => {
            let mut client_config = config.client;
            if let Some(host) = host {
                client_config.host = host;
            }
            if let Some(ttl) = ttl {
                client_config.expiry_seconds = ttl;
            }
            let extra_info = extra_info
                .map(|raw| serde_json::from_str::<Value>(&raw))
                .transpose()
                .context("--extra-info is not valid JSON")?;

            let client = NativeAuthClient::new(client_config)?;
            let challenge = client.initialize(extra_info).await?;
            println!("{challenge}");
        }

        Command::Sign { pem, token } => {
            let contents = std::fs::read_to_string(&pem)
                .with_context(|| format!("reading {}", pem.display()))?;
            let wallet = parse_pem(&contents)?;
            let payload = signable_payload(&wallet.address, &token);
            let signature = sign_message(payload.as_bytes(), &wallet.keypair.private);
            tracing::debug!(address = %wallet.address, "signed challenge");
            println!("{}", encode_access(&wallet.address, &token, &signature.to_hex()));
        }

        Command::Token {
            address,
            token,
            signature,
        } => {
            println!("{}", encode_access(&address, &token, &signature));
        }

        Command::Decode { access_token } => {
            let server = NativeAuthServer::new(config.server)?;
            let decoded = server.decode(&access_token)?;
            println!("{}", serde_json::to_string_pretty(&decoded)?);
        }

        Command::Validate {
            access_token,
            accepted_hosts,
            max_expiry,
        } => {
            let mut server_config = config.server;
            if !accepted_hosts.is_empty() {
                server_config.accepted_hosts = accepted_hosts;
            }
            if max_expiry.is_some() {
                server_config.max_expiry_seconds = max_expiry;
            }

            let server = NativeAuthServer::new(server_config)?;
            match server.validate(&access_token).await {
                Ok(result) => {
                    println!("{}", serde_json::to_string_pretty(&result)?);
                    let remaining = Timestamp::now().seconds_until(result.expires);
                    eprintln!(
                        "valid; expires at {} (about {} from now by the local clock)",
                        result.expires,
                        nauth_utils::format_duration(remaining)
                    );
                }
                Err(e) => anyhow::bail!("{}: {e}", e.kind()),
            }
        }
    }

    Ok(())
}
