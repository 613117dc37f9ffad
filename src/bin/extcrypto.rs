use anyhow::Context;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use std::io::{self, Read, Write};
use tracing::error;

use extcrypto::{extract_rsa_public_key, generate_rsa_private_key};

#[derive(Parser, Debug)]
#[command(name = "extcrypto")]
#[command(about = "RSA PEM keypair helpers", version)]
pub struct Cli {
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate an RSA private key and print it followed by its public key
    Generate,

    /// Read RSA private key PEM from stdin and print the public key
    Extract,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.verbosity.tracing_level_filter())
        .init();

    match cli.command {
        Commands::Generate => {
            let private_key = generate_rsa_private_key()
                .await
                .context("failed to generate RSA private key")?;
            print!("{}", private_key.as_str());

            let public_key = extract_rsa_public_key(private_key.as_str())
                .await
                .context("failed to extract RSA public key")?;
            print!("{}", public_key);
        }

        Commands::Extract => {
            let mut pem = String::new();
            io::stdin().read_to_string(&mut pem)?;

            match extract_rsa_public_key(&pem).await {
                Ok(public_key) => {
                    io::stdout().write_all(public_key.as_str().as_bytes())?;
                }
                Err(e) => {
                    error!("Failed to extract public key: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_cmd::Command;

    #[test]
    fn test_cli_version_parameter() {
        let mut cmd = Command::cargo_bin("extcrypto").unwrap();
        let assert = cmd.arg("--version").assert();
        assert.success();
    }

    #[test]
    fn test_cli_extract_rejects_garbage_input() {
        let mut cmd = Command::cargo_bin("extcrypto").unwrap();
        let assert = cmd.arg("extract").write_stdin("not a key").assert();
        assert.failure();
    }
}
