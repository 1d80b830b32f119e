//! `seedsecret` command line: derive reproducible secrets from a name.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use seedsecret_core_rs::{
    generate, generate_bundle, generate_passphrase_with, validate_number_properties,
    validate_password_strength, BundleError, BundleRequest, CapitalizationSource, ConfigError,
    GenerationError, GeneratorConfig, PassphraseMode, SecretKind,
};
use seedsecret_core_rs::seed::trim_whitespace;
use thiserror::Error;
use tracing::{debug, warn};
use tracing_subscriber::{fmt, EnvFilter};

/// `seedsecret` command arguments.
#[derive(Debug, Parser)]
#[command(
    name = "seedsecret",
    about = "Derive reproducible passwords, PINs and passphrases from a name",
    version
)]
struct CliArgs {
    /// JSON generator config with per-kind length ranges.
    #[arg(long, value_name = "path", global = true)]
    config: Option<PathBuf>,

    /// Log at debug level unless `RUST_LOG` says otherwise.
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Capitalize generated passphrases from the ambient generator, as the
    /// legacy tool did. Output is then not reproducible.
    #[arg(long = "ambient-capitals", global = true)]
    ambient_capitals: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Derive one secret.
    Generate {
        /// password, uppercase, lowercase, number, pin, hex or passphrase
        #[arg(value_parser = parse_kind)]
        kind: SecretKind,
        #[arg(long)]
        name: String,
        /// Ignored for the passphrase kind.
        #[arg(long, default_value = "")]
        passphrase: String,
        /// Defaults to the configured length for the kind.
        #[arg(long)]
        length: Option<usize>,
    },
    /// Derive every kind from one name.
    Bundle {
        #[arg(long)]
        name: String,
        #[arg(long, conflicts_with = "generate_passphrase")]
        passphrase: Option<String>,
        /// Generate the passphrase from the name, optionally at a given length.
        #[arg(long = "generate-passphrase", value_name = "length")]
        generate_passphrase: Option<Option<usize>>,
        /// Print the bundle as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Score a password as Strong, Medium or Weak.
    Strength { password: String },
    /// Describe a number string.
    Inspect {
        number: String,
        /// Print the properties as JSON.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error("--name must not be empty")]
    EmptyName,

    #[error("{kind} length {length} outside allowed range [{min}, {max}]")]
    LengthOutOfRange {
        kind: SecretKind,
        length: usize,
        min: usize,
        max: usize,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Bundle(#[from] BundleError),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    match run(args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("seedsecret: {error}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if let Err(e) = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
}

fn parse_kind(raw: &str) -> Result<SecretKind, String> {
    raw.parse::<SecretKind>().map_err(|error| error.to_string())
}

fn load_config(args: &CliArgs) -> Result<GeneratorConfig, CliError> {
    let mut config = match &args.config {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            GeneratorConfig::from_path(path)?
        }
        None => GeneratorConfig::default(),
    };
    if args.ambient_capitals {
        config.capitalization = CapitalizationSource::Ambient;
    }
    Ok(config)
}

/// Execute the parsed command and return what should be printed.
fn run(args: CliArgs) -> Result<String, CliError> {
    let config = load_config(&args)?;

    match args.command {
        Command::Generate {
            kind,
            name,
            passphrase,
            length,
        } => {
            let name = trim_whitespace(&name);
            if name.is_empty() {
                return Err(CliError::EmptyName);
            }

            let range = config.range(kind);
            let length = length.unwrap_or(range.default);
            if !range.contains(length) {
                return Err(CliError::LengthOutOfRange {
                    kind,
                    length,
                    min: range.min,
                    max: range.max,
                });
            }

            let secret = match kind {
                SecretKind::Passphrase => {
                    generate_passphrase_with(name, length, config.capitalization)?
                }
                _ => generate(kind, name, &passphrase, length)?,
            };
            Ok(secret)
        }
        Command::Bundle {
            name,
            passphrase,
            generate_passphrase,
            json,
        } => {
            let mut request = BundleRequest::new(name);
            if let Some(text) = passphrase {
                request = request.with_passphrase(PassphraseMode::Custom { text });
            }
            if let Some(length) = generate_passphrase {
                request = request.with_passphrase(PassphraseMode::Generate);
                if let Some(length) = length {
                    request = request.with_length(SecretKind::Passphrase, length);
                }
            }

            let bundle = generate_bundle(&config, &request)?;
            if json {
                return Ok(serde_json::to_string_pretty(&bundle)?);
            }

            let mut lines = Vec::new();
            if let Some(passphrase) = &bundle.passphrase {
                lines.push(format!("passphrase  {passphrase}"));
            }
            lines.push(format!(
                "password    {} ({})",
                bundle.password, bundle.password_strength
            ));
            lines.push(format!("number      {}", bundle.number));
            lines.push(format!("uppercase   {}", bundle.uppercase));
            lines.push(format!("lowercase   {}", bundle.lowercase));
            lines.push(format!("pin         {}", bundle.pin));
            lines.push(format!("hex         {}", bundle.hex));
            Ok(lines.join("\n"))
        }
        Command::Strength { password } => Ok(validate_password_strength(&password).to_string()),
        Command::Inspect { number, json } => {
            let props = validate_number_properties(&number);
            if json {
                return Ok(serde_json::to_string_pretty(&props)?);
            }
            Ok(format!(
                "length={}\nhas_repeating_digits={}\nis_sequential={}\nentropy={:.2}",
                props.length, props.has_repeating_digits, props.is_sequential, props.entropy
            ))
        }
    }
}
