use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use schemaform::{compile_to_json, CompileOptions, UnknownTypePolicy};
use schemaform_compiler::{error::FormError, parse_schema, verify_schema};

#[derive(Parser)]
#[command(name = "sform")]
#[command(about = "Compile JSON-Schema-like documents into form field descriptors", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a schema `.json` file to a JSON array of field descriptors
    Compile {
        /// Input schema file
        #[arg(short, long)]
        input: PathBuf,

        /// Output file (if omitted, prints to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        policy: PolicyArgs,

        /// Skip schema verification before compiling
        #[arg(long)]
        no_verify: bool,
    },

    /// Verify a schema file without compiling it; every finding is an error
    Check {
        /// Input schema file
        #[arg(short, long)]
        input: PathBuf,
    },
}

#[derive(Args)]
struct PolicyArgs {
    /// JSON file with compiler options (`unknownTypes`, `verify`)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Fail on unsupported schema types instead of skipping them
    #[arg(long)]
    strict: bool,
}

impl PolicyArgs {
    /// Options from `--config` (or defaults), with command line flags on top.
    fn options(&self, no_verify: bool) -> Result<CompileOptions, FormError> {
        let mut options = match &self.config {
            Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
            None => CompileOptions::default(),
        };
        if self.strict {
            options.unknown_types = UnknownTypePolicy::Reject;
        }
        if no_verify {
            options.verify = false;
        }
        Ok(options)
    }
}

fn main() -> Result<(), FormError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sform=info,schemaform_compiler=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Compile { input, output, policy, no_verify } => {
            let text = fs::read_to_string(input)?;
            let json = compile_to_json(&text, &policy.options(*no_verify)?)?;
            if let Some(out_path) = output {
                fs::write(out_path, &json)?;
                info!("Compiled {} → {}", input.display(), out_path.display());
            } else {
                println!("{}", json);
            }
            Ok(())
        }

        Commands::Check { input } => {
            let text = fs::read_to_string(input)?;
            let schema = parse_schema(&text)?;
            verify_schema(&schema)?;
            info!("{} is valid", input.display());
            Ok(())
        }
    }
}
