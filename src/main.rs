//! Command-line interface for conduit
//!
//! # Usage Examples
//!
//! ```bash
//! # Decompress a local gzip file to stdout
//! conduit copy /data/logs.gz - --input-algorithm gzip
//!
//! # Recompress an S3 object as bzip2 on local disk
//! conduit copy s3://bucket/data.gz /data/data.bz2 \
//!   --input-algorithm gzip --output-algorithm bzip2 --level 9
//!
//! # Fetch an HTTP resource and append it to a local file
//! conduit copy https://example.com/feed.txt /data/feed.txt --append
//!
//! # Introspection
//! conduit schemes
//! conduit algorithms
//! conduit version
//! ```

use std::io;

use anyhow::Context;
use clap::{Parser, Subcommand};
use conduit::Conduit;

#[derive(Parser)]
#[command(name = "conduit")]
#[command(about = "Copy bytes between URIs with transparent compression")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Copy a resource, decoding the input and encoding the output
    Copy {
        /// Input URI (`-` reads from stdin)
        input: String,

        /// Output URI (`-` writes to stdout)
        output: String,

        /// Algorithm used to decode the input
        #[arg(long, default_value = "none")]
        input_algorithm: String,

        /// Algorithm used to encode the output
        #[arg(long, default_value = "none")]
        output_algorithm: String,

        /// Compression level for the output algorithm
        #[arg(long)]
        level: Option<i32>,

        /// Append to the output resource instead of truncating
        #[arg(long)]
        append: bool,
    },

    /// List supported URI schemes
    Schemes,

    /// List supported algorithms
    Algorithms,

    /// Print the library version
    Version,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let conduit = Conduit::new();

    match cli.command {
        Commands::Copy {
            input,
            output,
            input_algorithm,
            output_algorithm,
            level,
            append,
        } => {
            let mut reader = conduit
                .open_read(&input, &input_algorithm)
                .with_context(|| format!("Failed to open {input} for reading"))?;
            let mut writer = conduit
                .open_write(&output, &output_algorithm, level, append)
                .with_context(|| format!("Failed to open {output} for writing"))?;
            io::copy(&mut reader, &mut writer)
                .with_context(|| format!("Failed copying {input} to {output}"))?;
            writer
                .close()
                .with_context(|| format!("Failed to close {output}"))?;
            reader
                .close()
                .with_context(|| format!("Failed to close {input}"))?;
        }
        Commands::Schemes => println!("{}", conduit.schemes()),
        Commands::Algorithms => println!("{}", conduit.algorithms()),
        Commands::Version => println!("{}", conduit::version()),
    }

    Ok(())
}
