//! Command-line entry point for mysql-loadgen.

use clap::Parser;
use mysql_loadgen::config::{GenerationConfig, GeneratorOpts};
use mysql_loadgen::{generate, report};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let opts = GeneratorOpts::parse();
    // A malformed size string fails here, before any database connection.
    let config = GenerationConfig::from_opts(opts)?;

    let (summary, sizes) = generate::run(&config).await?;

    println!("\n{}", summary.render());
    println!("\n{}", report::render_database_sizes(&sizes));
    Ok(())
}
