//! Demo page binary.
//!
//! Issues the two demo GraphQL calls sequentially and prints the resulting
//! HTML fragments to standard output. Diagnostics go to standard error so the
//! page output stays clean.

use std::io::Write;

use tracing_subscriber::EnvFilter;

use personalize_api::demo;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = demo::default_config()?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    demo::run_demo(&config, &mut out).await?;
    out.flush()?;

    Ok(())
}
