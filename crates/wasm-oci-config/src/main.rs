use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};
use wasm_oci_config_core::media_types::WASM_CONFIG_MEDIA_TYPE_V0;
use wasm_oci_config_core::{ConfigOverrides, WasmToolsRenderer, generate};

#[derive(Parser)]
#[command(
    name = "wasm-oci-config",
    version,
    about = format!(
        "Generate OCI wasm config ({WASM_CONFIG_MEDIA_TYPE_V0}) for a .component.wasm layer"
    )
)]
struct Cli {
    /// Path to *.component.wasm
    component: PathBuf,

    /// RFC3339/ISO8601 timestamp. Defaults to current UTC time.
    #[arg(long)]
    created: Option<String>,

    /// Override os (wasip1|wasip2). Defaults to a best-effort guess from WIT.
    #[arg(long)]
    os: Option<String>,

    /// Optional component target world/interface (indexed by some registries).
    #[arg(long)]
    target: Option<String>,

    /// Path to the wasm-tools binary used to render the component's WIT
    #[arg(long, env = "WASM_TOOLS", default_value = "wasm-tools")]
    wasm_tools: String,
}

fn main() -> Result<()> {
    // stdout carries the config document only
    fmt()
        .with_env_filter(EnvFilter::from_env("WASM_OCI_CONFIG_LOG"))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let renderer = WasmToolsRenderer::new().with_bin(&cli.wasm_tools);
    let overrides = ConfigOverrides {
        created: cli.created,
        os: cli.os,
        target: cli.target,
    };

    let config = generate(&cli.component, &renderer, &overrides)
        .with_context(|| format!("failed to generate config for {}", cli.component.display()))?;

    tracing::info!(
        component = %cli.component.display(),
        os = %config.os,
        "Generated component config"
    );

    let json = config.to_json()?;
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(json.as_bytes())
        .and_then(|()| stdout.flush())
        .context("failed to write config to stdout")?;

    Ok(())
}
