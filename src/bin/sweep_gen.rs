use anyhow::Context;
use clap::Parser;
use pfc_sweep::config::SweepSpec;
use pfc_sweep::sweep::{combos, emit};
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "sweep-gen",
    about = "Generate the shell command batch for a PFC/CC simulator sweep"
)]
struct Args {
    /// Path to a JSON sweep spec; omitted means the built-in domains
    #[arg(long)]
    sweep: Option<PathBuf>,

    /// Override the invocation prefix (up to the opening quote)
    #[arg(long)]
    template: Option<String>,

    /// Override the log file name prefix
    #[arg(long)]
    output_prefix: Option<String>,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr: stdout carries nothing but the generated lines.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    let args = Args::parse();

    let mut spec = match &args.sweep {
        Some(path) => SweepSpec::load_json(path)
            .with_context(|| format!("load sweep spec {}", path.display()))?,
        None => SweepSpec::default(),
    };
    if let Some(template) = args.template {
        spec.command_template = template;
    }
    if let Some(prefix) = args.output_prefix {
        spec.output_prefix = prefix;
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    emit(&spec, &mut out)?;
    out.flush()?;

    tracing::debug!(commands = combos(&spec).count(), "sweep generated");
    Ok(())
}
