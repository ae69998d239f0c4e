//! Resume Export CLI
//!
//! Usage:
//!   resume-export
//!
//! Takes no options; any arguments are ignored. Exports
//! `build/resume.json` to `build/resume.pdf` under the crate directory,
//! honouring `resume-export.toml` there if present.

use std::path::Path;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use resume_export::{exporter_for, ResumeCli};

/// Directory all export paths are resolved against
const PROJECT_ROOT: &str = env!("CARGO_MANIFEST_DIR");

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let root = Path::new(PROJECT_ROOT);
    let exporter = match exporter_for(root, ResumeCli::new()) {
        Ok(exporter) => exporter,
        Err(e) => {
            eprintln!("Error loading config from '{}': {}", root.display(), e);
            std::process::exit(1);
        }
    };

    println!("Running: {}", exporter.describe());

    match exporter.export() {
        Ok(artifact) => {
            println!("PDF exported successfully");
            println!("  {}", artifact);
        }
        Err(e) => {
            println!("Error: export failed: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}
