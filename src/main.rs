//! Generates every game asset into `assets/`.
//!
//! Usage:
//!   cargo run
//!
//! Target directories (`assets/tiles`, `assets/sprites`, `assets/ui`,
//! `assets/screenshots`) must exist. An optional `config/assets.toml`
//! overrides the character list and output directory.

use dundie_assets::{AssetLayoutEngine, CONFIG_FILE, GeneratorConfig, PngSink};
use log::error;
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GeneratorConfig::load_or_default(Path::new(CONFIG_FILE));
    println!("=== Dundie Asset Generator ===\n");
    println!("  Output: {}", config.output_dir.display());
    println!("  Characters: {}\n", config.characters.len());

    let engine = match AssetLayoutEngine::new(config, PngSink) {
        Ok(engine) => engine,
        Err(e) => {
            error!("{}: {}", e.kind(), e);
            return ExitCode::FAILURE;
        }
    };

    match engine.run() {
        Ok(report) => {
            println!(
                "\nGenerated {} assets, {} failed.",
                report.succeeded(),
                report.failed()
            );
            if !report.is_clean() {
                for (name, e) in report.failures() {
                    println!("  Failed: {} ({})", name, e.kind());
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}: {}", e.kind(), e);
            ExitCode::FAILURE
        }
    }
}
