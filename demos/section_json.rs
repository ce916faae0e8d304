//! Runs one generation on a JSON payload and prints the section meshes.
//!
//! Usage:
//! ```text
//! cargo run --example section_json -- payload.json
//! RUST_LOG=sectio=debug cargo run --example section_json -- payload.json
//! ```

use std::process::ExitCode;

use sectio::operations::ScenePublisher;
use sectio::tessellation::MeshExport;

fn main() -> ExitCode {
    // Default: WARN for everything, INFO for sectio.
    // Override with RUST_LOG env var (e.g. RUST_LOG=sectio=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("sectio=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: section_json <payload.json>");
        return ExitCode::FAILURE;
    };

    let json = match std::fs::read_to_string(&path) {
        Ok(json) => json,
        Err(err) => {
            eprintln!("cannot read {path}: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut publisher = ScenePublisher::new();
    let snapshot = match publisher.rebuild_from_json(&json) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let meshes: Vec<MeshExport> = snapshot
        .sections
        .iter()
        .map(|section| section.mesh.to_export())
        .collect();

    match serde_json::to_string_pretty(&meshes) {
        Ok(out) => {
            println!("{out}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("cannot encode meshes: {err}");
            ExitCode::FAILURE
        }
    }
}
