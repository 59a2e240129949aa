//! Argument-free schema generation entry point.
//!
//! Run from the directory the artifact is committed in (CI does this at the
//! repository root). Writes `schema-<version>.json` on first run, is a no-op
//! when the committed artifact already matches, and refuses to overwrite one
//! that differs.

use std::process::ExitCode;

use stocktake_schema::pipeline;
use stocktake_schema::write::{FsArtifactStore, Reconciliation, schema_filename};
use tracing::error;
use tracing_subscriber::EnvFilter;

// Exit codes: 0 = written or unchanged, 1 = drift guard tripped, 2 = tool failure.
fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match real_main() {
        Ok(Reconciliation::Written | Reconciliation::Unchanged) => ExitCode::from(0),
        Ok(Reconciliation::Drift) => ExitCode::from(1),
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(2)
        }
    }
}

fn real_main() -> anyhow::Result<Reconciliation> {
    let path = schema_filename();
    let outcome = pipeline::run(&FsArtifactStore, &path)?;
    match outcome {
        Reconciliation::Written => println!("wrote new schema to {path}"),
        Reconciliation::Unchanged => println!("no change to the existing schema at {path}"),
        Reconciliation::Drift => {
            println!(
                "refusing to overwrite existing schema at {path}: the generated schema differs"
            );
            println!(
                "bump JSON_SCHEMA_VERSION in stocktake-types (see stocktake-schema/README.md) and commit the regenerated artifact"
            );
        }
    }
    Ok(outcome)
}
