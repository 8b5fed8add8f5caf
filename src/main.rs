use anyhow::Result;
use std::path::Path;

use examplesrc::{config::OUTPUT_PATH, showcase};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    showcase::run(Path::new(OUTPUT_PATH)).await?;

    Ok(())
}
