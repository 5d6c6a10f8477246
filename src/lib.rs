pub mod cli;
pub mod config;
pub mod constants;
pub mod discovery;
pub mod driver;
pub mod error;
pub mod logger;
pub mod report;
pub mod service;

pub use config::{load_env_file, Config};
pub use discovery::{collect_image_files, is_image_file, ImageFile};
pub use driver::{output_path_for, process_image, process_images, FileOutcome, FileReport};
pub use error::{Result, ServiceErrorKind, SqueezeError};
pub use report::{kilobytes, percentage_reduction, print_summary, RunTally};
pub use service::{CompressionService, ConvertedImage, SourceHandle, TinifyClient};

use constants::FOUND_PREFIX;

/// Discovers the images under the configured directory, compresses them
/// through `service` and prints the report.
///
/// Only discovery errors are returned; per-file failures end up in the tally.
pub async fn run<S>(config: &Config, service: &S) -> Result<RunTally>
where
    S: CompressionService + ?Sized,
{
    let image_files = collect_image_files(&config.image_dir)?;
    crate::info!(
        "{} Found {} image files in {}",
        FOUND_PREFIX,
        image_files.len(),
        config.image_dir.display()
    );

    let tally = process_images(service, &image_files).await;
    print_summary(&tally, service.compression_count());

    Ok(tally)
}

/// Blocking entry point: builds the Tinify client and a current-thread runtime.
pub fn run_sync(config: &Config) -> Result<RunTally> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| SqueezeError::Runtime(e.to_string()))?;

    let client = TinifyClient::new(&config.api_url, &config.api_key)?;
    runtime.block_on(run(config, &client))
}
