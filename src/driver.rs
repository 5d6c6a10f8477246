use crate::constants::{PREFERRED_OUTPUT_TYPES, PROCESSING_PREFIX};
use crate::discovery::ImageFile;
use crate::error::{Result, SqueezeError};
use crate::logger::progress_spinner;
use crate::report::{print_file_report, RunTally};
use crate::service::CompressionService;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Sizes and paths for one successfully compressed image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub original_path: PathBuf,
    pub new_path: PathBuf,
    pub original_size: u64,
    pub new_size: u64,
}

#[derive(Debug)]
pub enum FileOutcome {
    Success(FileReport),
    Failed { path: PathBuf, error: SqueezeError },
}

/// `<path up to the last '.' of its file name>.<extension>`.
///
/// A leading dot counts too, so `.png` keeps an empty prefix. When
/// `extension` matches the current one this is the source path itself, and
/// the source gets overwritten.
pub fn output_path_for(input_path: &Path, extension: &str) -> PathBuf {
    let name = input_path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    let prefix = match name.rfind('.') {
        Some(dot) => &name[..dot],
        None => &name[..],
    };

    input_path.with_file_name(format!("{}.{}", prefix, extension))
}

async fn compress_file<S>(service: &S, input_path: &Path) -> Result<FileReport>
where
    S: CompressionService + ?Sized,
{
    let original_size = fs::metadata(input_path).await?.len();

    let data = fs::read(input_path).await?;
    let source = service.upload(data).await?;
    crate::verbose!("Uploaded {:?} as {}", input_path, source.0);

    let converted = service.convert(&source, PREFERRED_OUTPUT_TYPES).await?;
    let new_path = output_path_for(input_path, &converted.extension);
    fs::write(&new_path, &converted.data).await?;

    let new_size = fs::metadata(&new_path).await?.len();

    Ok(FileReport {
        original_path: input_path.to_path_buf(),
        new_path,
        original_size,
        new_size,
    })
}

/// Runs one file to a terminal state. Errors never escape.
pub async fn process_image<S>(service: &S, image: &ImageFile) -> FileOutcome
where
    S: CompressionService + ?Sized,
{
    crate::info!("\n{} Processing {}\n", PROCESSING_PREFIX, image.path.display());

    let spinner = progress_spinner("Compressing...");
    let result = compress_file(service, &image.path).await;
    spinner.finish_and_clear();

    match result {
        Ok(report) => FileOutcome::Success(report),
        Err(error) => {
            crate::error!("Failed to process {}: {}", image.path.display(), error);
            FileOutcome::Failed {
                path: image.path.clone(),
                error,
            }
        }
    }
}

/// Compresses every image strictly one after another, in the given order.
pub async fn process_images<S>(service: &S, images: &[ImageFile]) -> RunTally
where
    S: CompressionService + ?Sized,
{
    let mut tally = RunTally::new(images.len());

    for image in images {
        let outcome = process_image(service, image).await;
        tally.record(&outcome);

        if let FileOutcome::Success(report) = &outcome {
            print_file_report(report, tally.processed, tally.attempted);
        }
    }

    tally
}
