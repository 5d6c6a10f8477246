#![allow(dead_code)]

use async_trait::async_trait;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::TempDir;
use tiny_squeeze::{
    CompressionService, ConvertedImage, Result, ServiceErrorKind, SourceHandle, SqueezeError,
};

/// First byte that makes [`FakeService`] reject an upload.
pub const REJECT_BYTE: u8 = 0xEE;

/// First byte that makes [`FakeService`] accept the upload but fail the convert.
pub const CONVERT_FAIL_BYTE: u8 = 0xEF;

/// In-memory stand-in for the Tinify API.
///
/// Every upload "compresses" to half its size in `extension` format, unless
/// the data starts with [`REJECT_BYTE`] or [`CONVERT_FAIL_BYTE`].
pub struct FakeService {
    pub extension: String,
    uploads: Mutex<Vec<Vec<u8>>>,
}

impl FakeService {
    pub fn new(extension: &str) -> Self {
        Self {
            extension: extension.to_string(),
            uploads: Mutex::new(Vec::new()),
        }
    }

    pub fn upload_count(&self) -> usize {
        self.uploads.lock().unwrap().len()
    }
}

#[async_trait]
impl CompressionService for FakeService {
    async fn upload(&self, data: Vec<u8>) -> Result<SourceHandle> {
        if data.first() == Some(&REJECT_BYTE) {
            return Err(SqueezeError::InvalidResponse("upload rejected".to_string()));
        }

        let mut uploads = self.uploads.lock().unwrap();
        uploads.push(data);
        Ok(SourceHandle((uploads.len() - 1).to_string()))
    }

    async fn convert(&self, source: &SourceHandle, mime_types: &[&str]) -> Result<ConvertedImage> {
        assert_eq!(mime_types, ["image/png", "image/jpeg"]);

        let index: usize = source.0.parse().unwrap();
        let uploads = self.uploads.lock().unwrap();
        let original = &uploads[index];

        if original.first() == Some(&CONVERT_FAIL_BYTE) {
            return Err(SqueezeError::Service {
                kind: ServiceErrorKind::Client,
                status: 415,
                error: "UnsupportedMediaType".to_string(),
                message: "File type is not supported.".to_string(),
            });
        }
        let original_len = original.len();

        Ok(ConvertedImage {
            data: vec![1u8; original_len / 2],
            extension: self.extension.clone(),
        })
    }

    fn compression_count(&self) -> Option<u64> {
        Some(self.upload_count() as u64)
    }
}

pub fn create_temp_directory() -> TempDir {
    TempDir::new().unwrap()
}

pub fn write_file(dir: &Path, name: &str, len: usize, fill: u8) -> PathBuf {
    let path = dir.join(name);
    File::create(&path)
        .unwrap()
        .write_all(&vec![fill; len])
        .unwrap();
    path
}

pub fn file_len(path: &Path) -> u64 {
    std::fs::metadata(path).unwrap().len()
}
