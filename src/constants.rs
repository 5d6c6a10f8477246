pub const API_KEY_VAR: &str = "TINIFY_KEY";
pub const IMAGE_DIR_VAR: &str = "IMAGE_DIR";
pub const API_URL_VAR: &str = "TINIFY_API_URL";

pub const DEFAULT_API_URL: &str = "https://api.tinify.com";
pub const SHRINK_PATH: &str = "/shrink";
pub const API_USER: &str = "api";
pub const COMPRESSION_COUNT_HEADER: &str = "compression-count";

pub const DEFAULT_ENV_FILE: &str = ".env";

/// Suffixes matched case-sensitively against the file name.
pub const SUPPORTED_IMAGE_SUFFIXES: &[&str] = &[".jpg", ".jpeg", ".webp", ".png"];

/// Output types offered to the service, most preferred first.
pub const PREFERRED_OUTPUT_TYPES: &[&str] = &["image/png", "image/jpeg"];

pub const BYTES_PER_KB: u64 = 1024;

pub const PROGRESS_SPINNER_TEMPLATE: &str = "{spinner:.green} {msg}";

// Common output message prefixes
pub const PROCESSING_PREFIX: &str = "🖼️ ";
pub const ORIGINAL_SIZE_PREFIX: &str = "🔴";
pub const NEW_SIZE_PREFIX: &str = "🟢";
pub const REDUCTION_PREFIX: &str = "🔽";
pub const SUCCESS_PREFIX: &str = "✅";
pub const FOUND_PREFIX: &str = "📊";
pub const SEPARATOR: &str = "----------------------";
pub const SUMMARY_BORDER: &str = "************************************************";
