use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "tiny-squeeze",
    about = "Batch-compress a directory of images with the Tinify API",
    long_about = "tiny-squeeze sends every .jpg, .jpeg, .webp and .png file in a directory to the \
                  Tinify (TinyPNG) API, writes the compressed result next to the original and \
                  reports the size saved per file and in total.",
    version,
    after_help = "CONFIGURATION:\n  \
    TINIFY_KEY      Tinify API key (required)\n  \
    IMAGE_DIR       Directory of images to compress (required)\n  \
    TINIFY_API_URL  Override the API base URL\n\n\
    Values may also come from a .env file in the current directory."
)]
pub struct Args {
    #[arg(
        long,
        value_name = "PATH",
        help = "Load configuration from this env file instead of ./.env"
    )]
    pub env_file: Option<PathBuf>,

    #[arg(
        short = 'q',
        long,
        conflicts_with = "verbose",
        help = "Only print failures and the final summary"
    )]
    pub quiet: bool,

    #[arg(short = 'v', long, help = "Print extra diagnostic output")]
    pub verbose: bool,
}
