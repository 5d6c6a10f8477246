use clap::Parser;
use std::process::ExitCode;
use tiny_squeeze::cli::Args;
use tiny_squeeze::logger::{set_quiet_mode, set_verbose_mode};
use tiny_squeeze::{load_env_file, run_sync, Config};

fn main() -> ExitCode {
    let args = Args::parse();
    set_quiet_mode(args.quiet);
    set_verbose_mode(args.verbose);

    load_env_file(args.env_file.as_deref());

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tiny_squeeze::error!("{}", e);
            return ExitCode::from(1);
        }
    };

    match run_sync(&config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tiny_squeeze::error!("{}", e);
            ExitCode::from(1)
        }
    }
}
