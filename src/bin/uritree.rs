use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(err) = uritree::logging::init_logging() {
        eprintln!("warning: {err:#}");
    }
    match uritree::cli::run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
