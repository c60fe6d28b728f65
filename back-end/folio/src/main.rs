use std::process::ExitCode;

fn main() -> ExitCode {
    match folio::runner::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
