use std::process::ExitCode;

fn main() -> ExitCode {
    expense_tracker::init();
    match expense_tracker::cli::run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "shell terminated");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
