use std::process::ExitCode;

fn main() -> ExitCode {
    match box_chart::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("box-chart: {e}");
            ExitCode::FAILURE
        }
    }
}
