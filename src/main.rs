use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match pharmashop_lib::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Config errors surface before tracing is initialized, so stderr is the one report
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
