use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match osteoflag_lib::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("osteoflag: {e}");
            ExitCode::FAILURE
        }
    }
}
