use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    craftium_lib::run().await
}
