use lambda_runtime::Error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    parameter_lookup::server::start().await
}
