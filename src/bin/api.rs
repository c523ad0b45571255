pub use mbdf_portal::api::handler;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    mbdf_portal::setup_logging();
    lambda_runtime::run(lambda_runtime::service_fn(handler)).await
}
