use damilag::config::Config;
use damilag::engine::Engine;
use damilag::error::Error;
use damilag::server::serve;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    let engine = Engine::connect(&config).await?;

    serve(engine, config.bind_addr).await
}
