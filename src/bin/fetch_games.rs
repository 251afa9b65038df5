use lambda_runtime::{service_fn, Error};
use nba_game_digest::handler::fetch_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    nba_game_digest::init_tracing();
    lambda_runtime::run(service_fn(fetch_handler)).await
}
