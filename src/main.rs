use lambda_runtime::{run, service_fn, tracing, Error};

use crate::config::Config;
use crate::event_handler::{function_handler, HandlerDeps};
use crate::event_publisher::SqsOrderPublisher;

mod config;
mod core;
mod event_handler;
mod event_publisher;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();
    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let sqs_client = aws_sdk_sqs::Client::new(&aws_config);
    let config = Config::load()?;

    let publisher = SqsOrderPublisher::new(sqs_client, config.queue_url.clone());
    let deps = HandlerDeps { config, publisher };

    run(service_fn(|event| function_handler(&deps, event))).await
}
