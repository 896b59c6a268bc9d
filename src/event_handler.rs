use crate::config::Config;
use crate::core::generate_order;
use crate::event_publisher::OrderPublisher;
use lambda_runtime::{tracing, Error, LambdaEvent};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use serde_json::Value;

/// Lambda response shape expected by the scheduler integration.
#[derive(Debug, Serialize)]
pub(crate) struct ProducerResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

#[derive(Debug, Serialize)]
struct SentSummary {
    message: String,
    #[serde(rename = "orderIds")]
    order_ids: Vec<String>,
}

pub(crate) struct HandlerDeps<P: OrderPublisher> {
    pub config: Config,
    pub publisher: P,
}

/// Generates a random batch of synthetic orders and publishes each one as a
/// single queue message. The schedule event payload is accepted but unused.
///
/// A failed send is logged and skipped; it never aborts the batch and is
/// never retried, so the response can report fewer orders than were drawn.
pub(crate) async fn function_handler<P: OrderPublisher>(
    deps: &HandlerDeps<P>,
    _event: LambdaEvent<Value>,
) -> Result<ProducerResponse, Error> {
    if !deps.config.enabled {
        tracing::info!("Producer is disabled via the ENABLED environment variable");
        return Ok(ProducerResponse {
            status_code: 200,
            body: "Disabled".to_string(),
        });
    }

    let mut rng = StdRng::from_entropy();
    let num_orders = rng.gen_range(deps.config.min_orders..=deps.config.max_orders);

    let mut sent_orders = Vec::with_capacity(num_orders as usize);
    for _ in 0..num_orders {
        let order = generate_order(&mut rng);

        match deps.publisher.publish_order(&order).await {
            Ok(()) => {
                tracing::info!("Sent order: {}", order.order_id);
                sent_orders.push(order.order_id);
            }
            Err(e) => tracing::error!("Error sending order {}: {}", order.order_id, e),
        }
    }

    let summary = SentSummary {
        message: format!("Sent {} orders", sent_orders.len()),
        order_ids: sent_orders,
    };

    Ok(ProducerResponse {
        status_code: 200,
        body: serde_json::to_string(&summary)?,
    })
}
