use crate::core::Order;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

/// Capability seam for the outbound queue: one submit operation, one message
/// per order. Tests swap in a mock so no real queue is needed.
#[cfg_attr(test, automock)]
#[async_trait]
pub(crate) trait OrderPublisher {
    async fn publish_order(
        &self,
        order: &Order,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

pub(crate) struct SqsOrderPublisher {
    sqs_client: aws_sdk_sqs::Client,
    queue_url: String,
}

impl SqsOrderPublisher {
    pub fn new(sqs_client: aws_sdk_sqs::Client, queue_url: String) -> Self {
        Self {
            sqs_client,
            queue_url,
        }
    }
}

#[async_trait]
impl OrderPublisher for SqsOrderPublisher {
    async fn publish_order(
        &self,
        order: &Order,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let message_body = serde_json::to_string(order)?;

        self.sqs_client
            .send_message()
            .queue_url(&self.queue_url)
            .message_body(message_body)
            .send()
            .await?;

        Ok(())
    }
}
