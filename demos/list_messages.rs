use semaphore_sms::{MessageListOptions, SemaphoreClientBuilder};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = SemaphoreClientBuilder::from_env()?.build()?;

    let options = MessageListOptions {
        limit: std::env::var("SEMAPHORE_LIMIT")
            .ok()
            .map(|it| it.parse())
            .transpose()?,
        page: std::env::var("SEMAPHORE_PAGE")
            .ok()
            .map(|it| it.parse())
            .transpose()?,
        status: std::env::var("SEMAPHORE_STATUS").ok(),
        ..Default::default()
    };

    let body = client.messages(&options).await?;
    println!("{body}");

    Ok(())
}
