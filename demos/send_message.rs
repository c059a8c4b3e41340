use std::io;

use semaphore_sms::{SemaphoreClientBuilder, SendMessage, SenderName};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let recipients = std::env::var("SEMAPHORE_RECIPIENTS").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SEMAPHORE_RECIPIENTS environment variable is required",
        )
    })?;
    let message = std::env::var("SEMAPHORE_MESSAGE")
        .unwrap_or_else(|_| "Hello from the semaphore-sms demo.".to_owned());

    let client = SemaphoreClientBuilder::from_env()?.build()?;
    let mut request = SendMessage::new(recipients, message)?;
    if let Ok(sender_name) = std::env::var("SEMAPHORE_SENDER_OVERRIDE") {
        request = request.sender_name(SenderName::new(sender_name)?);
    }

    let body = client.send_message(request).await?;
    println!("{body}");

    Ok(())
}
