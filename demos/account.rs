use semaphore_sms::SemaphoreClientBuilder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = SemaphoreClientBuilder::from_env()?.build()?;

    println!("account: {}", client.account().await?);
    println!("sender names: {}", client.sender_names().await?);
    println!("users: {}", client.users().await?);
    println!("transactions: {}", client.transactions().await?);

    Ok(())
}
