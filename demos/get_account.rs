//! Show the account, balance and current invoice preview for a token.
//!
//! Reads the token from `DIGITALOCEAN_TOKEN`.

use digitalocean_sdk::{BearerTokenProvider, ClientFactory, HttpRequestAdapter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let auth = BearerTokenProvider::from_env()?;
    println!("Using token {}", auth.token_hint());

    let adapter = HttpRequestAdapter::new(auth)?;
    let client = ClientFactory::create(adapter);
    let my = client.v2().customers().my();

    let account = client.v2().account().get().await?.account;
    println!(
        "Account: {} ({})",
        account.email.as_deref().unwrap_or("-"),
        account.status.as_deref().unwrap_or("unknown")
    );
    println!("Droplet limit: {:?}", account.droplet_limit);

    let balance = my.balance().get().await?;
    println!(
        "Month to date: {} (balance {})",
        balance.month_to_date_usage.as_deref().unwrap_or("0.00"),
        balance.account_balance.as_deref().unwrap_or("0.00")
    );

    let invoices = my.invoices().get().await?;
    if let Some(preview) = invoices.invoice_preview {
        println!(
            "Upcoming invoice for {}: {}",
            preview.invoice_period.as_deref().unwrap_or("?"),
            preview.amount.as_deref().unwrap_or("?")
        );
    }
    for invoice in invoices.invoices.iter().take(3) {
        println!(
            "  {} {}",
            invoice.invoice_period.as_deref().unwrap_or("?"),
            invoice.amount.as_deref().unwrap_or("?")
        );
    }

    Ok(())
}
