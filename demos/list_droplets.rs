//! List every droplet on the account, following pagination links.
//!
//! Usage: cargo run --example list_droplets -- [tag]

use digitalocean_sdk::{DigitalOceanClient, DropletsQuery};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = DigitalOceanClient::from_env()?;
    let droplets = client.v2().droplets();

    let query = DropletsQuery {
        per_page: Some(100),
        tag_name: std::env::args().nth(1),
        ..Default::default()
    };

    let mut page = droplets.get_with(&query).await?;
    let mut count = 0;
    loop {
        for droplet in &page.droplets {
            count += 1;
            println!(
                "{:>10}  {:<30} {:<8} {:<6} {}",
                droplet.id,
                droplet.name,
                droplet.status.as_deref().unwrap_or("?"),
                droplet.region.as_ref().map_or("?", |r| r.slug.as_str()),
                droplet.networks.public_ipv4().unwrap_or("-")
            );
        }
        let next = page
            .links
            .as_ref()
            .and_then(|l| l.next_page())
            .map(str::to_string);
        match next {
            Some(url) => page = droplets.with_url(url).get().await?,
            None => break,
        }
    }
    println!("{count} droplet(s)");

    Ok(())
}
