//! Create a domain, add and update an A record, then clean up.
//!
//! Usage: cargo run --example manage_domain -- example.com 203.0.113.10

use digitalocean_sdk::{DigitalOceanClient, DoError, DomainCreateRequest, DomainRecordRequest, RecordsQuery};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let (Some(name), Some(ip)) = (args.next(), args.next()) else {
        eprintln!("usage: manage_domain <domain> <ipv4>");
        std::process::exit(2);
    };

    let client = DigitalOceanClient::from_env()?;
    let domains = client.v2().domains();

    let created = domains
        .post(&DomainCreateRequest {
            name: name.clone(),
            ip_address: None,
        })
        .await?;
    println!("Created domain {} (ttl {:?})", created.domain.name, created.domain.ttl);

    let domain = domains.by_domain_name(&name);
    let result = async {
        let record = domain
            .records()
            .post(&DomainRecordRequest {
                type_: Some("A".into()),
                name: Some("www".into()),
                data: Some(ip.clone()),
                ttl: Some(1800),
                ..Default::default()
            })
            .await?
            .domain_record;
        let record_id = record
            .id
            .ok_or_else(|| DoError::Other("record has no id".into()))?;
        println!("Added record {record_id}: www -> {ip}");

        let updated = domain
            .records()
            .by_record_id(record_id)
            .patch(&DomainRecordRequest {
                ttl: Some(300),
                ..Default::default()
            })
            .await?;
        println!("TTL now {:?}", updated.domain_record.ttl);

        let query = RecordsQuery {
            type_: Some("A".into()),
            ..Default::default()
        };
        let records = domain.records().get_with(&query).await?;
        for r in &records.domain_records {
            println!(
                "  {} {} {}",
                r.type_,
                r.name.as_deref().unwrap_or("@"),
                r.data.as_deref().unwrap_or("")
            );
        }
        Ok::<_, DoError>(())
    }
    .await;

    domain.delete().await?;
    println!("Deleted domain {name}");

    result?;
    Ok(())
}
