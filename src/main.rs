use clap::Parser;

use circle_client::utils::{logger, validation::Validate};
use circle_client::{CircleClient, ClientConfig, CliConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting circle-client CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let client_config = ClientConfig::from(config);
    if let Err(e) = client_config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let client = CircleClient::new(client_config);

    match run(&client).await {
        Ok(()) => {
            tracing::info!("Done");
        }
        Err(e) => {
            tracing::error!("Request to {} failed: {}", client.base_url(), e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Walks the service read-only: health check, then every group with its
/// people and their first facts.
async fn run(client: &CircleClient) -> circle_client::Result<()> {
    let health = client.health().await?;
    tracing::info!("Service reachable at {}: {}", client.base_url(), health.status);

    let groups = client.get_groups().await?;
    println!("✅ {} group(s)", groups.len());

    for group in &groups {
        let people = client.get_people_by_group(&group.id).await?;
        println!("  {} ({} people)", group.name, people.len());
        for person in &people {
            match &person.first_fact {
                Some(fact) => println!("    - {}: {}", person.name, fact.content),
                None => println!("    - {}", person.name),
            }
        }
    }

    Ok(())
}
