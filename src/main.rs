// src/main.rs
use anyhow::Context;
use armario::Storefront;
use armario::services::ApiService;
use log::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let base_url = std::env::var("ARMARIO_API_BASE_URL")
        .unwrap_or_else(|_| "http://localhost:3000".to_string());
    let prompt = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    if prompt.trim().is_empty() {
        anyhow::bail!("usage: armario <prompt describing the outfit you want>");
    }

    info!("Requesting an outfit from {}", base_url);

    let api = ApiService::new(base_url);
    let mut storefront = Storefront::new();
    storefront.set_prompt(prompt);
    storefront
        .generate(&api)
        .await
        .context("outfit generation failed")?;

    if let Some(message) = storefront.conversational_message() {
        println!("{}\n", message);
    }
    for card in storefront.product_cards() {
        println!("{} - ${:.0}", card.name, card.price);
        if !card.available_sizes.is_empty() {
            println!("  tallas: {}", card.available_sizes.join(", "));
        }
        if !card.comment.is_empty() {
            println!("  {}", card.comment);
        }
    }

    Ok(())
}
