//! Browse the AniLiberty catalog
//!
//! ```sh
//! RUST_LOG=aniliberty_sdk=debug cargo run --example browse_catalog -- "битва"
//! ```
//!
//! Reads `ANILIBERTY_API_BASE`, `ANILIBERTY_TIMEOUT_MS` and
//! `ANILIBERTY_ACCESS_TOKEN` if set.

use aniliberty_sdk::{AniLiberty, ApiResponse, CatalogQuery, CatalogSorting, ReleaseType};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();

    let client = AniLiberty::from_env()?;

    match client.app().status().await {
        ApiResponse::Success { data: Some(status), .. } => {
            println!("API alive: {} (you are in {})", status.is_alive, status.request.country);
        }
        ApiResponse::Success { .. } => println!("API answered without a body"),
        ApiResponse::Failure { status, error } => {
            eprintln!("status check failed ({}): {}", status, error);
            return Ok(());
        }
    }

    let mut builder = CatalogQuery::builder()
        .types([ReleaseType::Tv, ReleaseType::Movie])
        .sorting(CatalogSorting::RatingDesc)
        .limit(10);
    if let Some(search) = std::env::args().nth(1) {
        builder = builder.search(search);
    }
    let query = builder.build();

    match client.catalog().releases(&query).await.into_result() {
        Ok(Some(page)) => {
            let pagination = &page.meta.pagination;
            println!(
                "Page {}/{} ({} releases total)",
                pagination.current_page, pagination.total_pages, pagination.total
            );
            for item in &page.data {
                let genres: Vec<&str> = item.genres.iter().map(|g| g.name.as_str()).collect();
                println!(
                    "  #{:<6} {} ({}) [{}]",
                    item.release.id,
                    item.release.name.main,
                    item.release.year,
                    genres.join(", ")
                );
            }
        }
        Ok(None) => println!("catalog returned no body"),
        Err(error) => eprintln!("catalog request failed: {}", error),
    }

    let week = client.schedule().week().await;
    if let Some(entries) = week.data() {
        println!("{} releases air this week", entries.len());
    }

    Ok(())
}
