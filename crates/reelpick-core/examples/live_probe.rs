use reelpick_core::{PreferenceSnapshot, Recommender, ThreadRngSource, TmdbClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = TmdbClient::from_env()?;

    println!("🎬 Fetching popular movies...\n");

    let page = client.popular(1).await?;
    println!(
        "Page {}/{} ({} total movies):",
        page.page, page.total_pages, page.total_results
    );
    for (i, movie) in page.results.iter().take(10).enumerate() {
        println!(
            "  {}. {} ({:.1}/10, {} votes) - ID: {}",
            i + 1,
            movie.title,
            movie.vote_average,
            movie.vote_count,
            movie.id
        );
    }

    if let Some(first) = page.results.first() {
        println!("\n📋 Detail for '{}' (ID: {})\n", first.title, first.id);

        let detail = client.detail(first.id).await?;
        if let Some(runtime) = detail.runtime {
            println!("Runtime: {} min", runtime);
        }
        let genre_names: Vec<&str> = detail.genres.iter().map(|g| g.name.as_str()).collect();
        println!("Genres: {}", genre_names.join(", "));
        println!("Videos: {}", detail.videos.results.len());
        println!("Cast: {}", detail.credits.cast.len());

        // Use the first popular movie as a favorite and ask for a pick
        println!("\n🎲 Random recommendation seeded by '{}'...\n", first.title);
        let recommender = Recommender::new(client.clone());
        let preferences = PreferenceSnapshot {
            favorites: vec![first.id],
            highly_rated: Vec::new(),
        };
        let pick = recommender
            .recommend(&preferences, &mut ThreadRngSource)
            .await?;
        println!("Tonight's movie: {} (ID: {})", pick.title, pick.id);
    }

    Ok(())
}
