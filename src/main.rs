//! Terminal view for the FakeNews dashboard: one snapshot of the live (or
//! demo) data, rendered as plain text. All real logic lives in the library;
//! this binary is view glue.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use fakenews_dashboard::{
    build_posts_query, metrics, ApiClient, CombinedTrends, Config, FilterState, NewsPost,
    Prediction,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    info!(base_url = %config.api.base_url, "starting dashboard snapshot");

    let client = ApiClient::new(&config.api)?;

    // The probe only decides the banner; the fetches below always run and
    // fall back on their own.
    let connected = client.check_connection().await;

    let trends = client.fetch_all_trends().await;
    let filters = client.fetch_filters().await;

    let state = FilterState::with_limit(config.dashboard.page_limit);
    let posts = client.fetch_posts(&build_posts_query(&state)).await;

    render_banner(connected);
    render_trends(&trends);
    render_breakdowns(&trends);
    println!(
        "Filter options: {} languages, {} platforms, {} regions",
        filters.languages.len(),
        filters.platforms.len(),
        filters.displayable_regions().len()
    );
    render_posts(&posts, state.page);

    Ok(())
}

fn render_banner(connected: bool) {
    println!("=== FakeNews Dashboard ===");
    if connected {
        println!("[LIVE DATA] connected to backend");
    } else {
        println!("[DEMO MODE] backend unavailable - showing built-in data");
    }
    println!();
}

fn render_trends(trends: &CombinedTrends) {
    let CombinedTrends { dataset, ai } = trends;

    println!("Total posts analyzed:  {}", metrics::total_posts(dataset));
    println!(
        "Misinformation rate:   {:.1}%",
        metrics::fake_news_percentage(dataset)
    );
    println!("AI predictions:        {}", metrics::total_predictions(ai));
    println!(
        "Estimated accuracy:    {:.1}%",
        metrics::ai_accuracy_approx(dataset, ai)
    );
    println!();

    println!("Dataset vs AI predictions:");
    for row in metrics::comparison_rows(dataset, ai) {
        println!(
            "  {:<10} dataset {:>6}   ai {:>6}",
            row.category, row.dataset, row.ai_prediction
        );
    }
    println!(
        "  detection split: {:.1}% real / {:.1}% fake",
        metrics::real_detection_share(ai),
        metrics::fake_detection_share(ai)
    );
    println!();
}

fn render_breakdowns(trends: &CombinedTrends) {
    println!("Posts by platform:");
    for (platform, count) in sorted_desc(&trends.dataset.platforms) {
        println!("  {:<16} {:>6}", platform, count);
    }
    println!("Posts by region:");
    for (region, count) in sorted_desc(&trends.dataset.regions) {
        println!("  {:<16} {:>6}", region, count);
    }
    println!();
}

fn sorted_desc(map: &std::collections::HashMap<String, u64>) -> Vec<(&String, u64)> {
    let mut entries: Vec<_> = map.iter().map(|(k, v)| (k, *v)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    entries
}

fn render_posts(posts: &[NewsPost], page: u32) {
    println!("Latest posts (page {}, {} loaded):", page, posts.len());
    for post in posts {
        let label = if post.label { "REAL" } else { "FAKE" };
        let prediction = match post.ai_prediction {
            Prediction::Real => "REAL",
            Prediction::Fake => "FAKE",
        };
        let agreement = if post.ai_prediction.matches_label(post.label) {
            "=="
        } else {
            "!="
        };
        println!(
            "  [{} {} AI:{}] {} | {} | {}",
            label, agreement, prediction, post.date, post.platform, post.title
        );
    }
}
