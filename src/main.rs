// src/main.rs
mod extractors;
mod listing;
mod report;
mod utils;

use chrono::Local;
use clap::Parser;

use extractors::{deadline, ListingExtractor};
use listing::{KeywordSet, ListingClient, ScholarshipRecord};
use report::ReportWriter;
use utils::AppError;

const DEFAULT_BASE_URL: &str = "https://scholarshipamerica.org/students/browse-scholarships/";

/// Command Line Interface for the scholarship listing scraper
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Comma-separated keywords to match against listing descriptions
    /// (read from stdin when not provided)
    #[arg(short, long)]
    keywords: Option<String>,

    /// Base URL of the paginated scholarship listing
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Total number of listing pages, including the first (subject to change
    /// upstream; no auto-detection is performed)
    #[arg(short, long, default_value = "9")]
    pages: u32,

    /// Output path for the text report
    #[arg(short, long, default_value = "scholarships.txt")]
    output: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value = "30")]
    timeout_secs: u64,

    /// Abort on the first page fetch failure instead of skipping the page
    #[arg(long)]
    fail_fast: bool,

    /// Also write a JSON metadata sidecar next to the report
    #[arg(long)]
    metadata: bool,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::debug!("Starting run with args: {:?}", args);

    if args.pages == 0 {
        return Err(AppError::Config("--pages must be at least 1".to_string()));
    }

    // 3. Resolve keywords before anything touches the network, so an empty
    //    keyword set fails the run without a single fetch.
    let raw_keywords = match &args.keywords {
        Some(keywords) => keywords.clone(),
        None => prompt_for_keywords()?,
    };
    let keywords = KeywordSet::parse(&raw_keywords)?;
    tracing::info!("Filtering scholarships by keywords: {}", keywords.join(", "));

    // 4. Initialize collaborators
    let client = ListingClient::new(&args.base_url, args.timeout_secs)?;
    let extractor = ListingExtractor::new();
    let writer = ReportWriter::new(&args.output);

    // 5. Fetch and extract page by page
    let (scholarships, pages_failed) =
        collect_scholarships(&client, &extractor, &keywords, args.pages, args.fail_fast).await?;

    if pages_failed == args.pages {
        return Err(AppError::Processing(format!(
            "all {} listing pages failed to fetch",
            args.pages
        )));
    }

    tracing::info!(
        "Extracted {} matching scholarships across {} pages ({} pages failed)",
        scholarships.len(),
        args.pages,
        pages_failed
    );

    // 6. Drop past deadlines and order by soonest deadline
    let today = Local::now().date_naive();
    let upcoming = deadline::upcoming_sorted(scholarships, today);

    // 7. Write the report
    let report_path = writer.write_report(&upcoming)?;
    if args.metadata {
        writer.write_metadata(&upcoming, &keywords)?;
    }

    tracing::info!(
        "Scholarships filtered by {} have been written to {}",
        keywords.join(", "),
        report_path.display()
    );

    Ok(())
}

/// Fetches pages 1..=total in numeric order, accumulating extracted records.
/// Returns the records together with the number of pages that failed to
/// fetch; a failed page is logged and skipped unless `fail_fast` is set.
async fn collect_scholarships(
    client: &ListingClient,
    extractor: &ListingExtractor,
    keywords: &KeywordSet,
    total_pages: u32,
    fail_fast: bool,
) -> Result<(Vec<ScholarshipRecord>, u32), AppError> {
    let mut scholarships = Vec::new();
    let mut pages_failed = 0;

    for page in 1..=total_pages {
        tracing::info!("Processing page {} of {}...", page, total_pages);

        match client.fetch_page(page).await {
            Ok(html) => {
                let records = extractor.extract_page(&html, keywords);
                tracing::info!("Page {} matched {} scholarships", page, records.len());
                scholarships.extend(records);
            }
            Err(e) if fail_fast => return Err(e.into()),
            Err(e) => {
                tracing::error!("Failed to fetch page {}: {}", page, e);
                pages_failed += 1;
            }
        }
    }

    Ok((scholarships, pages_failed))
}

/// Reads one line of keywords from stdin, prompting as an interactive run.
fn prompt_for_keywords() -> Result<String, AppError> {
    use std::io::{self, Write};

    print!("Enter keywords to filter scholarships (separated by commas): ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;

    Ok(line)
}
