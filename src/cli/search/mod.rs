//! Search command - runs one occurrence search and prints it as JSON

use clap::Args;

use super::{init_logging, load_config};
use crate::api::types::SearchResponse;
use crate::domain::SearchQuery;

#[derive(Args, Clone, Debug)]
pub struct SearchArgs {
    /// Scientific name, e.g. "Panthera leo"
    #[arg(long)]
    pub species: String,

    /// Two-letter country code
    #[arg(long)]
    pub country: Option<String>,

    /// Year range as startYear,endYear
    #[arg(long)]
    pub years: Option<String>,

    /// Also fetch the Wikipedia summary
    #[arg(long)]
    pub with_summary: bool,
}

pub async fn run(args: SearchArgs) -> anyhow::Result<()> {
    let config = load_config();
    init_logging(&config);

    let query = SearchQuery::parse(&args.species, args.country.as_deref(), args.years.as_deref())?;

    let state = crate::create_app_state_with_config(&config).await?;
    let outcome = state.occurrence_service.search(query).await?;

    let detail = if args.with_summary && !outcome.is_empty() {
        Some(
            state
                .species_service
                .detail(outcome.query().species())
                .await,
        )
    } else {
        None
    };

    let response = SearchResponse::from_outcome(&outcome, detail);
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
