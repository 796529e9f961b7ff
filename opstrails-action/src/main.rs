//! OpsTrails event submitter for GitHub Actions.
//!
//! Reads the action inputs from the environment, posts one CloudEvent to
//! the OpsTrails ingestion API, and reports the result as step outputs or a
//! failure annotation. One submission per run, no retries.

mod error;
mod gha;
mod inputs;
mod payload;

use clap::Parser;
use opstrails_sdk::client::EventsClient;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use error::ActionError;
use inputs::{ActionInputs, Args};

#[tokio::main]
async fn main() {
    init_tracing();

    let inputs = Args::parse().normalize();
    let github_repository = std::env::var("GITHUB_REPOSITORY").unwrap_or_default();

    if let Err(e) = run(inputs, &github_repository).await {
        gha::set_failed(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(inputs: ActionInputs, github_repository: &str) -> Result<(), ActionError> {
    let Some(api_key) = inputs.api_key.as_deref() else {
        return Err(ActionError::MissingInput("api-key"));
    };

    let (event, data_warning) = payload::build_event(&inputs, github_repository)?;

    // Mask the key before anything else can reach the transcript.
    gha::add_mask(api_key);

    if let Some(warning) = data_warning {
        tracing::warn!("{warning}");
        gha::warning(&warning);
    }

    tracing::info!(
        "Tracking \"{}\" event for source \"{}\"",
        event.event_type,
        event.source
    );

    let client = EventsClient::new(inputs.api_url.clone(), api_key);
    let receipt = client.track_event(&event).await?;

    gha::set_output("event-id", &receipt.id)?;
    gha::set_output("event-time", &receipt.time)?;

    tracing::info!("Event tracked successfully (id: {})", receipt.id);

    Ok(())
}

/// Initialize the tracing subscriber with environment-based filtering.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
