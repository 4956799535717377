//! Attachment assembly
//!
//! Runs one card response through URL construction, fetch, parse and its
//! transform chain. Transport and parse failures propagate unchanged.

use crate::client::CardClient;
use crate::prelude::*;
use cardfetch_core::attachment::Attachment;
use cardfetch_core::variant::CardResponse;
use futures::future::join_all;
use log::{debug, warn};

/// Resolve a single card response into its final attachment
pub async fn resolve(client: &CardClient, card: &CardResponse) -> Result<Attachment, Error> {
    let url = card.url();
    let response = client.fetch(&url).await?;

    if !response.is_ok() {
        warn!(
            "{} lookup for {:?} returned HTTP {}",
            card.kind(),
            card.term(),
            response.status_code()
        );
    }

    let attachment = card.parse_attachment(&response)?;
    debug!(
        "Applying {} transforms to {:?}",
        card.transforms().len(),
        attachment.title
    );

    Ok(card.finish(attachment))
}

/// Resolve several independent card responses concurrently
///
/// Results come back in input order; one failure does not affect the others.
pub async fn resolve_all(
    client: &CardClient,
    cards: &[CardResponse],
) -> Vec<Result<Attachment, Error>> {
    join_all(cards.iter().map(|card| resolve(client, card))).await
}
