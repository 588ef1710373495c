pub use crate::core::catalog::*;

use crate::response;
use crate::session::{Session, Transport};
use crate::{Cause, Error};

use futures_util::future;

/// Lists the first `limit` Pokémon, resolving every entry.
///
/// Entries are looked up concurrently but keep the listing order.
/// Any failed lookup fails the whole catalog.
pub async fn load<T: Transport>(session: &Session<T>, limit: usize) -> Result<Catalog, Error> {
    if limit == 0 {
        return Err(Error::CatalogUnavailable(Cause::InvalidLimit));
    }

    let listing: response::Listing = session
        .fetch(&session.config().listing_url(limit))
        .await
        .map_err(Error::CatalogUnavailable)?;

    let entries = future::try_join_all(
        listing
            .results
            .iter()
            .map(|reference| resolve(session, reference)),
    )
    .await
    .map_err(Error::CatalogUnavailable)?;

    log::info!("Loaded catalog with {} entries", entries.len());

    Ok(Catalog::new(entries))
}

async fn resolve<T: Transport>(
    session: &Session<T>,
    reference: &response::NamedResource,
) -> Result<Entry, Cause> {
    let pokemon: response::Pokemon = session.fetch(&reference.url).await?;
    let artwork = pokemon.artwork().map(str::to_owned);

    if artwork.is_none() {
        log::warn!("No artwork available for {}", pokemon.name);
    }

    Ok(Entry::new(pokemon.id, &pokemon.name, artwork))
}
