pub use crate::core::detail::*;

use crate::core;
use crate::pokemon;
use crate::response;
use crate::session::{Session, Transport};
use crate::{Cause, Error};

use futures_util::future;

/// Resolves the details of the Pokémon with the routed identifier.
///
/// Nothing is requested if the identifier is not a positive number.
pub async fn load<T: Transport>(session: &Session<T>, route: &str) -> Result<Detail, Error> {
    let Some(id) = pokemon::Id::parse(route) else {
        return Err(Error::DetailUnavailable(Cause::InvalidId(route.to_owned())));
    };

    fetch(session, id).await
}

pub async fn fetch<T: Transport>(session: &Session<T>, id: pokemon::Id) -> Result<Detail, Error> {
    let config = session.config();

    let (pokemon, species) = future::try_join(
        session.fetch::<response::Pokemon>(&config.pokemon_url(id)),
        session.fetch::<response::Species>(&config.species_url(id)),
    )
    .await
    .map_err(Error::DetailUnavailable)?;

    let base_stats: Vec<u32> = pokemon.stats.iter().map(|stat| stat.base_stat).collect();

    let stats = Stats::from_base(&base_stats)
        .ok_or(Error::DetailUnavailable(Cause::MissingStats(base_stats.len())))?;

    let flavor_text = match species.flavor_text(&config.flavor_version) {
        Some(text) => flavor_text(text),
        None => {
            log::warn!(
                "No {} flavor text available for {}",
                config.flavor_version,
                pokemon.name
            );

            String::new()
        }
    };

    Ok(Detail {
        number: id.number(),
        name: core::capitalize(&pokemon.name),
        artwork: pokemon.artwork().map(str::to_owned),
        types: pokemon
            .types
            .iter()
            .map(|slot| core::capitalize(&slot.type_.name))
            .collect(),
        weight: weight(pokemon.weight),
        height: height(pokemon.height),
        moves: moves(pokemon.moves.iter().map(|slot| slot.move_.name.as_str())),
        flavor_text,
        stats,
    })
}
