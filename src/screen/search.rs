use crate::artwork::Artwork;
use crate::pokebase::catalog::{self, Catalog, Entry};
use crate::pokebase::{Session, pokemon, search};
use crate::widget::logo;

use iced::widget::{
    button, center, center_x, column, container, grid, horizontal_space, image, pop, right,
    scrollable, text, text_input,
};
use iced::{Center, ContentFit, Element, Fill, Task};

use function::Binary;
use std::collections::HashMap;

pub struct Search {
    state: State,
    images: HashMap<pokemon::Id, Image>,
}

enum State {
    Loading,
    Loaded {
        catalog: Catalog,
        query: String,
        matches: Catalog,
    },
    Errored,
}

enum Image {
    Loading,
    Loaded(image::Handle),
    Errored,
}

#[derive(Debug, Clone)]
pub enum Message {
    CatalogLoaded(Result<Catalog, pokebase::Error>),
    QueryChanged(String),
    EntryShown(pokemon::Id),
    ArtworkFetched(pokemon::Id, Result<Artwork, anywho::Error>),
    Open(pokemon::Id),
}

pub enum Action {
    None,
    Run(Task<Message>),
    Open(pokemon::Id),
}

impl Search {
    pub fn new(session: &Session) -> (Self, Task<Message>) {
        let session = session.clone();

        (
            Self {
                state: State::Loading,
                images: HashMap::new(),
            },
            Task::perform(
                async move {
                    let limit = session.config().catalog_limit;

                    catalog::load(&session, limit).await
                },
                Message::CatalogLoaded,
            ),
        )
    }

    pub fn update(&mut self, message: Message, session: &Session) -> Action {
        match message {
            Message::CatalogLoaded(Ok(catalog)) => {
                self.state = State::Loaded {
                    matches: catalog.clone(),
                    catalog,
                    query: String::new(),
                };

                Action::Run(text_input::focus("search"))
            }
            Message::CatalogLoaded(Err(error)) => {
                log::error!("{error}");

                self.state = State::Errored;

                Action::None
            }
            Message::QueryChanged(new_query) => {
                let State::Loaded {
                    catalog,
                    query,
                    matches,
                } = &mut self.state
                else {
                    return Action::None;
                };

                *matches = search::filter(catalog, &new_query);
                *query = new_query;

                Action::None
            }
            Message::EntryShown(pokemon) => {
                let State::Loaded { catalog, .. } = &self.state else {
                    return Action::None;
                };

                if self.images.contains_key(&pokemon) {
                    return Action::None;
                }

                let Some(url) = catalog
                    .get(pokemon)
                    .and_then(|entry| entry.artwork.as_deref())
                else {
                    let _ = self.images.insert(pokemon, Image::Errored);

                    return Action::None;
                };

                let _ = self.images.insert(pokemon, Image::Loading);

                Action::Run(Task::perform(
                    Artwork::fetch(url, session),
                    Message::ArtworkFetched.with(pokemon),
                ))
            }
            Message::ArtworkFetched(pokemon, Ok(artwork)) => {
                let _ = self.images.insert(
                    pokemon,
                    Image::Loaded(image::Handle::from_rgba(
                        artwork.width,
                        artwork.height,
                        artwork.rgba,
                    )),
                );

                Action::None
            }
            Message::ArtworkFetched(pokemon, Err(error)) => {
                log::warn!("{error}");

                let _ = self.images.insert(pokemon, Image::Errored);

                Action::None
            }
            Message::Open(pokemon) => Action::Open(pokemon),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let (query, matches) = match &self.state {
            State::Loading => return center(text("Loading...")).into(),
            State::Errored => {
                return center(
                    container(text("Oops, something went wrong while loading the Pokédex."))
                        .padding(10)
                        .style(container::bordered_box),
                )
                .into();
            }
            State::Loaded { query, matches, .. } => (query, matches),
        };

        let header = column![
            logo(40),
            text("Search for a Pokémon by name or using its National Pokédex number."),
            container(
                text_input("Search", query)
                    .on_input(Message::QueryChanged)
                    .padding(10)
                    .id("search"),
            )
            .max_width(600),
        ]
        .spacing(20)
        .align_x(Center);

        let results: Element<_> = if matches.is_empty() {
            center(
                container(text!("No Pokémon were found matching: \"{query}\""))
                    .padding(10)
                    .style(container::bordered_box),
            )
            .into()
        } else {
            scrollable(
                grid(
                    matches
                        .entries()
                        .iter()
                        .map(|entry| card(entry, self.images.get(&entry.id))),
                )
                .fluid(240)
                .height(grid::aspect_ratio(3, 4))
                .spacing(10),
            )
            .width(Fill)
            .height(Fill)
            .spacing(10)
            .into()
        };

        column![center_x(header), results]
            .spacing(30)
            .padding(20)
            .into()
    }
}

fn card<'a>(entry: &'a Entry, artwork: Option<&'a Image>) -> Element<'a, Message> {
    let artwork: Element<_> = match artwork {
        Some(Image::Loaded(handle)) => image(handle)
            .width(Fill)
            .height(Fill)
            .content_fit(ContentFit::Contain)
            .into(),
        _ => horizontal_space().into(),
    };

    let card = button(
        container(
            column![
                right(text!("#{}", entry.number).size(14)),
                center(artwork),
                center_x(text(entry.name.as_str())),
            ]
            .spacing(10),
        )
        .padding(10)
        .width(Fill)
        .height(Fill)
        .style(container::bordered_box),
    )
    .on_press(Message::Open(entry.id))
    .padding(0)
    .style(button::text);

    pop(card)
        .key(entry.number.as_str())
        .on_show(move |_size| Message::EntryShown(entry.id))
        .into()
}
