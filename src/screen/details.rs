use crate::artwork::Artwork;
use crate::pokebase::detail::{self, Detail, Stats};
use crate::pokebase::{Session, pokemon};
use crate::widget::{pokeball, type_color};

use iced::border;
use iced::keyboard;
use iced::widget::{
    button, center, column, container, horizontal_space, image, progress_bar, row, stack, text,
};
use iced::{Center, ContentFit, Element, Fill, FillPortion, Subscription, Task};

use function::Binary;

pub struct Details {
    pokemon: pokemon::Id,
    state: State,
    artwork: Image,
}

enum State {
    Loading,
    Loaded(Detail),
    Errored,
}

enum Image {
    Loading,
    Loaded(image::Handle),
    Errored,
}

#[derive(Debug, Clone)]
pub enum Message {
    DetailLoaded(pokemon::Id, Result<Detail, pokebase::Error>),
    ArtworkFetched(pokemon::Id, Result<Artwork, anywho::Error>),
    Previous,
    Next,
    Back,
}

pub enum Action {
    None,
    Run(Task<Message>),
    Navigate(pokemon::Id),
    Back,
}

impl Details {
    pub fn new(pokemon: pokemon::Id, session: &Session) -> (Self, Task<Message>) {
        let session = session.clone();

        (
            Self {
                pokemon,
                state: State::Loading,
                artwork: Image::Loading,
            },
            Task::perform(
                async move { detail::fetch(&session, pokemon).await },
                Message::DetailLoaded.with(pokemon),
            ),
        )
    }

    pub fn update(&mut self, message: Message, session: &Session) -> Action {
        match message {
            Message::DetailLoaded(pokemon, _) | Message::ArtworkFetched(pokemon, _)
                if pokemon != self.pokemon =>
            {
                log::debug!("Discarding outdated response for #{}", pokemon.number());

                Action::None
            }
            Message::DetailLoaded(_, Ok(detail)) => {
                let action = match &detail.artwork {
                    Some(url) => Action::Run(Task::perform(
                        Artwork::fetch(url, session),
                        Message::ArtworkFetched.with(self.pokemon),
                    )),
                    None => {
                        self.artwork = Image::Errored;

                        Action::None
                    }
                };

                self.state = State::Loaded(detail);

                action
            }
            Message::DetailLoaded(_, Err(error)) => {
                log::error!("{error}");

                self.state = State::Errored;

                Action::None
            }
            Message::ArtworkFetched(_, Ok(artwork)) => {
                self.artwork = Image::Loaded(image::Handle::from_rgba(
                    artwork.width,
                    artwork.height,
                    artwork.rgba,
                ));

                Action::None
            }
            Message::ArtworkFetched(_, Err(error)) => {
                log::warn!("{error}");

                self.artwork = Image::Errored;

                Action::None
            }
            Message::Previous => match self.pokemon.previous() {
                Some(previous) => Action::Navigate(previous),
                None => Action::None,
            },
            Message::Next => Action::Navigate(self.pokemon.next()),
            Message::Back => Action::Back,
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let content: Element<_> = match &self.state {
            State::Loading => center(text("Loading...")).into(),
            State::Errored => center(
                container(text(
                    "Oops, something went wrong while loading the details of this Pokémon.",
                ))
                .padding(10)
                .style(container::bordered_box),
            )
            .into(),
            State::Loaded(detail) => self.detail(detail),
        };

        let back = button(text("Back to the Pokédex").size(14))
            .on_press(Message::Back)
            .style(button::text);

        let previous = self
            .pokemon
            .previous()
            .map(|_| navigation("<", Message::Previous));

        column![
            back,
            row![]
                .push_maybe(previous)
                .push(container(content).width(Fill).height(Fill))
                .push(navigation(">", Message::Next))
                .spacing(20)
                .align_y(Center)
                .height(Fill),
        ]
        .spacing(10)
        .padding(20)
        .into()
    }

    fn detail<'a>(&'a self, detail: &'a Detail) -> Element<'a, Message> {
        let summary = column![
            text!("#{}", detail.number).size(14),
            text(detail.name.as_str()).size(40),
            text(detail.flavor_text.as_str()),
        ]
        .spacing(10)
        .width(FillPortion(2));

        let color = detail
            .types
            .first()
            .map(|name| type_color(name))
            .unwrap_or_else(|| type_color("normal"));

        let artwork: Element<_> = match &self.artwork {
            Image::Loaded(handle) => image(handle)
                .width(Fill)
                .height(Fill)
                .content_fit(ContentFit::Contain)
                .into(),
            Image::Loading => horizontal_space().into(),
            Image::Errored => center(text(detail.name.as_str())).into(),
        };

        let artwork = stack![center(pokeball(300, color)), center(artwork)]
            .width(FillPortion(3))
            .height(Fill);

        let heading = |label| text(label).size(14);

        let types = row(detail.types.iter().map(|name| badge(name))).spacing(5);

        let stats = column(detail.stats.iter().map(|(label, value)| {
            column![
                text!("{label}: {value}").size(14),
                progress_bar(0.0..=Stats::MAX as f32, value as f32),
            ]
            .spacing(5)
            .into()
        }))
        .spacing(10);

        let attributes = column![
            heading("TYPE"),
            types,
            heading("WEIGHT"),
            text!("{} kg", detail.weight),
            heading("HEIGHT"),
            text!("{} m", detail.height),
            heading("MOVES"),
            text(detail.moves.join(", ")),
            stats,
        ]
        .spacing(10)
        .width(FillPortion(2));

        row![summary, artwork, attributes]
            .spacing(40)
            .align_y(Center)
            .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(|key, modifiers| {
            use keyboard::key::{Key, Named};

            if !modifiers.is_empty() {
                return None;
            }

            Some(match key.as_ref() {
                Key::Named(Named::ArrowLeft) => Message::Previous,
                Key::Named(Named::ArrowRight) => Message::Next,
                Key::Named(Named::Escape) => Message::Back,
                _ => None?,
            })
        })
    }
}

fn navigation<'a>(label: &'a str, on_press: Message) -> Element<'a, Message> {
    button(text(label).size(20))
        .padding([10, 15])
        .on_press(on_press)
        .into()
}

fn badge(name: &str) -> Element<'_, Message> {
    let color = type_color(name);

    container(text(name).size(12))
        .padding([4, 12])
        .style(move |_theme| {
            container::Style::default()
                .background(color)
                .border(border::rounded(12))
        })
        .into()
}
