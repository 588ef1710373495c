use pokebase;

mod artwork;
mod screen;
mod widget;

use crate::pokebase::{Config, Session, pokemon};
use crate::screen::Screen;
use crate::screen::{details, search};

use iced::{Element, Font, Subscription, Task, Theme};

pub fn main() -> iced::Result {
    tracing_subscriber::fmt::init();

    iced::application(Pokedex::new, Pokedex::update, Pokedex::view)
        .subscription(Pokedex::subscription)
        .theme(Pokedex::theme)
        .default_font(Font::MONOSPACE)
        .window_size((1400.0, 900.0))
        .run()
}

struct Pokedex {
    session: Session,
    screen: Screen,
}

#[derive(Debug, Clone)]
enum Message {
    Search(search::Message),
    Details(details::Message),
}

impl Pokedex {
    fn new() -> (Self, Task<Message>) {
        let session = Session::new(Config::from_env());
        let (search, task) = screen::Search::new(&session);

        (
            Self {
                session,
                screen: Screen::Search(search),
            },
            task.map(Message::Search),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Search(message) => {
                let Screen::Search(search) = &mut self.screen else {
                    return Task::none();
                };

                match search.update(message, &self.session) {
                    search::Action::None => Task::none(),
                    search::Action::Run(task) => task.map(Message::Search),
                    search::Action::Open(pokemon) => self.open(pokemon),
                }
            }
            Message::Details(message) => {
                let Screen::Details(details) = &mut self.screen else {
                    return Task::none();
                };

                match details.update(message, &self.session) {
                    details::Action::None => Task::none(),
                    details::Action::Run(task) => task.map(Message::Details),
                    details::Action::Navigate(pokemon) => self.open(pokemon),
                    details::Action::Back => {
                        let (search, task) = screen::Search::new(&self.session);
                        self.screen = Screen::Search(search);

                        task.map(Message::Search)
                    }
                }
            }
        }
    }

    fn open(&mut self, pokemon: pokemon::Id) -> Task<Message> {
        let (details, task) = screen::Details::new(pokemon, &self.session);
        self.screen = Screen::Details(details);

        task.map(Message::Details)
    }

    fn view(&self) -> Element<'_, Message> {
        match &self.screen {
            Screen::Search(search) => search.view().map(Message::Search),
            Screen::Details(details) => details.view().map(Message::Details),
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        match &self.screen {
            Screen::Search(_) => Subscription::none(),
            Screen::Details(details) => details.subscription().map(Message::Details),
        }
    }

    fn theme(&self) -> Theme {
        Theme::CatppuccinMocha
    }
}
