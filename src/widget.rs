use iced::widget::{canvas, text};
use iced::{Color, Element, Pixels};

pub fn logo<'a, Message>(size: impl Into<Pixels>) -> Element<'a, Message> {
    text("Pokédex").size(size).into()
}

/// A pokéball silhouette tinted with the given color.
pub fn pokeball<'a, Message: 'a>(size: impl Into<Pixels>, color: Color) -> Element<'a, Message> {
    use iced::mouse;
    use iced::{Point, Rectangle, Renderer, Size, Theme};

    struct Pokeball {
        color: Color,
    }

    impl<Message> canvas::Program<Message> for Pokeball {
        type State = canvas::Cache;

        fn draw(
            &self,
            cache: &Self::State,
            renderer: &Renderer,
            theme: &Theme,
            bounds: Rectangle,
            _cursor: mouse::Cursor,
        ) -> Vec<canvas::Geometry> {
            let pokeball = cache.draw(renderer, bounds.size(), |frame| {
                const RADIUS: f32 = 100.0;
                const LINE: f32 = 30.0;

                let background = theme.palette().background;

                let center = Point::new(RADIUS, RADIUS);
                let outer_circle = canvas::Path::circle(center, RADIUS);
                let inner_circle = canvas::Path::circle(center, RADIUS / 2.0);
                let button = canvas::Path::circle(center, RADIUS / 4.0);

                let line = Rectangle::new(
                    Point::new(0.0, RADIUS - LINE / 2.0),
                    Size::new(2.0 * RADIUS, LINE),
                );

                let scale = (bounds.width - 0.5) / (2.0 * RADIUS);

                frame.scale(scale);

                frame.fill(&outer_circle, self.color);
                frame.fill(&inner_circle, background);
                frame.fill_rectangle(line.position(), line.size(), background);
                frame.fill(&button, self.color);
            });

            vec![pokeball]
        }
    }

    let size = size.into();

    canvas(Pokeball {
        color: color.scale_alpha(0.3),
    })
    .width(size)
    .height(size)
    .into()
}

/// The signature color of a Pokémon type.
pub fn type_color(name: &str) -> Color {
    let [r, g, b] = match name.to_lowercase().as_str() {
        "fire" => [0xEE, 0x81, 0x30],
        "water" => [0x63, 0x90, 0xF0],
        "electric" => [0xF7, 0xD0, 0x2C],
        "grass" => [0x7A, 0xC7, 0x4C],
        "ice" => [0x96, 0xD9, 0xD6],
        "fighting" => [0xC2, 0x2E, 0x28],
        "poison" => [0xA3, 0x3E, 0xA1],
        "ground" => [0xE2, 0xBF, 0x65],
        "flying" => [0xA9, 0x8F, 0xF3],
        "psychic" => [0xF9, 0x55, 0x87],
        "bug" => [0xA6, 0xB9, 0x1A],
        "rock" => [0xB6, 0xA1, 0x36],
        "ghost" => [0x73, 0x57, 0x97],
        "dragon" => [0x6F, 0x35, 0xFC],
        "dark" => [0x70, 0x57, 0x46],
        "steel" => [0xB7, 0xB7, 0xCE],
        "fairy" => [0xD6, 0x85, 0xAD],
        _ => [0xA8, 0xA7, 0x7A],
    };

    Color::from_rgb8(r, g, b)
}
