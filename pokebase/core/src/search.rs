use crate::Catalog;
use crate::catalog::Entry;

/// The shape of a search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    All,
    Number(String),
    Name(String),
}

impl Query {
    pub fn parse(query: &str) -> Self {
        if query.is_empty() {
            Self::All
        } else if query.bytes().all(|byte| byte.is_ascii_digit()) {
            Self::Number(query.to_owned())
        } else {
            Self::Name(query.to_lowercase())
        }
    }

    pub fn matches(&self, entry: &Entry) -> bool {
        match self {
            Self::All => true,
            Self::Number(number) => entry.number.contains(number.as_str()),
            Self::Name(name) => entry.name.to_lowercase().contains(name.as_str()),
        }
    }
}

/// Narrows down the catalog to the entries matching the query.
///
/// Numeric queries look at display numbers, anything else at names.
pub fn filter(catalog: &Catalog, query: &str) -> Catalog {
    let query = Query::parse(query);

    if query == Query::All {
        return catalog.clone();
    }

    catalog
        .entries()
        .iter()
        .filter(|entry| query.matches(entry))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::pokemon;

    use pretty_assertions::assert_eq;

    fn catalog() -> Catalog {
        [
            (1, "bulbasaur"),
            (4, "charmander"),
            (10, "caterpie"),
            (25, "pikachu"),
            (26, "raichu"),
            (100, "voltorb"),
            (101, "electrode"),
            (111, "rhyhorn"),
            (122, "mr-mime"),
        ]
        .into_iter()
        .map(|(id, name): (u32, &str)| {
            catalog::Entry::new(pokemon::Id::try_from(id).unwrap(), name, None)
        })
        .collect()
    }

    fn names(catalog: &Catalog) -> Vec<&str> {
        catalog.entries().iter().map(|entry| entry.name.as_str()).collect()
    }

    #[test]
    fn empty_query_returns_everything() {
        let catalog = catalog();
        let matches = filter(&catalog, "");

        assert!(matches.ptr_eq(&catalog));
        assert_eq!(matches.entries(), catalog.entries());
    }

    #[test]
    fn queries_are_classified_by_shape() {
        assert_eq!(Query::parse(""), Query::All);
        assert_eq!(Query::parse("025"), Query::Number("025".to_owned()));
        assert_eq!(Query::parse("Pika"), Query::Name("pika".to_owned()));
        assert_eq!(Query::parse("25a"), Query::Name("25a".to_owned()));
        assert_eq!(Query::parse(" 25"), Query::Name(" 25".to_owned()));
    }

    #[test]
    fn numeric_queries_match_number_substrings() {
        let catalog = catalog();

        assert_eq!(
            names(&filter(&catalog, "1")),
            [
                "Bulbasaur",
                "Caterpie",
                "Voltorb",
                "Electrode",
                "Rhyhorn",
                "Mr-mime"
            ]
        );
        assert_eq!(names(&filter(&catalog, "025")), ["Pikachu"]);
        assert_eq!(names(&filter(&catalog, "02")), ["Pikachu", "Raichu"]);
        assert_eq!(names(&filter(&catalog, "0")).len(), 7);
        assert!(filter(&catalog, "999").is_empty());

        let matches = filter(&catalog, "10");
        assert!(
            matches
                .entries()
                .iter()
                .all(|entry| entry.number.contains("10"))
        );
        assert_eq!(names(&matches), ["Caterpie", "Voltorb", "Electrode"]);
    }

    #[test]
    fn textual_queries_match_names_ignoring_case() {
        let catalog = catalog();

        assert_eq!(names(&filter(&catalog, "chu")), ["Pikachu", "Raichu"]);
        assert_eq!(names(&filter(&catalog, "PIKA")), ["Pikachu"]);
        assert_eq!(names(&filter(&catalog, "r-m")), ["Mr-mime"]);
        assert!(filter(&catalog, "mewtwo").is_empty());
    }

    #[test]
    fn textual_queries_never_look_at_numbers() {
        let catalog = catalog();

        assert!(filter(&catalog, "#025").is_empty());
        assert!(filter(&catalog, "25 ").is_empty());
    }

    #[test]
    fn order_is_preserved() {
        let catalog = catalog();

        assert_eq!(
            names(&filter(&catalog, "a")),
            ["Bulbasaur", "Charmander", "Caterpie", "Pikachu", "Raichu"]
        );
    }
}
