mod name;

pub mod catalog;
pub mod detail;
pub mod pokemon;
pub mod search;

pub use catalog::Catalog;
pub use detail::Detail;
pub use name::{capitalize, title};
pub use pokemon::Id;
