pub mod catalog;
pub mod config;
pub mod detail;
pub mod error;
pub mod session;

mod response;

pub use pokebase_core as core;

pub use catalog::Catalog;
pub use config::Config;
pub use crate::core::pokemon;
pub use crate::core::{Id, search};
pub use detail::Detail;
pub use error::{Cause, Error};
pub use session::Session;
