pub mod details;
pub mod search;

pub use details::Details;
pub use search::Search;

pub enum Screen {
    Search(Search),
    Details(Details),
}
