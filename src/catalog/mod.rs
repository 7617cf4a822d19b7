mod catalog;
mod load;
mod song;

pub use catalog::{
    parse_song_id, Catalog, CatalogBuildResult, Problem as LoadCatalogProblem, QueryError,
};
pub use load::{load_catalog, parse_songs, LoadCatalogError, DEFAULT_DATA_FILE};
pub use song::Song;
