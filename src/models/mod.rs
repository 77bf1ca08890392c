pub mod movie;
pub mod search;

pub use movie::{CategoryCount, Movie, MovieDetail};
pub use search::{
    FilterSpec, ParseQuickFilterError, ParseSortKeyError, QuickFilter, SortKey,
    ALL_CATEGORIES, HIGH_RATING_THRESHOLD, RECENT_YEAR_THRESHOLD,
};
