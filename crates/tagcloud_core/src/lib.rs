//! Tagcloud core: the pure tokenize -> count -> rank -> size pipeline.
mod count;
mod error;
mod select;
mod size;
mod token;

pub use count::word_counts;
pub use error::CoreError;
pub use select::{alphabetical_order, popularity_order, select_top, RankedEntry};
pub use size::{map_sizes, SizedWord, DEFAULT_MAX_SIZE, DEFAULT_MIN_SIZE};
pub use token::{tokenize, SeparatorSet, DEFAULT_SEPARATORS};
