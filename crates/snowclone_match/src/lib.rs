pub mod extract;
pub mod normalizer;
pub mod pattern;
pub mod tally;
pub mod types;
pub mod verify;

pub use extract::{extract_match, extract_page};
pub use normalizer::{normalize, CharFilter};
pub use pattern::{compile, CompiledPattern};
pub use tally::{aggregate, FrequencyTable};
pub use types::{Match, MatchField, ResultItem};
