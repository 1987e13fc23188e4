pub mod source;
pub mod directory;
pub mod validation;
pub mod matching;
pub mod booking;

pub use source::{DirectoryError, JsonFileSource, ProviderSource};
pub use directory::{ProviderDirectory, ProviderMatches};
pub use matching::ProviderMatchingService;
pub use booking::BookingService;
