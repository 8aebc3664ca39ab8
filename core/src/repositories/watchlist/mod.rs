mod mock;
#[path = "trait.rs"]
mod trait_;

pub use mock::MockWatchlistRepository;
pub use trait_::WatchlistRepository;
