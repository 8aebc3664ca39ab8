mod mock;
#[path = "trait.rs"]
mod trait_;

pub use mock::MockUserRepository;
pub use trait_::UserRepository;
