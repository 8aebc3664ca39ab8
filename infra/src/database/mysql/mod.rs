//! MySQL repository implementations.

mod title_repository_impl;
mod user_repository_impl;
mod watchlist_repository_impl;

pub use title_repository_impl::MySqlTitleRepository;
pub use user_repository_impl::MySqlUserRepository;
pub use watchlist_repository_impl::MySqlWatchlistRepository;

/// MySQL error number for duplicate key violations (ER_DUP_ENTRY)
const ER_DUP_ENTRY: u16 = 1062;

/// Whether an SQLx error is a duplicate-key violation
///
/// Uniqueness constraints are how concurrent creations serialize; callers
/// turn this into their typed duplicate error instead of a generic failure.
pub(crate) fn is_duplicate_key(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err
            .try_downcast_ref::<sqlx::mysql::MySqlDatabaseError>()
            .map(|mysql_err| mysql_err.number() == ER_DUP_ENTRY)
            .unwrap_or(false),
        _ => false,
    }
}
