pub mod diagnostics;
pub mod user;

pub use diagnostics::PostgresTestEntryRepository;
pub use user::PostgresUserRepository;
