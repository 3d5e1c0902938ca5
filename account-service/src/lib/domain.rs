pub mod diagnostics;
pub mod user;
