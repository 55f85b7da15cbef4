pub mod repo;
pub mod repo_types;

pub use repo_types::{NewUser, User};
