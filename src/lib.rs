pub mod config;
pub mod db;
pub mod error;
pub mod users;

pub use config::AppConfig;
pub use db::AppState;
pub use error::{RepoError, RepoResult};
