pub mod account;
pub mod auth;
pub mod github;
pub mod posts;
pub mod profile;
pub mod users;
