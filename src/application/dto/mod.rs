pub mod auth;
pub mod github;
pub mod id;
pub mod post;
pub mod profile;
pub mod user;
