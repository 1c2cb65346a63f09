pub mod id;
pub mod post;
pub mod profile;
pub mod session;
pub mod user;
