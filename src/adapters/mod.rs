pub mod github;
pub mod redis;
