pub mod chat;
pub mod health;
pub mod matches;
pub mod profiles;
pub mod projects;
