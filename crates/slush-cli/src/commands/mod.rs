pub mod account;
pub mod dispatch;
pub mod letter;
pub mod manuscript;
pub mod message;
pub mod project;
pub mod schema;
pub mod shared;
