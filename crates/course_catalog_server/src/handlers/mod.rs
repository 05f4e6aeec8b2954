pub mod health;
pub mod list;
pub mod lookup;
pub mod search;
