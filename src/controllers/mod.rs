pub mod agent;
pub mod health;
pub mod notes;
pub mod tools;
