pub mod dump;
pub mod index;
pub mod search;
