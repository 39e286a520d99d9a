//! Data models for the books server

pub mod book;

pub use book::{Book, CreateBook, NewBook};
