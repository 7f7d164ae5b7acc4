pub mod candidate;
pub mod capture;
pub mod config;
pub mod entry;
pub mod errors;
pub mod google_books;
pub mod library;
pub mod ui;
