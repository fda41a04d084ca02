//! User persistence port.

pub mod repository;

pub use repository::UserRepository;
