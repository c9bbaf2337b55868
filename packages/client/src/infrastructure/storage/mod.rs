//! Username persistence implementations

pub mod username_file;

pub use username_file::FileUsernameStore;
