//! Durable storage backends for the engine.

mod file;

pub use file::FileStorage;
