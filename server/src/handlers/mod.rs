//! Request handlers: request/response bodies and the calls into the store.

mod data;
mod foods;
mod lenient;
mod logs;
mod recipes;
mod settings;

pub use data::*;
pub use foods::*;
pub use logs::*;
pub use recipes::*;
pub use settings::*;
