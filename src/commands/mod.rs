//! Command implementations

mod apply;
mod create;
mod list;

pub use apply::apply;
pub use create::create;
pub use list::list;
