mod query;
mod root;

pub use query::*;
pub use root::*;
