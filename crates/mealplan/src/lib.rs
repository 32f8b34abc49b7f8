mod generate;
mod query;
mod random;
mod replacement;
mod root;
mod source;

pub use generate::*;
pub use query::*;
pub use random::*;
pub use replacement::*;
pub use root::*;
pub use source::*;
