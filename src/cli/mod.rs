pub mod generate;
pub mod import;
pub mod migrate;
pub mod server;
