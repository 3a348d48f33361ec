mod schema;
mod settings;

pub use schema::SchemaManager;
pub use settings::{Auth, Database, Logger, Server, Settings};
