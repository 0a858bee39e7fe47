mod common;
mod merge;
mod schema;
