//! ## Crate layout
//! - `schema`: column definitions and the `root` schema tree rendering.
//! - `value`: cell values and rows.
//! - `dataset`: an immutable in-memory table and its console rendering.
//! - `demo`: the literal employee table used as a smoke test.

pub mod dataset;
pub mod demo;
pub mod schema;
pub mod value;

pub use dataset::{DEFAULT_SHOW_LIMIT, DEFAULT_SHOW_TRUNCATE, Dataset, DatasetError};
pub use demo::{employee_schema, employees};
pub use schema::{DataType, Schema, StructField};
pub use value::{Row, Value};
