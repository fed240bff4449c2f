use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

///
/// DataType
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
pub enum DataType {
    #[display("integer")]
    Integer,
    #[display("string")]
    String,
}

///
/// StructField
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct StructField {
    pub name: String,
    pub data_type: DataType,
    pub nullable: bool,
}

impl StructField {
    #[must_use]
    pub fn new(name: impl Into<String>, data_type: DataType, nullable: bool) -> Self {
        Self {
            name: name.into(),
            data_type,
            nullable,
        }
    }
}

///
/// Schema
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Schema {
    pub fields: Vec<StructField>,
}

impl Schema {
    #[must_use]
    pub const fn new(fields: Vec<StructField>) -> Self {
        Self { fields }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&StructField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Render as an indented tree:
    ///
    /// ```text
    /// root
    ///  |-- firstname: string (nullable = true)
    /// ```
    #[must_use]
    pub fn tree_string(&self) -> String {
        let mut out = String::from("root\n");

        for field in &self.fields {
            let _ = writeln!(
                out,
                " |-- {}: {} (nullable = {})",
                field.name, field.data_type, field.nullable
            );
        }

        out
    }
}

impl FromIterator<StructField> for Schema {
    fn from_iter<I: IntoIterator<Item = StructField>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
