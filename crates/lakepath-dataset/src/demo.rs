use crate::{
    dataset::{Dataset, DatasetError},
    schema::{DataType, Schema, StructField},
    value::Row,
};

// employee_row
fn employee_row(
    firstname: &str,
    middlename: Option<&str>,
    lastname: &str,
    id: Option<&str>,
    gender: &str,
    salary: i32,
) -> Row {
    Row(vec![
        firstname.into(),
        middlename.into(),
        lastname.into(),
        id.into(),
        gender.into(),
        salary.into(),
    ])
}

/// Schema of the employee demo table; every column is nullable.
#[must_use]
pub fn employee_schema() -> Schema {
    [
        ("firstname", DataType::String),
        ("middlename", DataType::String),
        ("lastname", DataType::String),
        ("id", DataType::String),
        ("gender", DataType::String),
        ("salary", DataType::Integer),
    ]
    .into_iter()
    .map(|(name, data_type)| StructField::new(name, data_type, true))
    .collect()
}

/// The literal five-row employee table.
pub fn employees() -> Result<Dataset, DatasetError> {
    let rows = vec![
        employee_row("James", None, "Smith", Some("36636"), "M", 3000),
        employee_row("Michael", Some("Rose"), "", Some("40288"), "M", 4000),
        employee_row("Robert", None, "Williams", Some("42114"), "M", 4000),
        employee_row("Maria", Some("Anne"), "Jones", Some("39192"), "F", 4000),
        employee_row("Jen", Some("Mary"), "Brown", None, "F", -1),
    ];

    Dataset::try_new(employee_schema(), rows)
}
