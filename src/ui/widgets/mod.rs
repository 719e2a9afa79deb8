pub mod r#box;
pub mod table;
