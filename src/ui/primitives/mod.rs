pub mod border;
pub mod icon;
pub mod text;
pub mod width;
