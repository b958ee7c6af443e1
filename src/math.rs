pub mod angle;
pub mod vector;
