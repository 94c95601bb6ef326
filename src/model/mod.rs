pub mod policy;
pub mod student;
