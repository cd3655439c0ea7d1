pub mod catalog;
pub mod outcome;
