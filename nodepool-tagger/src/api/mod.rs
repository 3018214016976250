pub mod dtos;
pub mod function;
