pub mod builder;
pub mod mappers;
