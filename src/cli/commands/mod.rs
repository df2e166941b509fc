pub mod call;
pub mod tools;
