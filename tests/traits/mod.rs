pub mod into_chain;
pub mod result_ext;
