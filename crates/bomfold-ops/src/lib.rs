pub mod ops_check;
pub mod ops_deps;
pub mod ops_resolve;
pub mod ops_setup;
