pub mod not_found;
pub mod products;
pub mod solutions;
