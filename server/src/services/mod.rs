mod product_store;

pub use product_store::*;
