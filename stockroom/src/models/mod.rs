mod product;
mod validate;

pub use product::*;
pub use validate::*;
