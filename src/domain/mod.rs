pub mod cart;
pub mod money;
pub mod product;

pub use cart::*;
pub use money::*;
pub use product::*;
