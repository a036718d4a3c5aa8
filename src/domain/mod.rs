pub mod logic;
pub mod shoe;

pub use logic::{classify, shows_sale_price, Variant};
pub use shoe::Shoe;
