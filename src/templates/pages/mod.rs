pub mod shoe_detail;
pub mod shoe_index;

pub use shoe_detail::shoe_detail_page;
pub use shoe_index::shoe_index_page;
