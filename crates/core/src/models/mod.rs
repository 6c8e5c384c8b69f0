pub mod page;
pub mod pageable;
pub mod quote;

pub use page::Page;
pub use pageable::{Pageable, PageableBuilder};
pub use quote::Quote;
