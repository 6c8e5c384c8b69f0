pub mod constants;
pub mod error;
pub mod models;
pub mod traits;
pub mod utils;

pub use error::{
    ApiError, ArgumentError, ConfigError, Error, ErrorCategory, Result, TransportError,
};
pub use models::{Page, Pageable, PageableBuilder, Quote};
pub use traits::QuoteApi;
pub use utils::date::{format_wire_date, parse_wire_date};
