pub mod area_price;
pub mod fetch;
pub mod labels;
pub mod normalize;
pub mod scrape;
pub mod viewings;

pub use crate::domain::model::{FieldValue, Record};
pub use crate::domain::ports::Fetcher;
pub use crate::utils::error::Result;
