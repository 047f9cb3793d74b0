// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod articles;
pub mod rows;
pub mod taxonomy;
pub mod time;
pub mod util;

pub use articles::InMemoryArticles;
pub use taxonomy::InMemoryTaxonomy;
pub use time::{days_after_fixed, fixed_now};
pub use util::{FixedClock, FailingTaxonomy};
