//! ドメイン型（型と不変条件）

pub mod branch;
pub mod codes;
pub mod hours;
pub mod product;
pub mod snapshot;

pub use branch::Branch;
pub use codes::{normalize_codes, CodeList};
pub use hours::{DayHours, OpeningHours};
pub use product::Product;
pub use snapshot::Snapshot;
