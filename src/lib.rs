//! Add a categorical dimension to JSON-lines fixture data.
//!
//! Each input row becomes one row per dimension value. Count-like fields are
//! partitioned so the new rows still sum to the original; rate-like fields get an
//! independent random value per row.

pub mod error;
pub mod expand;
pub mod filter;
pub mod jsonl;
pub mod partition;
pub mod randomize;

pub use error::{FixtureError, Result};
pub use expand::{expand, DimensionSpec};
pub use filter::DistrictRange;
pub use jsonl::{read_records, write_records, Record};
pub use partition::{partition, split_among};
pub use randomize::randomize;
