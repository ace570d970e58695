mod error;
mod field;
mod raw;
mod record;
mod stats;

pub use error::{Error, Result};
pub use field::FieldValue;
pub use raw::RawLog;
pub use record::ParsedRecord;
pub use stats::{ChannelStats, LinkStats, StatsSource, TraceHeader};
