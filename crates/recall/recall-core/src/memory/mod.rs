pub mod confidence;
pub mod record;
pub mod types;

pub use confidence::Confidence;
pub use record::MemoryRecord;
pub use types::MemoryType;
