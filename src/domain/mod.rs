// ============================================================================
// Domain Models Module
// Contains all core domain entities and value objects
// ============================================================================

pub mod config;
pub mod errors;
pub mod noise;
pub mod student;
pub mod weekday;

pub use config::NoiseScale;
pub use errors::{RecordError, RecordResult};
pub use noise::NoiseLevel;
pub use student::Student;
pub use weekday::DayOfWeek;
