// ============================================================================
// Demo Drivers Module
// Render each exercise to any text output stream
// ============================================================================
//
// The binaries under src/bin/ only parse arguments, install logging and call
// into these functions, so the rendered text is testable in-process.

pub mod noise;
pub mod roots;
pub mod student;
