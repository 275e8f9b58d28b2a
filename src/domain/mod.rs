// Domain types and value objects
pub mod bar;
pub mod symbol;

// Re-export commonly used types
pub use bar::Bar;
pub use symbol::{Symbol, Timeframe};
