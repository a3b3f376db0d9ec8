// Library interface for PacePilot
// The binary in main.rs is a thin shell over these modules

pub mod assess;
pub mod breakdown;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod models;
pub mod render;
pub mod solver;

// Re-export commonly used types for convenience
pub use assess::{assess, Advisory, Assessment, Outcome};
pub use breakdown::CycleBreakdown;
pub use config::{AppConfig, OutputFormat};
pub use error::{PacePilotError, Result, ValidationError};
pub use format::format_pace;
pub use logging::{LogConfig, LogFormat, LogLevel};
pub use models::{Field, MinSec, RunWalkPlan};
pub use solver::{solve, solve_plan};
