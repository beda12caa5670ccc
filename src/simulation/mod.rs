//! Epidemic simulation reporting
//!
//! Aggregates per-person daily records of an agent-based simulation into
//! per-neighborhood state counts, summarises a finished run, and exports
//! collections of runs as CSV. The simulation engine itself lives elsewhere.

pub mod chart;
pub mod result;
pub mod state;
pub mod storage;

pub use chart::{CountCurves, Marker, Series};
pub use result::{HoodCounts, HoodId, PersonRecord, SimulationResult, Summary};
pub use state::{PersonState, StateCounts};
pub use storage::SimulationResultStorage;
