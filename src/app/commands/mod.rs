pub mod purge;
pub mod up;

pub use purge::PurgeOutcome;
pub use up::UpOutcome;
