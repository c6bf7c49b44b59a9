//! Log targets used across the pipeline.
//!
//! Filter them with `RUST_LOG`, e.g. `RUST_LOG=implication=trace`.

pub mod targets {
    pub const NORMALIZE: &str = "normalize";
    pub const IMPLICATION: &str = "implication";
    pub const EVALUATION: &str = "evaluation";
    pub const RENDER: &str = "render";
    pub const PIPELINE: &str = "pipeline";
}
