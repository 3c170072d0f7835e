// Pipelines that drive the scoring core over many inputs.

pub mod batch;
