// Batch pipeline: compare one input document against a directory.

pub mod check;
