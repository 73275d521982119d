// plagcheck: flag copied sentences by comparing one document against a
// directory of candidates.
//
// This is the library root. Each module corresponds to one stage of the
// check: text preparation, similarity scoring, the batch loop, and output.

pub mod config;
pub mod document;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod similarity;
pub mod text;
