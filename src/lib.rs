// textsim: lexical similarity between an original document and a candidate.
//
// This is the library root. Data flows text -> scoring -> output, with
// pipeline tying the stages together for the CLI.

pub mod config;
pub mod output;
pub mod pipeline;
pub mod scoring;
pub mod text;
