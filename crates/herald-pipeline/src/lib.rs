//! The two Herald CI pipelines: PR review and architecture audit.
//!
//! Each pipeline is a straight-line sequence of four stages: read the local
//! artifact, build the prompt, call the completion service, publish the
//! result to GitHub.

pub mod artifact;
pub mod github;
pub mod llm;
pub mod pipeline;
pub mod prompt;
