pub mod gemini;
pub mod provider;
pub mod topic_gate;
