pub mod ai;
pub mod data;

pub use ai::{KnowledgeBase, FALLBACK_RESPONSE};
pub use data::{analyze_vitals, VitalsSimulator};
