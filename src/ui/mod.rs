// Terminal presentation: dashboard rendering and the interactive loop.
pub mod console;

pub use console::{render_dashboard, render_history, Console, LineOutcome};
