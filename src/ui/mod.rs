pub mod output;
pub mod prompts;

pub use prompts::{is_affirmative, Confirmer, TerminalConfirmer};
