pub mod config;
pub mod console;
pub mod error;
pub mod prompt;
pub mod reader;
pub mod report;
pub mod runner;
pub mod scorer;
pub mod state;
pub mod store;

pub use config::Config;
pub use console::Console;
pub use error::{InputError, QuizError, StoreError};
pub use state::{QuizState, Session};
