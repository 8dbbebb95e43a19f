pub use clock::*;
pub use config::*;
pub use display::*;
pub use error::*;
pub use machine::*;
pub use observable::*;
pub use quality::*;
pub use session::*;
pub use types::*;

mod clock;
mod config;
mod display;
mod error;
mod machine;
mod observable;
mod quality;
mod session;
mod types;
