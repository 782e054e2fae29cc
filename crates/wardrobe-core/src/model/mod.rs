mod chat;
mod outfit;
mod weather;

pub use chat::*;
pub use outfit::*;
pub use weather::*;
