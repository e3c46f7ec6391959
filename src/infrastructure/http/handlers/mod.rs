//! HTTP Handlers

mod ping;
mod playback;
mod text;
mod websocket;

pub use ping::*;
pub use playback::*;
pub use text::*;
pub use websocket::*;
