pub mod content;
pub mod debate;
pub mod gemini;
pub mod info;

pub use content::{ContentSegment, ModelContent};
pub use debate::{DebateRequest, DebateResponse};
