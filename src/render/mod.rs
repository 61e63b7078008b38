pub mod bar;
pub mod histogram;

pub use histogram::{Layout, RenderSummary, Renderer};
