//! wbsmap renders a hierarchical work-breakdown outline as a radial mind
//! map (PNG/SVG), a markdown nested list, or an ASCII tree.
//!
//! Pipeline: [`outline::load_document`] parses the JSON document,
//! [`builder::OutlineBuilder`] turns it into an arena-backed tree,
//! [`layout::apply`] assigns polar coordinates (diagram formats only), and
//! the [`render`] backends write the artifact.

pub mod arena;
pub mod builder;
pub mod cli;
pub mod config;
pub mod errors;
pub mod layout;
pub mod outline;
pub mod render;
pub mod util;

pub use arena::{NodeData, OutlineArena, OutlineNode};
pub use builder::OutlineBuilder;
pub use config::{CanvasSettings, LayoutSettings, Settings};
pub use errors::{OutlineError, OutlineResult};
pub use outline::{load_document, OutlineDocument};
