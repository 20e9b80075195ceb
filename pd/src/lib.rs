//! promptdoc - customizable assistant prompts from a markdown document
//!
//! A prompt document is a hand-edited markdown file with one section per
//! prompt category. Each section carries its active value in a fenced block
//! after a `**Current Configuration**:` marker:
//!
//! ````text
//! ## 🔧 command-correction prompt
//!
//! **Current Configuration**:
//!
//! ```
//! You are an experienced system administrator...
//! ```
//! ````
//!
//! Documents that drift from this layout still load: when the marker is
//! missing, the first fence after the category keyword is used instead.
//!
//! # Example
//!
//! ```ignore
//! use promptdoc::PromptExtractor;
//!
//! let prompts = PromptExtractor::new("~/.config/promptdoc/prompts.md");
//! let system = prompts.get("correction", promptdoc::embedded::CORRECTION);
//! ```

pub mod category;
pub mod cli;
pub mod config;
pub mod embedded;
pub mod error;
pub mod extract;
pub mod fence;
mod loader;
mod table;

pub use category::{Category, UnknownCategory};
pub use config::Config;
pub use error::LoadError;
pub use extract::{Extraction, Rule};
pub use loader::{LoadStatus, PromptExtractor};
pub use table::PromptTable;
