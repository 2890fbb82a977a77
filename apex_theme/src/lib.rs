//! Token mapping pipeline for the Apex dashboard theme.
//!
//! Raw design-token exports (one per variant, typically light and dark) are
//! mapped through a shared [`MappingConfig`] into [`ThemeDocument`]s that the
//! UI configuration provider consumes directly. Each output key lists
//! candidate paths into the export; the first that resolves wins.
//!
//! The [`driver`] module ties the pieces together for the `apex-themegen`
//! tool.

pub mod driver;
pub mod error;
pub mod mapper;
pub mod mapping;
pub mod raw;
pub mod theme;
pub mod writer;

pub use driver::{BuildPlan, BuildReport, RenderedTheme, Variant, build, check, render_all};
pub use error::{ThemeError, ThemeResult};
pub use mapper::map_tokens;
pub use mapping::{ComponentKey, MappingConfig};
pub use raw::RawTokenDocument;
pub use theme::{Theme, ThemeDocument};
