//! rufred - A library for building Alfred Script Filter JSON responses
//!
//! rufred provides:
//! - A wire-accurate model of Script Filter result items ([`Item`], [`IconInfo`])
//! - An ordered response builder carrying workflow variables ([`Response`])
//! - Query matching for filtering candidate entries ([`matches_query`])
//! - Rendering to the Script Filter JSON envelope ([`Response::to_json`])
//!
//! A script filter typically builds one [`Response`], feeds every candidate
//! through the matched-item helpers, and prints the rendered JSON:
//!
//! ```
//! use rufred::Response;
//!
//! let query = "doc";
//! let mut resp = Response::new();
//! resp.set_variable("browser", "safari");
//! resp.add_matched_invocable(query, "docs", "Open documentation", "icon.png", "docs", "https://example.com/docs");
//! resp.add_matched_invocable(query, "issues", "Open issue tracker", "icon.png", "issues", "https://example.com/issues");
//! let json = resp.to_json().unwrap();
//! assert!(json.contains("\"title\":\"docs\""));
//! assert!(!json.contains("issues"));
//! ```

pub mod model;
pub mod render;
pub mod response;

pub use model::{matches_query, IconInfo, Item};
pub use render::RenderError;
pub use response::Response;
