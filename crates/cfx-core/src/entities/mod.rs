//! Entity structs for CrowdFix domain objects.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema validation.

mod geotag;
mod issue;

pub use geotag::Geotag;
pub use issue::Issue;
