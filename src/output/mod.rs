pub mod schema;

pub use schema::{ArtifactSet, Summary};
