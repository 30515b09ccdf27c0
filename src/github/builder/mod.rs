pub mod release_builder;

pub use release_builder::ReleaseBuilder;
