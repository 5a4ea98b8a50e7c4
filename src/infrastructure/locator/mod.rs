//! Artifact locator implementations

mod output_dir;

pub use output_dir::OutputDirLocator;
