use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BodyError {
    #[error("Number of mounting points ({mounts}) has to be equal to number of arms ({props})")]
    MountPointMismatch { props: usize, mounts: usize },

    #[error("Unknown propeller size class: {0}")]
    UnknownSizeClass(u8),

    #[error("Failed to read body config file: {0}")]
    FileError(#[from] io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
}
