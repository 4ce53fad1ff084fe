//! Shared utilities for command implementations.

use std::path::{Path, PathBuf};

use tack_config::{Assembler, BuildConfiguration, Mode, ProjectSettings};
use tracing::{debug, info};

use crate::cli::ModeArg;
use crate::error::{CliError, Result};

/// Pick the build mode: an explicit flag wins over `NODE_ENV`.
pub fn resolve_mode(arg: Option<ModeArg>) -> Mode {
    match arg {
        Some(arg) => {
            let mode = Mode::from(arg);
            debug!(%mode, "build mode set on the command line");
            mode
        }
        None => Mode::from_env(),
    }
}

/// Resolve the project root, defaulting to the current directory.
///
/// The returned path is canonical, so everything rendered from it is
/// absolute even when `--root` was given relative to the working directory.
///
/// # Errors
///
/// Returns `CliError::RootNotFound` if the path is not an existing directory.
pub fn resolve_root(root: Option<&Path>) -> Result<PathBuf> {
    let root = match root {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir()?,
    };

    if !root.is_dir() {
        return Err(CliError::RootNotFound(root));
    }

    let root = root.canonicalize()?;
    debug!(root = %root.display(), "resolved project root");
    Ok(root)
}

/// Load project settings and assemble the configuration for `mode`.
pub fn assemble_for(root: &Path, mode: Mode) -> Result<BuildConfiguration> {
    let settings = ProjectSettings::load(root)?;
    info!(%mode, root = %root.display(), "assembling build configuration");
    Ok(Assembler::from_settings(&settings).assemble(mode))
}
