use crate::error::ProvisioningError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

/// Copies template-scoped files into a new flow's namespace.
///
/// The storage medium is up to the implementation. Failures are returned to
/// the caller unchanged; retry policy belongs there, not here.
pub trait AssetProvisioner {
    /// Makes the assets of `source` available to `target`.
    fn provision(&self, source: Uuid, target: Uuid) -> Result<(), ProvisioningError>;

    /// Removes whatever `provision` created for `target`. Called when the
    /// new flow could not be persisted.
    fn revoke(&self, _target: Uuid) -> Result<(), ProvisioningError> {
        Ok(())
    }
}

impl<F> AssetProvisioner for F
where
    F: Fn(Uuid, Uuid) -> Result<(), ProvisioningError>,
{
    fn provision(&self, source: Uuid, target: Uuid) -> Result<(), ProvisioningError> {
        self(source, target)
    }
}

/// A provisioner for flows without backing assets.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullProvisioner;

impl AssetProvisioner for NullProvisioner {
    fn provision(&self, _source: Uuid, _target: Uuid) -> Result<(), ProvisioningError> {
        Ok(())
    }
}

/// Keeps each flow's assets in `<root>/<flow id>/` and copies the template's
/// directory tree on provisioning.
#[derive(Debug, Clone)]
pub struct DirectoryProvisioner {
    root: PathBuf,
}

impl DirectoryProvisioner {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The asset directory of `flow_id`.
    pub fn flow_dir(&self, flow_id: Uuid) -> PathBuf {
        self.root.join(flow_id.to_string())
    }
}

impl AssetProvisioner for DirectoryProvisioner {
    fn provision(&self, source: Uuid, target: Uuid) -> Result<(), ProvisioningError> {
        let source_dir = self.flow_dir(source);
        if !source_dir.is_dir() {
            return Err(ProvisioningError::SourceMissing(source_dir));
        }
        let target_dir = self.flow_dir(target);
        let copied = match copy_tree(&source_dir, &target_dir) {
            Ok(copied) => copied,
            Err(e) => {
                // partial copies are never left behind
                if target_dir.exists() {
                    let _ = fs::remove_dir_all(&target_dir);
                }
                return Err(e);
            }
        };
        debug!(%source, %target, copied, "provisioned template assets");
        Ok(())
    }

    fn revoke(&self, target: Uuid) -> Result<(), ProvisioningError> {
        let target_dir = self.flow_dir(target);
        if target_dir.exists() {
            fs::remove_dir_all(&target_dir).map_err(|e| io_error(&target_dir, e))?;
        }
        Ok(())
    }
}

/// Recursively copies `from` into `to`, returning the number of files copied.
fn copy_tree(from: &Path, to: &Path) -> Result<usize, ProvisioningError> {
    fs::create_dir_all(to).map_err(|e| io_error(to, e))?;
    let mut copied = 0;
    for entry in fs::read_dir(from).map_err(|e| io_error(from, e))? {
        let entry = entry.map_err(|e| io_error(from, e))?;
        let path = entry.path();
        let destination = to.join(entry.file_name());
        if path.is_dir() {
            copied += copy_tree(&path, &destination)?;
        } else {
            fs::copy(&path, &destination).map_err(|e| io_error(&path, e))?;
            copied += 1;
        }
    }
    Ok(copied)
}

fn io_error(path: &Path, source: std::io::Error) -> ProvisioningError {
    ProvisioningError::Io {
        path: path.to_path_buf(),
        source,
    }
}
