//! Home directory resolution

use std::path::PathBuf;

/// Source of the current user's home directory.
///
/// Injected into the locator so tests can point it at a temporary tree.
pub trait HomeProvider {
    fn home_dir(&self) -> Option<PathBuf>;
}

/// Resolves the real home directory of the running user.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHome;

impl HomeProvider for SystemHome {
    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }
}

/// A fixed directory standing in for the home directory.
#[derive(Debug, Clone)]
pub struct FixedHome(pub PathBuf);

impl FixedHome {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }
}

impl HomeProvider for FixedHome {
    fn home_dir(&self) -> Option<PathBuf> {
        Some(self.0.clone())
    }
}

impl<T: HomeProvider + ?Sized> HomeProvider for &T {
    fn home_dir(&self) -> Option<PathBuf> {
        (**self).home_dir()
    }
}

impl<T: HomeProvider + ?Sized> HomeProvider for Box<T> {
    fn home_dir(&self) -> Option<PathBuf> {
        (**self).home_dir()
    }
}
