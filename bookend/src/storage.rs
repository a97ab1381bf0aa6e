//! Template storage.
use std::{
    collections::HashMap,
    fs::File,
    io::{self, Cursor},
    path::{Component, Path, PathBuf},
};

use bytes::Bytes;

/// Named templates that can be checked and opened for reading.
pub trait Storage {
    type Reader: io::Read;

    /// Returns `true` if template `name` exists.
    fn exists(&self, name: &str) -> bool;

    /// Open template `name` for reading.
    fn open(&self, name: &str) -> io::Result<Self::Reader>;
}

impl<S> Storage for &S where S: Storage + ?Sized {
    type Reader = S::Reader;

    fn exists(&self, name: &str) -> bool {
        S::exists(self, name)
    }

    fn open(&self, name: &str) -> io::Result<Self::Reader> {
        S::open(self, name)
    }
}

/// Templates stored as files under a root directory.
///
/// Names are relative paths, a leading `/` is ignored. Names that would escape the root, e.g.
/// containing `..`, never exist.
#[derive(Debug, Clone)]
pub struct DirStorage {
    root: PathBuf,
}

impl DirStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path(&self, name: &str) -> Option<PathBuf> {
        let mut path = self.root.clone();
        let mut empty = true;

        for component in Path::new(name.trim_start_matches('/')).components() {
            match component {
                Component::Normal(part) => {
                    path.push(part);
                    empty = false;
                }
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
            }
        }

        (!empty).then_some(path)
    }
}

impl Storage for DirStorage {
    type Reader = File;

    fn exists(&self, name: &str) -> bool {
        self.path(name).is_some_and(|path| path.is_file())
    }

    fn open(&self, name: &str) -> io::Result<File> {
        match self.path(name) {
            Some(path) => File::open(path),
            None => Err(io::ErrorKind::NotFound.into()),
        }
    }
}

/// Templates held in memory, e.g. embedded with [`include_str!`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    templates: HashMap<String, Bytes>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert template, replacing the previous one with the same name.
    pub fn insert(&mut self, name: impl Into<String>, template: impl Into<Bytes>) -> &mut Self {
        self.templates.insert(name.into(), template.into());
        self
    }
}

impl Storage for MemoryStorage {
    type Reader = Cursor<Bytes>;

    fn exists(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    fn open(&self, name: &str) -> io::Result<Self::Reader> {
        match self.templates.get(name) {
            Some(template) => Ok(Cursor::new(template.clone())),
            None => Err(io::ErrorKind::NotFound.into()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn dir_paths() {
        let storage = DirStorage::new("/srv/templates");
        assert_eq!(storage.path("index.html"), Some(PathBuf::from("/srv/templates/index.html")));
        assert_eq!(storage.path("/a/./b.html"), Some(PathBuf::from("/srv/templates/a/b.html")));
        assert_eq!(storage.path("../secret"), None);
        assert_eq!(storage.path("a/../../secret"), None);
        assert_eq!(storage.path(""), None);
        assert_eq!(storage.path("/"), None);
    }

    #[test]
    fn memory() {
        let mut storage = MemoryStorage::new();
        storage.insert("a", "%A%");
        assert!(storage.exists("a"));
        assert!(!storage.exists("b"));
        assert_eq!(storage.open("b").unwrap_err().kind(), io::ErrorKind::NotFound);
    }
}
