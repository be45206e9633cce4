//! In-memory content source for unit tests.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::strategy::{DirEntry, DocsFs, EntryKind};

#[derive(Debug, Clone)]
enum Node {
    Dir,
    File(Vec<u8>),
    Unreadable,
    Link,
}

/// A tree of files held in a map. Parent directories are created implicitly.
#[derive(Debug, Default)]
pub struct MemoryFs {
    nodes: BTreeMap<PathBuf, Node>,
    unlistable: Vec<PathBuf>,
}

impl MemoryFs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn add_parents(&mut self, path: &Path) {
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            self.nodes.insert(ancestor.to_path_buf(), Node::Dir);
        }
    }

    #[must_use]
    pub fn dir(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        self.add_parents(path);
        self.nodes.insert(path.to_path_buf(), Node::Dir);
        self
    }

    #[must_use]
    pub fn file(mut self, path: impl AsRef<Path>, content: impl AsRef<[u8]>) -> Self {
        let path = path.as_ref();
        self.add_parents(path);
        self.nodes
            .insert(path.to_path_buf(), Node::File(content.as_ref().to_vec()));
        self
    }

    #[must_use]
    pub fn unreadable(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        self.add_parents(path);
        self.nodes.insert(path.to_path_buf(), Node::Unreadable);
        self
    }

    #[must_use]
    pub fn link(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        self.add_parents(path);
        self.nodes.insert(path.to_path_buf(), Node::Link);
        self
    }

    #[must_use]
    pub fn unlistable(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        self.add_parents(path);
        self.nodes.insert(path.to_path_buf(), Node::Dir);
        self.unlistable.push(path.to_path_buf());
        self
    }
}

impl DocsFs for MemoryFs {
    fn list_dir(&self, dir: &Path) -> io::Result<Vec<DirEntry>> {
        if self.unlistable.iter().any(|p| p == dir) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        }
        match self.nodes.get(dir) {
            Some(Node::Dir) => {}
            Some(_) => return Err(io::Error::other("not a directory")),
            None => return Err(io::Error::from(io::ErrorKind::NotFound)),
        }
        Ok(self
            .nodes
            .iter()
            .filter(|(path, _)| path.parent() == Some(dir))
            .map(|(path, node)| DirEntry {
                path: path.clone(),
                kind: match node {
                    Node::Dir => EntryKind::Dir,
                    Node::File(_) | Node::Unreadable => EntryKind::File,
                    Node::Link => EntryKind::Other,
                },
            })
            .collect())
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        match self.nodes.get(path) {
            Some(Node::File(bytes)) => Ok(bytes.clone()),
            Some(Node::Unreadable) => {
                Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
            }
            Some(_) => Err(io::Error::other("not a file")),
            None => Err(io::Error::from(io::ErrorKind::NotFound)),
        }
    }
}
