use std::path::PathBuf;
use subway::repository::Repository;
use tokio::sync::RwLock;

pub struct AppState {
    /// Where `POST /snapshot` writes the repository, if configured.
    pub snapshot_path: Option<PathBuf>,
    /// Section edits take the write guard for the whole load, edit, store cycle.
    pub repository: RwLock<Repository>,
}

impl AppState {
    pub fn new(repository: Repository, snapshot_path: Option<PathBuf>) -> Self {
        Self {
            snapshot_path,
            repository: RwLock::new(repository),
        }
    }
}
