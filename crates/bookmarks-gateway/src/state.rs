use std::sync::Arc;

use bookmarks_core::BookmarkSaver;

#[derive(Clone)]
pub struct AppState {
    saver: Arc<dyn BookmarkSaver>,
}

impl AppState {
    pub fn new(saver: Arc<dyn BookmarkSaver>) -> Self {
        Self { saver }
    }

    pub fn saver(&self) -> &dyn BookmarkSaver {
        self.saver.as_ref()
    }
}
