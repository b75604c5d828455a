use std::path::{Path, PathBuf};

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "webp", "svg"];
const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "flac", "ogg", "m4a"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mkv", "avi", "mov", "webm"];
const ARCHIVE_EXTENSIONS: &[&str] = &["zip", "tar", "gz", "7z", "rar"];

/// One file entry shown as a checklist row.
#[derive(Debug, Clone)]
pub struct Item {
    pub path: PathBuf,
    pub display_name: String,
    pub selected: bool,
    pub icon: &'static str,
}

impl Item {
    pub fn from_path(path: &Path) -> Self {
        let display_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        Item {
            path: path.to_path_buf(),
            display_name,
            selected: false,
            icon: icon_for(path),
        }
    }
}

/// Advisory file-type glyph derived from the extension.
fn icon_for(path: &Path) -> &'static str {
    let Some(ext) = path.extension().map(|e| e.to_string_lossy().to_lowercase()) else {
        return "📄";
    };
    let ext = ext.as_str();
    if IMAGE_EXTENSIONS.contains(&ext) {
        "🖼"
    } else if AUDIO_EXTENSIONS.contains(&ext) {
        "🎵"
    } else if VIDEO_EXTENSIONS.contains(&ext) {
        "🎞"
    } else if ARCHIVE_EXTENSIONS.contains(&ext) {
        "📦"
    } else {
        "📄"
    }
}

/// In-memory ordered collection of checklist items.
///
/// Items keep insertion order; there is no deduplication and no identity
/// beyond position in the sequence.
#[derive(Debug, Clone, Default)]
pub struct ChecklistStore {
    items: Vec<Item>,
}

impl ChecklistStore {
    pub fn append(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Removes every item matching the predicate, preserving the relative
    /// order of survivors. Returns the number of items removed.
    pub fn remove_where<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&Item) -> bool,
    {
        let before = self.items.len();
        self.items.retain(|item| !predicate(item));
        before - self.items.len()
    }

    /// Removes the single item at `index`, regardless of its checkbox state.
    pub fn remove_at(&mut self, index: usize) -> Option<Item> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    pub fn remove_selected(&mut self) -> usize {
        self.remove_where(|item| item.selected)
    }

    pub fn toggle(&mut self, index: usize) {
        if let Some(item) = self.items.get_mut(index) {
            item.selected = !item.selected;
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }
}
