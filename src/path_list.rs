//! In-memory PATH list for one editing session
//!
//! Entries are kept verbatim: no trimming, case folding, trailing-slash or
//! `%VAR%` handling. The only rewrite is `/` to `\` on [`PathList::add`].

/// Separator between entries in the raw registry value
pub const SEPARATOR: char = ';';

/// Result of [`PathList::add`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    /// An entry with the exact same text already exists; nothing changed
    Duplicate,
    /// Empty input; nothing changed
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn offset(self) -> isize {
        match self {
            Direction::Up => -1,
            Direction::Down => 1,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathList {
    entries: Vec<String>,
}

impl PathList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_raw(raw: &str) -> Self {
        Self {
            entries: split_path(raw),
        }
    }

    pub fn from_entries(entries: Vec<String>) -> Self {
        Self { entries }
    }

    /// Replace the contents with the entries of `raw`, dropping empty segments.
    pub fn load(&mut self, raw: &str) {
        self.entries = split_path(raw);
    }

    /// Append `path` after converting `/` to `\`, unless an identical entry exists.
    ///
    /// Duplicate detection is exact string equality, so `C:\Tools` and
    /// `c:\tools\` are different entries.
    pub fn add(&mut self, path: &str) -> AddOutcome {
        if path.is_empty() {
            return AddOutcome::Empty;
        }
        let normalized = normalize_separators(path);
        if self.contains(&normalized) {
            return AddOutcome::Duplicate;
        }
        self.entries.push(normalized);
        AddOutcome::Added
    }

    /// Replace the entry at `index`. The value is not validated; an empty
    /// string is stored as-is. Returns `false` when `index` is out of range.
    pub fn edit(&mut self, index: usize, value: impl Into<String>) -> bool {
        match self.entries.get_mut(index) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    /// Swap the entry at `index` with its neighbour.
    ///
    /// Returns the entry's new index, or `None` when the move would leave the list.
    pub fn move_entry(&mut self, index: usize, direction: Direction) -> Option<usize> {
        let target = index.checked_add_signed(direction.offset())?;
        if index >= self.entries.len() || target >= self.entries.len() {
            return None;
        }
        self.entries.swap(index, target);
        Some(target)
    }

    pub fn serialize(&self) -> String {
        join_path(&self.entries)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.iter().any(|entry| entry == path)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<String> {
        self.entries
    }
}

fn split_path(raw: &str) -> Vec<String> {
    raw.split(SEPARATOR)
        .filter(|p| !p.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

fn join_path(parts: &[String]) -> String {
    parts.join(";")
}

/// Convert forward slashes (as returned by folder pickers) to backslashes.
pub fn normalize_separators(path: &str) -> String {
    path.replace('/', "\\")
}
