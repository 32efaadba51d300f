//! Primary language detection by file-extension majority.

use std::collections::HashMap;
use std::path::Path;

use super::tree::ProjectTree;

/// Lowercased extension (no dot) to display name.
const EXTENSION_LANGUAGES: &[(&str, &str)] = &[
    ("py", "Python"),
    ("js", "JavaScript"),
    ("ts", "TypeScript"),
    ("rs", "Rust"),
    ("go", "Go"),
    ("java", "Java"),
    ("rb", "Ruby"),
    ("php", "PHP"),
    ("cpp", "C++"),
    ("c", "C"),
    ("cs", "C#"),
    ("swift", "Swift"),
    ("kt", "Kotlin"),
    ("scala", "Scala"),
    ("r", "R"),
];

/// Extension counts in first-encountered order.
#[derive(Debug, Default)]
pub struct ExtensionTally {
    counts: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl ExtensionTally {
    pub fn from_paths<'p>(paths: impl IntoIterator<Item = &'p Path>) -> Self {
        let mut tally = Self::default();
        for path in paths {
            if let Some(ext) = path.extension() {
                let ext = ext.to_string_lossy().to_lowercase();
                if !ext.is_empty() {
                    tally.add(ext);
                }
            }
        }
        tally
    }

    fn add(&mut self, ext: String) {
        match self.index.get(&ext) {
            Some(&i) => self.counts[i].1 += 1,
            None => {
                self.index.insert(ext.clone(), self.counts.len());
                self.counts.push((ext, 1));
            }
        }
    }

    #[cfg(test)]
    fn count(&self, ext: &str) -> usize {
        self.index.get(ext).map_or(0, |&i| self.counts[i].1)
    }

    /// Most frequent extension. Ties go to the one seen first.
    pub fn dominant(&self) -> Option<&str> {
        let mut best: Option<&(String, usize)> = None;
        for entry in &self.counts {
            if best.map_or(true, |b| entry.1 > b.1) {
                best = Some(entry);
            }
        }
        best.map(|(ext, _)| ext.as_str())
    }
}

/// Display name for an extension; unknown ones are shown uppercased.
pub fn language_for_extension(ext: &str) -> String {
    EXTENSION_LANGUAGES
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| ext.to_uppercase())
}

/// Language of the most common extension among non-hidden files.
pub fn detect_language(tree: &ProjectTree) -> Option<String> {
    let tally = ExtensionTally::from_paths(tree.visible_files());
    tally.dominant().map(language_for_extension)
}
