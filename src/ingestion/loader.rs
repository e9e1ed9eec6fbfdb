use super::decoder::{decode_file, is_supported};
use crate::corpus::store::Corpus;
use std::path::Path;

/// Loads every supported file in `folder` into the corpus and returns how
/// many were added.
///
/// A missing folder is created so the operator has an obvious place to drop
/// documents. Unreadable, unsupported, or empty files are logged and
/// skipped; loading never fails the startup.
pub fn load_folder(corpus: &mut Corpus, folder: &Path) -> usize {
    if !folder.exists() {
        if let Err(err) = std::fs::create_dir_all(folder) {
            tracing::error!("Failed to create documents folder {}: {}", folder.display(), err);
            return 0;
        }
        tracing::info!("Created documents folder: {}", folder.display());
        return 0;
    }

    let entries = match std::fs::read_dir(folder) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::error!("Failed to read documents folder {}: {}", folder.display(), err);
            return 0;
        }
    };

    let mut loaded = 0;
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        if !is_supported(&path) {
            tracing::debug!("Skipping unsupported file: {}", path.display());
            continue;
        }

        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name.to_string(),
            None => continue,
        };

        match decode_file(&path) {
            Ok(content) => match corpus.add(&name, &content) {
                Ok(()) => {
                    tracing::info!("Loaded: {}", name);
                    loaded += 1;
                }
                Err(err) => {
                    tracing::warn!("Skipping {}: {}", name, err);
                }
            },
            Err(err) => {
                tracing::warn!("Failed to decode {}: {}", name, err);
            }
        }
    }

    tracing::info!("Total documents loaded: {}", loaded);
    loaded
}
