//! Declaration loader.
//!
//! Reads record declarations from JSON files in a directory and maintains
//! an in-memory registry of built record types. Declarations can also be
//! registered programmatically; both paths go through the same builder,
//! so declaration-time errors are identical either way.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::decl::RecordDecl;
use super::errors::{DeclarationError, DeclarationResult};
use super::spec::RecordType;

/// Loads record declarations and registers the built types by name.
pub struct DeclLoader {
    /// Directory containing declaration files
    decl_dir: PathBuf,
    /// Built record types indexed by record name
    records: HashMap<String, Arc<RecordType>>,
}

impl DeclLoader {
    /// Creates a loader rooted at the given directory.
    pub fn new(decl_dir: &Path) -> Self {
        Self {
            decl_dir: decl_dir.to_path_buf(),
            records: HashMap::new(),
        }
    }

    /// Returns the declaration directory.
    pub fn decl_dir(&self) -> &Path {
        &self.decl_dir
    }

    /// Loads every `.json` declaration file in the directory.
    ///
    /// A missing directory is treated as empty. Files are loaded in sorted
    /// name order so duplicate-record errors are deterministic.
    pub fn load_all(&mut self) -> DeclarationResult<()> {
        if !self.decl_dir.exists() {
            return Ok(());
        }

        let entries = fs::read_dir(&self.decl_dir).map_err(|e| {
            DeclarationError::MalformedDeclaration {
                path: self.decl_dir.display().to_string(),
                reason: format!("failed to read declaration directory: {}", e),
            }
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| DeclarationError::MalformedDeclaration {
                path: self.decl_dir.display().to_string(),
                reason: format!("failed to read directory entry: {}", e),
            })?;
            let path = entry.path();
            if path.extension().map_or(true, |ext| ext != "json") {
                continue;
            }
            paths.push(path);
        }
        paths.sort();

        for path in paths {
            self.load_decl_file(&path)?;
        }

        Ok(())
    }

    /// Loads a single declaration file.
    fn load_decl_file(&mut self, path: &Path) -> DeclarationResult<()> {
        let content =
            fs::read_to_string(path).map_err(|e| DeclarationError::MalformedDeclaration {
                path: path.display().to_string(),
                reason: format!("failed to read file: {}", e),
            })?;

        let decl: RecordDecl =
            serde_json::from_str(&content).map_err(|e| DeclarationError::MalformedDeclaration {
                path: path.display().to_string(),
                reason: format!("invalid JSON: {}", e),
            })?;

        self.register(decl)
    }

    /// Registers a declaration directly.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateRecord` if a record with the same name is already
    /// registered, or any builder error from the declaration itself.
    pub fn register(&mut self, decl: RecordDecl) -> DeclarationResult<()> {
        if self.records.contains_key(&decl.record) {
            return Err(DeclarationError::DuplicateRecord(decl.record));
        }

        let record_type = decl.build()?;
        self.records
            .insert(decl.record, Arc::new(record_type));
        Ok(())
    }

    /// Gets a built record type by name.
    pub fn get(&self, record: &str) -> Option<Arc<RecordType>> {
        self.records.get(record).cloned()
    }

    /// Returns whether a record name is registered.
    pub fn contains(&self, record: &str) -> bool {
        self.records.contains_key(record)
    }

    /// Returns the number of registered record types.
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Returns the registered record names.
    pub fn record_names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(|k| k.as_str())
    }
}
