/*
 * ==========================================================================
 * LEXCHECK - Tokenizer & Grammar Checker
 * ==========================================================================
 *
 * File:      sources.rs
 * Purpose:   Reads source files for batch analysis.
 *
 * License:
 * This file is part of the LEXCHECK project.
 *
 * LEXCHECK is dual-licensed under the terms of:
 *   - The MIT License
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Error;

/// Extension of the files picked up from a directory.
pub const SOURCE_EXTENSION: &str = "js";

/// A named piece of source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Display name, usually the path the content was read from.
    pub name: String,
    pub content: String,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Reads a single file.
pub fn read_source(path: &Path) -> Result<SourceFile, Error> {
    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = content.len(), "read source");
    Ok(SourceFile::new(path.display().to_string(), content))
}

/// Reads every `.js` file directly inside `dir`, sorted by path.
///
/// Sub-directories are not descended into.
pub fn read_js_files(dir: &Path) -> Result<Vec<SourceFile>, Error> {
    let io_error = |source| Error::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == SOURCE_EXTENSION) {
            paths.push(path);
        }
    }
    paths.sort();

    debug!(dir = %dir.display(), files = paths.len(), "enumerated sources");
    paths.iter().map(|path| read_source(path)).collect()
}

/// Reads `path` as one file, or as a directory of `.js` files.
pub fn collect(path: &Path) -> Result<Vec<SourceFile>, Error> {
    if path.is_dir() {
        read_js_files(path)
    } else {
        read_source(path).map(|file| vec![file])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_js_files_filters_and_sorts() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.js"), "y = 2").unwrap();
        fs::write(dir.path().join("a.js"), "x = 1").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
        fs::create_dir(dir.path().join("nested.js")).unwrap();

        let files = read_js_files(dir.path()).unwrap();
        let contents: Vec<&str> = files.iter().map(|f| f.content.as_str()).collect();
        assert_eq!(contents, vec!["x = 1", "y = 2"]);
        assert!(files[0].name.ends_with("a.js"));
    }

    #[test]
    fn test_collect_single_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("loop.js");
        fs::write(&path, "while (x >= 1) { x = x - 1; }").unwrap();

        let files = collect(&path).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].content, "while (x >= 1) { x = x - 1; }");
    }

    #[test]
    fn test_missing_file_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.js");

        match collect(&path) {
            Err(Error::Io { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
