// Author: Dustin Pilgrim
// License: MIT

use std::fmt::Display;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::PackError;

fn archive_error<E: Display>(path: &Path, code: u32) -> impl FnOnce(E) -> PackError {
    move |e| PackError::ArchiveError {
        message: e.to_string(),
        path: path.to_string_lossy().to_string(),
        hint: None,
        code: Some(code),
    }
}

/// Recursively walk a directory, returning every file and directory path sorted.
fn walk_recursive(dir: &Path) -> Result<Vec<PathBuf>, PackError> {
    let mut results = Vec::new();
    walk_recursive_inner(dir, &mut results)?;
    results.sort();
    Ok(results)
}

fn walk_recursive_inner(dir: &Path, acc: &mut Vec<PathBuf>) -> Result<(), PackError> {
    let entries = fs::read_dir(dir).map_err(archive_error(dir, 330))?;
    for entry in entries {
        let path = entry.map_err(archive_error(dir, 330))?.path();
        if path.is_dir() {
            acc.push(path.clone());
            walk_recursive_inner(&path, acc)?;
        } else {
            acc.push(path);
        }
    }
    Ok(())
}

/// `/`-separated archive name for a path relative to the source root.
fn entry_name(relative: &Path) -> Result<String, PackError> {
    let parts: Option<Vec<&str>> = relative
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect();
    parts.map(|p| p.join("/")).ok_or_else(|| PackError::ArchiveError {
        message: "File name is not valid UTF-8".into(),
        path: relative.to_string_lossy().to_string(),
        hint: Some("Rename the file before packing".into()),
        code: Some(331),
    })
}

/// Pack the full contents of `source_dir` into a zip file at `archive_path`.
///
/// Directories are stored as their own entries so empty ones survive a
/// round trip. Permissions and timestamps are not preserved.
pub fn compress<P: AsRef<Path>, Q: AsRef<Path>>(source_dir: P, archive_path: Q) -> Result<(), PackError> {
    let source_dir = source_dir.as_ref();
    let archive_path = archive_path.as_ref();

    if !source_dir.is_dir() {
        return Err(PackError::ArchiveError {
            message: "Source is not a directory".into(),
            path: source_dir.to_string_lossy().to_string(),
            hint: Some("Pass the pack directory, not a file inside it".into()),
            code: Some(330),
        });
    }

    let paths = walk_recursive(source_dir)?;
    let file = File::create(archive_path).map_err(archive_error(archive_path, 332))?;
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for path in paths {
        if path == archive_path {
            continue;
        }
        let relative = path.strip_prefix(source_dir).map_err(archive_error(&path, 331))?;
        let name = entry_name(relative)?;

        if path.is_dir() {
            writer
                .add_directory(format!("{}/", name), options)
                .map_err(archive_error(archive_path, 333))?;
        } else {
            writer.start_file(name, options).map_err(archive_error(archive_path, 333))?;
            let mut input = File::open(&path).map_err(archive_error(&path, 332))?;
            io::copy(&mut input, &mut writer).map_err(archive_error(&path, 333))?;
        }
    }

    writer.finish().map_err(archive_error(archive_path, 333))?;
    tracing::info!(source = %source_dir.display(), archive = %archive_path.display(), "packed directory");
    Ok(())
}

/// Extract an archive produced by [`compress`] into `dest_dir`, recreating
/// the directory structure. Existing files are overwritten.
///
/// Entries whose names would land outside `dest_dir` are rejected.
pub fn decompress<P: AsRef<Path>, Q: AsRef<Path>>(archive_path: P, dest_dir: Q) -> Result<(), PackError> {
    let archive_path = archive_path.as_ref();
    let dest_dir = dest_dir.as_ref();

    let file = File::open(archive_path).map_err(archive_error(archive_path, 332))?;
    let mut archive = ZipArchive::new(file).map_err(archive_error(archive_path, 334))?;
    fs::create_dir_all(dest_dir).map_err(archive_error(dest_dir, 332))?;

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).map_err(archive_error(archive_path, 334))?;
        let Some(relative) = entry.enclosed_name() else {
            return Err(PackError::ArchiveError {
                message: format!("Entry '{}' points outside the destination", entry.name()),
                path: archive_path.to_string_lossy().to_string(),
                hint: Some("The archive was not produced by this crate".into()),
                code: Some(335),
            });
        };
        let target = dest_dir.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&target).map_err(archive_error(&target, 332))?;
            continue;
        }
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(archive_error(parent, 332))?;
        }
        let mut output = File::create(&target).map_err(archive_error(&target, 332))?;
        io::copy(&mut entry, &mut output).map_err(archive_error(&target, 334))?;
    }

    tracing::info!(archive = %archive_path.display(), dest = %dest_dir.display(), "unpacked archive");
    Ok(())
}
