//! Logical-name indexes over container batches.
//!
//! Two maps are maintained: bundle name → locations inside `.blk` files
//! (relative path + sub-container offset) and identifier → loose `CAB-`
//! file paths. Both carry the dependency names each bundle declares, which
//! is what the resolver walks. Indexes are built in full, persisted to a
//! little-endian length-prefixed binary layout, and reloaded on later runs
//! without re-scanning the source files.
//!
//! The index is a plain owned value; nothing here is process-global. Builds
//! process files strictly in input order, report `(current, total)` progress
//! after each file, and never abort the batch on a per-file failure.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use byteorder::{LittleEndian, WriteBytesExt};
use log::{info, warn};
use nom::{
    bytes::complete::take,
    multi::count,
    number::complete::{le_u32, le_u64},
    IResult,
};

use crate::blk::load_blk_file;
use crate::error::Error;
use crate::stream_file::StreamFile;

/// Default persistence file names.
pub const BLK_INDEX_FILE: &str = "BLKMap.bin";
pub const CAB_INDEX_FILE: &str = "CABMap.bin";

/// Where a bundle name lives inside the `.blk` batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlkEntry {
    /// `(relative container path, sub-container offset)`, in discovery order.
    pub locations: Vec<(String, u64)>,
    pub dependencies: Vec<String>,
}

/// Where an identifier lives among the loose `CAB-` files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CabEntry {
    pub locations: Vec<String>,
    pub dependencies: Vec<String>,
}

/// An asset-bundle manifest as reported by the serialized-file layer.
#[derive(Debug, Clone)]
pub struct AssetManifest {
    pub name: String,
    pub dependencies: Vec<String>,
}

/// Seam to the serialized-file layer, which is not this crate's business:
/// given a decoded entry, report the asset-bundle manifests inside it, or
/// an empty list if the entry is not a serialized asset file.
pub trait ManifestReader {
    fn read_manifests(&self, file: &mut StreamFile) -> Result<Vec<AssetManifest>>;
}

/// Counts reported at the end of every batch build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub files: usize,
    pub entries: usize,
    /// Bundle names seen again after their first registration.
    pub collisions: usize,
    /// Directory-entry paths seen again (blk builds only).
    pub entry_collisions: usize,
    /// Files that failed to decode and were skipped.
    pub failures: usize,
}

/// The caller-owned index. Build once, persist, reload, resolve against.
#[derive(Debug, Default)]
pub struct AssetIndex {
    pub blk_base_path: String,
    pub cab_base_path: String,
    pub blk: BTreeMap<String, BlkEntry>,
    pub cab: BTreeMap<String, CabEntry>,
    /// Directory-entry path → `(relative container path, offset)`, so loose
    /// external references can be found inside `.blk` files.
    pub blk_entries: BTreeMap<String, (String, u64)>,
}

impl AssetIndex {
    pub fn new() -> AssetIndex {
        AssetIndex::default()
    }

    /// Decode every `.blk` file and register the manifests found inside.
    ///
    /// Locations are stored relative to `base_path`. Names already present
    /// count as collisions and keep their first-seen entry. A file that
    /// fails to decode is logged and skipped; the batch always finishes.
    pub fn build_blk(
        &mut self,
        base_path: &Path,
        files: &[PathBuf],
        manifests: &dyn ManifestReader,
        mut progress: impl FnMut(usize, usize),
    ) -> BuildSummary {
        info!("building blk index over {} files", files.len());
        self.blk.clear();
        self.blk_entries.clear();
        self.blk_base_path = if files.is_empty() {
            String::new()
        } else {
            base_path.to_string_lossy().into_owned()
        };

        let mut summary = BuildSummary {
            files: files.len(),
            ..BuildSummary::default()
        };
        for (i, file) in files.iter().enumerate() {
            if let Err(e) = self.scan_blk_file(base_path, file, manifests, &mut summary) {
                summary.failures += 1;
                warn!("skipping {}: {e:#}", file.display());
            }
            progress(i + 1, files.len());
        }
        info!(
            "blk index built: {} entries, {} collisions, {} failures",
            summary.entries, summary.collisions, summary.failures
        );
        summary
    }

    fn scan_blk_file(
        &mut self,
        base_path: &Path,
        file: &Path,
        manifests: &dyn ManifestReader,
        summary: &mut BuildSummary,
    ) -> Result<()> {
        let blk = load_blk_file(file)?;
        let rel = relative_path(base_path, file);
        for mhy0 in blk.files {
            for mut entry in mhy0.entries {
                if self.blk_entries.contains_key(&entry.path) {
                    summary.entry_collisions += 1;
                } else {
                    self.blk_entries
                        .insert(entry.path.clone(), (rel.clone(), mhy0.start_offset));
                }

                let found = manifests
                    .read_manifests(&mut entry)
                    .with_context(|| format!("reading manifests in {:?}", entry.path))?;
                for manifest in found {
                    if self.blk.contains_key(&manifest.name) {
                        summary.collisions += 1;
                        continue;
                    }
                    summary.entries += 1;
                    self.blk.insert(
                        manifest.name,
                        BlkEntry {
                            locations: vec![(rel.clone(), mhy0.start_offset)],
                            dependencies: manifest.dependencies,
                        },
                    );
                }
            }
        }
        Ok(())
    }

    /// Register the manifests of loose, already-decrypted `CAB-` files.
    pub fn build_cab(
        &mut self,
        base_path: &Path,
        files: &[PathBuf],
        manifests: &dyn ManifestReader,
        mut progress: impl FnMut(usize, usize),
    ) -> BuildSummary {
        info!("building cab index over {} files", files.len());
        self.cab.clear();
        self.cab_base_path = if files.is_empty() {
            String::new()
        } else {
            base_path.to_string_lossy().into_owned()
        };

        let mut summary = BuildSummary {
            files: files.len(),
            ..BuildSummary::default()
        };
        for (i, file) in files.iter().enumerate() {
            if let Err(e) = self.scan_cab_file(base_path, file, manifests, &mut summary) {
                summary.failures += 1;
                warn!("skipping {}: {e:#}", file.display());
            }
            progress(i + 1, files.len());
        }
        info!(
            "cab index built: {} entries, {} collisions, {} failures",
            summary.entries, summary.collisions, summary.failures
        );
        summary
    }

    fn scan_cab_file(
        &mut self,
        base_path: &Path,
        file: &Path,
        manifests: &dyn ManifestReader,
        summary: &mut BuildSummary,
    ) -> Result<()> {
        let mut stream = StreamFile::open(file).context("Failed to open cab file")?;
        let rel = relative_path(base_path, file);
        for manifest in manifests.read_manifests(&mut stream)? {
            if self.cab.contains_key(&manifest.name) {
                summary.collisions += 1;
                continue;
            }
            summary.entries += 1;
            self.cab.insert(
                manifest.name,
                CabEntry {
                    locations: vec![rel.clone()],
                    dependencies: manifest.dependencies,
                },
            );
        }
        Ok(())
    }

    // ── Persistence ──────────────────────────────────────────────────────

    pub fn save_blk(&self, path: &Path) -> Result<()> {
        let mut w = BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create {path:?}"))?,
        );
        write_string(&mut w, &self.blk_base_path)?;
        w.write_u32::<LittleEndian>(self.blk.len() as u32)?;
        for (name, entry) in &self.blk {
            write_string(&mut w, name)?;
            w.write_u32::<LittleEndian>(entry.dependencies.len() as u32)?;
            for dep in &entry.dependencies {
                write_string(&mut w, dep)?;
            }
            w.write_u32::<LittleEndian>(entry.locations.len() as u32)?;
            for (location, offset) in &entry.locations {
                write_string(&mut w, location)?;
                w.write_u64::<LittleEndian>(*offset)?;
            }
        }
        w.write_u32::<LittleEndian>(self.blk_entries.len() as u32)?;
        for (entry_path, (location, offset)) in &self.blk_entries {
            write_string(&mut w, entry_path)?;
            write_string(&mut w, location)?;
            w.write_u64::<LittleEndian>(*offset)?;
        }
        w.flush()?;
        info!("saved blk index ({} entries) to {}", self.blk.len(), path.display());
        Ok(())
    }

    pub fn save_cab(&self, path: &Path) -> Result<()> {
        let mut w = BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create {path:?}"))?,
        );
        write_string(&mut w, &self.cab_base_path)?;
        w.write_u32::<LittleEndian>(self.cab.len() as u32)?;
        for (name, entry) in &self.cab {
            write_string(&mut w, name)?;
            w.write_u32::<LittleEndian>(entry.dependencies.len() as u32)?;
            for dep in &entry.dependencies {
                write_string(&mut w, dep)?;
            }
            w.write_u32::<LittleEndian>(entry.locations.len() as u32)?;
            for location in &entry.locations {
                write_string(&mut w, location)?;
            }
        }
        w.flush()?;
        info!("saved cab index ({} entries) to {}", self.cab.len(), path.display());
        Ok(())
    }

    /// Reload the blk maps from disk, fully replacing in-memory state.
    ///
    /// Returns `false` and leaves the maps empty when the file is missing or
    /// unreadable; callers treat that as "rebuild required", not an error.
    pub fn load_blk(&mut self, path: &Path) -> bool {
        match self.try_load_blk(path) {
            Ok(()) => true,
            Err(e) => {
                warn!("{e}; rebuild required");
                false
            }
        }
    }

    /// Like [`AssetIndex::load_blk`], but surfaces the failure.
    pub fn try_load_blk(&mut self, path: &Path) -> crate::error::Result<()> {
        self.blk.clear();
        self.blk_entries.clear();
        self.blk_base_path.clear();

        let unavailable = || Error::IndexUnavailable {
            path: path.to_path_buf(),
        };
        let content = fs::read(path).map_err(|_| unavailable())?;
        let (_, (base_path, entries, entry_map)) =
            parse_blk_index(&content).map_err(|_| unavailable())?;
        self.blk_base_path = base_path;
        self.blk = entries.into_iter().collect();
        self.blk_entries = entry_map.into_iter().collect();
        info!("loaded blk index ({} entries)", self.blk.len());
        Ok(())
    }

    /// Reload the cab map from disk; same contract as [`AssetIndex::load_blk`].
    pub fn load_cab(&mut self, path: &Path) -> bool {
        match self.try_load_cab(path) {
            Ok(()) => true,
            Err(e) => {
                warn!("{e}; rebuild required");
                false
            }
        }
    }

    /// Like [`AssetIndex::load_cab`], but surfaces the failure.
    pub fn try_load_cab(&mut self, path: &Path) -> crate::error::Result<()> {
        self.cab.clear();
        self.cab_base_path.clear();

        let unavailable = || Error::IndexUnavailable {
            path: path.to_path_buf(),
        };
        let content = fs::read(path).map_err(|_| unavailable())?;
        let (_, (base_path, entries)) = parse_cab_index(&content).map_err(|_| unavailable())?;
        self.cab_base_path = base_path;
        self.cab = entries.into_iter().collect();
        info!("loaded cab index ({} entries)", self.cab.len());
        Ok(())
    }
}

/// Collect every `.blk` file under `base`, sorted for a deterministic batch.
pub fn find_blk_files(base: &Path) -> Result<Vec<PathBuf>> {
    let pattern = base.join("**").join("*.blk");
    let mut files: Vec<PathBuf> = glob::glob(&pattern.to_string_lossy())
        .context("Invalid base path pattern")?
        .filter_map(|entry| entry.ok())
        .collect();
    files.sort();
    Ok(files)
}

pub(crate) fn relative_path(base: &Path, file: &Path) -> String {
    file.strip_prefix(base)
        .unwrap_or(file)
        .to_string_lossy()
        .into_owned()
}

fn write_string<W: Write>(w: &mut W, s: &str) -> io::Result<()> {
    w.write_u32::<LittleEndian>(s.len() as u32)?;
    w.write_all(s.as_bytes())
}

// Parser for a length-prefixed UTF-8 string
fn parse_string(input: &[u8]) -> IResult<&[u8], String> {
    let (input, len) = le_u32(input)?;
    let (input, raw) = take(len)(input)?;
    Ok((input, String::from_utf8_lossy(raw).to_string()))
}

// Parser for a count-prefixed list of strings
fn parse_strings(input: &[u8]) -> IResult<&[u8], Vec<String>> {
    let (input, n) = le_u32(input)?;
    count(parse_string, n as usize)(input)
}

// Parser for one (path, offset) location
fn parse_blk_location(input: &[u8]) -> IResult<&[u8], (String, u64)> {
    let (input, location) = parse_string(input)?;
    let (input, offset) = le_u64(input)?;
    Ok((input, (location, offset)))
}

// Parser for one named blk entry
fn parse_blk_entry(input: &[u8]) -> IResult<&[u8], (String, BlkEntry)> {
    let (input, name) = parse_string(input)?;
    let (input, dependencies) = parse_strings(input)?;
    let (input, n) = le_u32(input)?;
    let (input, locations) = count(parse_blk_location, n as usize)(input)?;
    Ok((
        input,
        (
            name,
            BlkEntry {
                locations,
                dependencies,
            },
        ),
    ))
}

// Parser for one entry-path record
fn parse_entry_record(input: &[u8]) -> IResult<&[u8], (String, (String, u64))> {
    let (input, entry_path) = parse_string(input)?;
    let (input, location) = parse_blk_location(input)?;
    Ok((input, (entry_path, location)))
}

type ParsedBlkIndex = (String, Vec<(String, BlkEntry)>, Vec<(String, (String, u64))>);

// Parser for the whole persisted blk index
fn parse_blk_index(input: &[u8]) -> IResult<&[u8], ParsedBlkIndex> {
    let (input, base_path) = parse_string(input)?;
    let (input, n) = le_u32(input)?;
    let (input, entries) = count(parse_blk_entry, n as usize)(input)?;
    let (input, n) = le_u32(input)?;
    let (input, entry_map) = count(parse_entry_record, n as usize)(input)?;
    Ok((input, (base_path, entries, entry_map)))
}

// Parser for one named cab entry
fn parse_cab_entry(input: &[u8]) -> IResult<&[u8], (String, CabEntry)> {
    let (input, name) = parse_string(input)?;
    let (input, dependencies) = parse_strings(input)?;
    let (input, locations) = parse_strings(input)?;
    Ok((
        input,
        (
            name,
            CabEntry {
                locations,
                dependencies,
            },
        ),
    ))
}

// Parser for the whole persisted cab index
fn parse_cab_index(input: &[u8]) -> IResult<&[u8], (String, Vec<(String, CabEntry)>)> {
    let (input, base_path) = parse_string(input)?;
    let (input, n) = le_u32(input)?;
    let (input, entries) = count(parse_cab_entry, n as usize)(input)?;
    Ok((input, (base_path, entries)))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Toy manifest format for the tests: first line is the bundle name,
    /// each further line one dependency. Empty content means "not a
    /// serialized file".
    pub(crate) struct TextManifests;

    impl ManifestReader for TextManifests {
        fn read_manifests(&self, file: &mut StreamFile) -> Result<Vec<AssetManifest>> {
            let bytes = file.bytes()?;
            let text = std::str::from_utf8(&bytes)?;
            let mut lines = text.lines();
            match lines.next() {
                Some(name) if !name.is_empty() => Ok(vec![AssetManifest {
                    name: name.to_owned(),
                    dependencies: lines.map(str::to_owned).collect(),
                }]),
                _ => Ok(Vec::new()),
            }
        }
    }

    fn sample_index() -> AssetIndex {
        let mut index = AssetIndex::new();
        index.blk_base_path = "/data/blocks".to_owned();
        index.cab_base_path = "/data/cabs".to_owned();
        index.blk.insert(
            "bundle_a".to_owned(),
            BlkEntry {
                locations: vec![("100.blk".to_owned(), 0x40), ("900.blk".to_owned(), 0x80)],
                dependencies: vec!["bundle_b".to_owned(), "bundle_c".to_owned()],
            },
        );
        index.blk.insert(
            "bundle_b".to_owned(),
            BlkEntry {
                locations: vec![("150.blk".to_owned(), 0)],
                dependencies: Vec::new(),
            },
        );
        index
            .blk_entries
            .insert("CAB-feed".to_owned(), ("100.blk".to_owned(), 0x40));
        index.cab.insert(
            "bundle_a".to_owned(),
            CabEntry {
                locations: vec!["10/CAB-aa".to_owned(), "20/CAB-aa".to_owned()],
                dependencies: vec!["bundle_b".to_owned()],
            },
        );
        index
    }

    #[test]
    fn blk_index_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(BLK_INDEX_FILE);

        let index = sample_index();
        index.save_blk(&path).unwrap();

        let mut loaded = AssetIndex::new();
        assert!(loaded.load_blk(&path));
        assert_eq!(loaded.blk_base_path, index.blk_base_path);
        assert_eq!(loaded.blk, index.blk);
        assert_eq!(loaded.blk_entries, index.blk_entries);
    }

    #[test]
    fn cab_index_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CAB_INDEX_FILE);

        let index = sample_index();
        index.save_cab(&path).unwrap();

        let mut loaded = AssetIndex::new();
        assert!(loaded.load_cab(&path));
        assert_eq!(loaded.cab_base_path, index.cab_base_path);
        assert_eq!(loaded.cab, index.cab);
    }

    #[test]
    fn missing_index_leaves_maps_empty() {
        let mut index = sample_index();
        assert!(!index.load_blk(Path::new("/definitely/not/here.bin")));
        assert!(index.blk.is_empty());
        assert!(index.blk_entries.is_empty());
        assert!(index.blk_base_path.is_empty());
    }

    #[test]
    fn try_load_reports_index_unavailable() {
        let mut index = AssetIndex::new();
        assert!(matches!(
            index.try_load_blk(Path::new("/definitely/not/here.bin")),
            Err(Error::IndexUnavailable { .. })
        ));
    }

    #[test]
    fn truncated_index_leaves_maps_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(BLK_INDEX_FILE);
        let index = sample_index();
        index.save_blk(&path).unwrap();

        let full = fs::read(&path).unwrap();
        fs::write(&path, &full[..full.len() / 2]).unwrap();

        let mut loaded = AssetIndex::new();
        assert!(!loaded.load_blk(&path));
        assert!(loaded.blk.is_empty());
    }

    #[test]
    fn cab_build_counts_collisions_and_keeps_the_first_location() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("10").join("CAB-one");
        let second = dir.path().join("20").join("CAB-two");
        fs::create_dir_all(first.parent().unwrap()).unwrap();
        fs::create_dir_all(second.parent().unwrap()).unwrap();
        fs::write(&first, "bundle_a\nbundle_b").unwrap();
        fs::write(&second, "bundle_a\nbundle_c").unwrap();

        let mut index = AssetIndex::new();
        let mut reports = Vec::new();
        let summary = index.build_cab(
            dir.path(),
            &[first, second],
            &TextManifests,
            |current, total| reports.push((current, total)),
        );

        assert_eq!(summary.entries, 1);
        assert_eq!(summary.collisions, 1);
        assert_eq!(summary.failures, 0);
        assert_eq!(reports, vec![(1, 2), (2, 2)]);

        let entry = &index.cab["bundle_a"];
        assert_eq!(entry.locations, vec![format!("10{}CAB-one", std::path::MAIN_SEPARATOR)]);
        assert_eq!(entry.dependencies, vec!["bundle_b".to_owned()]);
    }

    #[test]
    fn cab_build_skips_unreadable_files_but_finishes() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("CAB-good");
        fs::write(&good, "bundle_ok").unwrap();
        let missing = dir.path().join("CAB-missing");

        let mut index = AssetIndex::new();
        let summary = index.build_cab(
            dir.path(),
            &[missing, good],
            &TextManifests,
            |_, _| {},
        );
        assert_eq!(summary.failures, 1);
        assert_eq!(summary.entries, 1);
        assert!(index.cab.contains_key("bundle_ok"));
    }

    #[test]
    fn find_blk_files_is_sorted_and_recursive() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("20.blk"), b"x").unwrap();
        fs::write(dir.path().join("10.blk"), b"x").unwrap();
        fs::write(dir.path().join("sub").join("30.blk"), b"x").unwrap();
        fs::write(dir.path().join("note.txt"), b"x").unwrap();

        let files = find_blk_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| relative_path(dir.path(), p))
            .collect();
        assert_eq!(files.len(), 3);
        assert!(names[0].ends_with("10.blk"));
        assert!(names[1].ends_with("20.blk"));
        assert!(names[2].ends_with("30.blk"));
    }
}
