//! Transitive dependency resolution over a built [`AssetIndex`].
//!
//! Starting from a set of files, find every bundle those files define, then
//! walk declared dependencies until the set closes, collecting the physical
//! location of each name on the way. Dependency graphs contain cycles, so
//! expansion is a worklist gated by a visited set, never recursion.
//!
//! When a name has several physical copies, the copy whose numeric filename
//! component is closest to the referencing file's wins. That assumes
//! numeric, sequentially-issued file names; it is a heuristic carried over
//! from the original tooling, not a guarantee.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::asset_index::{relative_path, AssetIndex};
use crate::error::Error;

/// Expand `start_files` into every `(container path, sub-container offset)`
/// required to satisfy their dependencies. Read-only over the index.
pub fn resolve_from_blk(index: &AssetIndex, start_files: &[PathBuf]) -> BTreeSet<(PathBuf, u64)> {
    let base = Path::new(&index.blk_base_path);
    let mut resolved = BTreeSet::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut work: Vec<(String, String)> = Vec::new();

    for file in start_files {
        let rel = relative_path(base, file);
        for (name, entry) in &index.blk {
            if entry.locations.iter().any(|(path, _)| path == &rel) && seen.insert(name.clone()) {
                work.push((name.clone(), rel.clone()));
            }
        }
    }

    while let Some((name, reference)) = work.pop() {
        let Some(entry) = index.blk.get(&name) else {
            warn!("{}; skipping", Error::MissingDependency(name));
            continue;
        };
        let mut next_reference = reference;
        if let Some((location, offset)) = pick_blk_location(&entry.locations, &next_reference) {
            resolved.insert((base.join(location), *offset));
            next_reference = location.clone();
        }
        for dep in &entry.dependencies {
            if seen.insert(dep.clone()) {
                work.push((dep.clone(), next_reference.clone()));
            }
        }
    }
    resolved
}

/// Expand `start_files` into the loose files required to satisfy their
/// dependencies, deduplicated by file name rather than full path.
pub fn resolve_from_cab(index: &AssetIndex, start_files: &[PathBuf]) -> BTreeSet<PathBuf> {
    let base = Path::new(&index.cab_base_path);
    let mut resolved = BTreeSet::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut seen_file_names: HashSet<String> = HashSet::new();
    let mut work: Vec<(String, String)> = Vec::new();

    for file in start_files {
        let rel = relative_path(base, file);
        for (name, entry) in &index.cab {
            if entry.locations.iter().any(|path| path == &rel) && seen.insert(name.clone()) {
                work.push((name.clone(), rel.clone()));
            }
        }
    }

    while let Some((name, reference)) = work.pop() {
        let Some(entry) = index.cab.get(&name) else {
            warn!("{}; skipping", Error::MissingDependency(name));
            continue;
        };
        let mut next_reference = reference;
        if let Some(location) = pick_cab_location(&entry.locations, &next_reference) {
            let full = base.join(location);
            let file_name = full
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            if seen_file_names.insert(file_name) {
                resolved.insert(full);
            }
            next_reference = location.clone();
        }
        for dep in &entry.dependencies {
            if seen.insert(dep.clone()) {
                work.push((dep.clone(), next_reference.clone()));
            }
        }
    }
    resolved
}

/// Expand a file list by whatever resolution the first file's kind calls
/// for: `.blk` files go through the blk index (keeping the originals and
/// appending resolved containers), `CAB-` files are replaced by their
/// closure, anything else passes through untouched.
pub fn resolve_dependencies(index: &AssetIndex, files: &[PathBuf]) -> Vec<PathBuf> {
    let Some(first) = files.first() else {
        return Vec::new();
    };
    info!("resolving dependencies for {} files", files.len());
    if first.extension().is_some_and(|ext| ext == "blk") {
        let mut out = files.to_vec();
        for (path, _) in resolve_from_blk(index, files) {
            if !out.contains(&path) {
                out.push(path);
            }
        }
        out
    } else if first
        .file_name()
        .is_some_and(|name| name.to_string_lossy().contains("CAB-"))
    {
        resolve_from_cab(index, files).into_iter().collect()
    } else {
        files.to_vec()
    }
}

/// Group a blk resolution by container file, ready to feed into
/// [`crate::blk::load_blk_file_at`].
pub fn group_by_file(resolved: &BTreeSet<(PathBuf, u64)>) -> BTreeMap<PathBuf, Vec<u64>> {
    let mut grouped: BTreeMap<PathBuf, Vec<u64>> = BTreeMap::new();
    for (path, offset) in resolved {
        grouped.entry(path.clone()).or_default().push(*offset);
    }
    grouped
}

fn numeric_file_stem(path: &str) -> Option<i64> {
    Path::new(path).file_stem()?.to_str()?.parse().ok()
}

fn numeric_parent_dir(path: &str) -> Option<i64> {
    Path::new(path).parent()?.file_name()?.to_str()?.parse().ok()
}

/// Pick the location whose numeric file stem is nearest the reference's;
/// ties and unparsable stems keep the earliest stored location.
fn pick_blk_location<'a>(
    locations: &'a [(String, u64)],
    reference: &str,
) -> Option<&'a (String, u64)> {
    if locations.len() <= 1 {
        return locations.first();
    }
    let Some(source) = numeric_file_stem(reference) else {
        return locations.first();
    };
    locations
        .iter()
        .enumerate()
        .min_by_key(|(i, (path, _))| {
            let distance = numeric_file_stem(path).map_or(i64::MAX, |n| (n - source).abs());
            (distance, *i)
        })
        .map(|(_, location)| location)
}

/// Same heuristic over the numeric parent-directory component.
fn pick_cab_location<'a>(locations: &'a [String], reference: &str) -> Option<&'a String> {
    if locations.len() <= 1 {
        return locations.first();
    }
    let Some(source) = numeric_parent_dir(reference) else {
        return locations.first();
    };
    locations
        .iter()
        .enumerate()
        .min_by_key(|(i, path)| {
            let distance = numeric_parent_dir(path).map_or(i64::MAX, |n| (n - source).abs());
            (distance, *i)
        })
        .map(|(_, location)| location)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset_index::{BlkEntry, CabEntry};

    fn blk_entry(locations: &[(&str, u64)], dependencies: &[&str]) -> BlkEntry {
        BlkEntry {
            locations: locations
                .iter()
                .map(|(p, o)| (p.to_string(), *o))
                .collect(),
            dependencies: dependencies.iter().map(|d| d.to_string()).collect(),
        }
    }

    fn cab_entry(locations: &[&str], dependencies: &[&str]) -> CabEntry {
        CabEntry {
            locations: locations.iter().map(|p| p.to_string()).collect(),
            dependencies: dependencies.iter().map(|d| d.to_string()).collect(),
        }
    }

    #[test]
    fn cyclic_graph_terminates_with_the_exact_closure() {
        let mut index = AssetIndex::new();
        index.blk_base_path = "/base".to_owned();
        index
            .blk
            .insert("A".into(), blk_entry(&[("100.blk", 1)], &["B", "C"]));
        index
            .blk
            .insert("B".into(), blk_entry(&[("100.blk", 2)], &["C"]));
        index
            .blk
            .insert("C".into(), blk_entry(&[("200.blk", 3)], &["A"]));

        let resolved = resolve_from_blk(&index, &[PathBuf::from("/base/100.blk")]);
        let expected: BTreeSet<_> = [
            (PathBuf::from("/base/100.blk"), 1),
            (PathBuf::from("/base/100.blk"), 2),
            (PathBuf::from("/base/200.blk"), 3),
        ]
        .into();
        assert_eq!(resolved, expected);
    }

    #[test]
    fn nearest_numeric_location_wins() {
        let mut index = AssetIndex::new();
        index.blk_base_path = "/base".to_owned();
        index
            .blk
            .insert("root".into(), blk_entry(&[("150.blk", 5)], &["shared"]));
        index.blk.insert(
            "shared".into(),
            blk_entry(&[("100.blk", 0), ("900.blk", 0)], &[]),
        );

        let resolved = resolve_from_blk(&index, &[PathBuf::from("/base/150.blk")]);
        assert!(resolved.contains(&(PathBuf::from("/base/100.blk"), 0)));
        assert!(!resolved.contains(&(PathBuf::from("/base/900.blk"), 0)));
    }

    #[test]
    fn equal_distances_keep_the_first_stored_location() {
        let locations = vec![("100.blk".to_owned(), 7), ("200.blk".to_owned(), 8)];
        let picked = pick_blk_location(&locations, "150.blk").unwrap();
        assert_eq!(picked.0, "100.blk");
    }

    #[test]
    fn unparsable_numeric_components_fall_back_to_the_first_location() {
        let locations = vec![("alpha.blk".to_owned(), 1), ("beta.blk".to_owned(), 2)];
        assert_eq!(pick_blk_location(&locations, "150.blk").unwrap().0, "alpha.blk");
        let locations = vec![("100.blk".to_owned(), 1), ("900.blk".to_owned(), 2)];
        assert_eq!(pick_blk_location(&locations, "weird.blk").unwrap().0, "100.blk");
    }

    #[test]
    fn missing_dependencies_are_skipped_without_blocking_the_rest() {
        let mut index = AssetIndex::new();
        index.blk_base_path = "/base".to_owned();
        index.blk.insert(
            "root".into(),
            blk_entry(&[("100.blk", 0)], &["gone", "present"]),
        );
        index
            .blk
            .insert("present".into(), blk_entry(&[("101.blk", 4)], &[]));

        let resolved = resolve_from_blk(&index, &[PathBuf::from("/base/100.blk")]);
        assert!(resolved.contains(&(PathBuf::from("/base/101.blk"), 4)));
        assert_eq!(resolved.len(), 2);
    }

    #[test]
    fn cab_resolution_dedupes_by_file_name() {
        let mut index = AssetIndex::new();
        index.cab_base_path = "/cabs".to_owned();
        index
            .cab
            .insert("m1".into(), cab_entry(&["10/CAB-aa"], &["m2"]));
        index
            .cab
            .insert("m2".into(), cab_entry(&["20/CAB-aa"], &[]));

        let resolved = resolve_from_cab(&index, &[PathBuf::from("/cabs/10/CAB-aa")]);
        assert_eq!(resolved.len(), 1);
        assert!(resolved.contains(&PathBuf::from("/cabs/10/CAB-aa")));
    }

    #[test]
    fn cab_resolution_picks_the_nearest_directory_number() {
        let mut index = AssetIndex::new();
        index.cab_base_path = "/cabs".to_owned();
        index
            .cab
            .insert("m1".into(), cab_entry(&["150/CAB-root"], &["m2"]));
        index
            .cab
            .insert("m2".into(), cab_entry(&["100/CAB-dep", "900/CAB-dep"], &[]));

        let resolved = resolve_from_cab(&index, &[PathBuf::from("/cabs/150/CAB-root")]);
        assert!(resolved.contains(&PathBuf::from("/cabs/100/CAB-dep")));
        assert!(!resolved.contains(&PathBuf::from("/cabs/900/CAB-dep")));
    }

    #[test]
    fn dispatch_routes_on_extension_and_name_prefix() {
        let mut index = AssetIndex::new();
        index.blk_base_path = "/base".to_owned();
        index.cab_base_path = "/cabs".to_owned();
        index
            .blk
            .insert("root".into(), blk_entry(&[("100.blk", 0)], &["dep"]));
        index
            .blk
            .insert("dep".into(), blk_entry(&[("300.blk", 9)], &[]));
        index
            .cab
            .insert("c".into(), cab_entry(&["10/CAB-xx"], &[]));

        let blk_out =
            resolve_dependencies(&index, &[PathBuf::from("/base/100.blk")]);
        assert_eq!(blk_out[0], PathBuf::from("/base/100.blk"));
        assert!(blk_out.contains(&PathBuf::from("/base/300.blk")));

        let cab_out =
            resolve_dependencies(&index, &[PathBuf::from("/cabs/10/CAB-xx")]);
        assert_eq!(cab_out, vec![PathBuf::from("/cabs/10/CAB-xx")]);

        let other = vec![PathBuf::from("/somewhere/else.bin")];
        assert_eq!(resolve_dependencies(&index, &other), other);
    }

    #[test]
    fn grouping_collects_offsets_per_container() {
        let resolved: BTreeSet<_> = [
            (PathBuf::from("/base/100.blk"), 1),
            (PathBuf::from("/base/100.blk"), 2),
            (PathBuf::from("/base/200.blk"), 3),
        ]
        .into();
        let grouped = group_by_file(&resolved);
        assert_eq!(grouped[Path::new("/base/100.blk")], vec![1, 2]);
        assert_eq!(grouped[Path::new("/base/200.blk")], vec![3]);
    }
}
