//! Builds a nested section tree from flat folder and file lists.
//!
//! The construction is two-pass: a grouping pass that resolves every
//! parent reference against the fetched ID set, then a single top-down
//! traversal that nests children, assigns ancestry paths, and sorts each
//! level. Dangling references are normalized (folders degrade to root
//! placement, files are dropped), never fatal.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use tracing::warn;
use uuid::Uuid;

use maktabati_entity::file::File;
use maktabati_entity::folder::Folder;
use maktabati_entity::hierarchy::{
    FileNode, HierarchyCounts, HierarchyNode, HierarchyResult, SectionHierarchy,
};
use maktabati_entity::section::Section;

/// Materialize the complete nested hierarchy for one section.
///
/// Pure and synchronous over already-fetched data; it has no failure
/// mode. The caller is responsible for a not-found check on the section
/// itself before invoking this.
pub fn materialize(section: Section, folders: Vec<Folder>, files: Vec<File>) -> HierarchyResult {
    let total_folders = folders.len() as u64;
    let known: HashSet<Uuid> = folders.iter().map(|f| f.id).collect();

    // Group folders by effective parent. A parentId that does not resolve
    // within the fetched set degrades the folder to root placement.
    let mut child_folders: HashMap<Option<Uuid>, Vec<Folder>> = HashMap::new();
    for mut folder in folders {
        let parent = match folder.parent_id {
            Some(parent_id) if known.contains(&parent_id) => Some(parent_id),
            Some(parent_id) => {
                warn!(
                    folder_id = %folder.id,
                    parent_id = %parent_id,
                    "Folder references unknown parent, placing at section root"
                );
                // The serialized node must not reference the missing folder.
                folder.parent_id = None;
                None
            }
            None => None,
        };
        child_folders.entry(parent).or_default().push(folder);
    }

    // Group files by containing folder. A folderId that does not resolve
    // excludes the file from the tree and from the counts.
    let mut child_files: HashMap<Option<Uuid>, Vec<File>> = HashMap::new();
    let mut total_files = 0u64;
    for file in files {
        match file.folder_id {
            Some(folder_id) if !known.contains(&folder_id) => {
                warn!(
                    file_id = %file.id,
                    folder_id = %folder_id,
                    "File references unknown folder, dropping from hierarchy"
                );
            }
            key => {
                total_files += 1;
                child_files.entry(key).or_default().push(file);
            }
        }
    }

    let root_path = vec![section.id];
    let root_folders = build_level(None, &root_path, &mut child_folders, &mut child_files);
    let root_files = attach_files(child_files.remove(&None).unwrap_or_default(), &root_path);

    HierarchyResult {
        section: SectionHierarchy {
            section,
            folders: root_folders,
            files: root_files,
        },
        counts: HierarchyCounts {
            total_folders,
            total_files,
        },
    }
}

/// Recursively nest one level of folders under `parent_path`, sorting
/// folders and files independently at each level.
fn build_level(
    parent: Option<Uuid>,
    parent_path: &[Uuid],
    child_folders: &mut HashMap<Option<Uuid>, Vec<Folder>>,
    child_files: &mut HashMap<Option<Uuid>, Vec<File>>,
) -> Vec<HierarchyNode> {
    let mut level = child_folders.remove(&parent).unwrap_or_default();
    level.sort_by(|a, b| compare_names(&a.name, &b.name));

    level
        .into_iter()
        .map(|folder| {
            let mut path = parent_path.to_vec();
            path.push(folder.id);
            let folders = build_level(Some(folder.id), &path, child_folders, child_files);
            let files = attach_files(
                child_files.remove(&Some(folder.id)).unwrap_or_default(),
                &path,
            );
            HierarchyNode {
                folder,
                folders,
                files,
                path,
            }
        })
        .collect()
}

fn attach_files(mut files: Vec<File>, path: &[Uuid]) -> Vec<FileNode> {
    files.sort_by(|a, b| compare_names(&a.name, &b.name));
    files
        .into_iter()
        .map(|file| FileNode {
            file,
            path: path.to_vec(),
        })
        .collect()
}

/// Locale-style name comparison: case-insensitive primary order with a
/// case-sensitive tiebreak, so `mid` sorts between `Alpha` and `Zeta`.
fn compare_names(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    match folded {
        Ordering::Equal => a.cmp(b),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn section(id: Uuid) -> Section {
        Section {
            id,
            owner_id: Uuid::new_v4(),
            name: "Library".to_string(),
            icon: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn folder(id: Uuid, section_id: Uuid, parent_id: Option<Uuid>, name: &str) -> Folder {
        Folder {
            id,
            owner_id: Uuid::new_v4(),
            section_id,
            name: name.to_string(),
            parent_id,
            deleted: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn file(id: Uuid, section_id: Uuid, folder_id: Option<Uuid>, name: &str) -> File {
        File {
            id,
            owner_id: Uuid::new_v4(),
            section_id,
            name: name.to_string(),
            file_url: format!("https://static.example/{name}"),
            file_type: "text/plain".to_string(),
            file_size: 42,
            folder_id,
            storage_path: None,
            favorite: false,
            deleted: false,
            indexed: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_nested_tree_with_dropped_orphan_file() {
        let s = Uuid::new_v4();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let missing = Uuid::new_v4();
        let f1 = Uuid::new_v4();
        let f2 = Uuid::new_v4();

        let result = materialize(
            section(s),
            vec![folder(a, s, None, "Docs"), folder(b, s, Some(a), "Sub")],
            vec![
                file(f1, s, Some(b), "a.txt"),
                file(f2, s, Some(missing), "b.txt"),
            ],
        );

        assert_eq!(result.counts.total_folders, 2);
        assert_eq!(result.counts.total_files, 1);

        assert_eq!(result.section.folders.len(), 1);
        let docs = &result.section.folders[0];
        assert_eq!(docs.folder.id, a);
        assert_eq!(docs.path, vec![s, a]);
        assert!(docs.files.is_empty());

        assert_eq!(docs.folders.len(), 1);
        let sub = &docs.folders[0];
        assert_eq!(sub.folder.id, b);
        assert_eq!(sub.path, vec![s, a, b]);
        assert_eq!(sub.files.len(), 1);
        assert_eq!(sub.files[0].file.id, f1);
        assert_eq!(sub.files[0].path, vec![s, a, b]);
    }

    #[test]
    fn test_dangling_parent_degrades_to_root() {
        let s = Uuid::new_v4();
        let a = Uuid::new_v4();
        let gone = Uuid::new_v4();

        let result = materialize(
            section(s),
            vec![folder(a, s, Some(gone), "Stray")],
            Vec::new(),
        );

        assert_eq!(result.section.folders.len(), 1);
        assert_eq!(result.section.folders[0].path, vec![s, a]);
        assert_eq!(result.section.folders[0].folder.parent_id, None);
        assert_eq!(result.counts.total_folders, 1);
    }

    #[test]
    fn test_identical_inputs_produce_identical_output() {
        let s = Uuid::new_v4();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let sec = section(s);
        let folders = vec![
            folder(a, s, None, "Docs"),
            folder(b, s, Some(a), "Sub"),
            folder(Uuid::new_v4(), s, Some(Uuid::new_v4()), "Stray"),
        ];
        let files = vec![
            file(Uuid::new_v4(), s, Some(b), "deep.txt"),
            file(Uuid::new_v4(), s, None, "root.txt"),
        ];

        let first = materialize(sec.clone(), folders.clone(), files.clone());
        let second = materialize(sec, folders, files);

        assert_eq!(first, second);
    }

    #[test]
    fn test_sorting_is_locale_style() {
        let s = Uuid::new_v4();
        let result = materialize(
            section(s),
            vec![
                folder(Uuid::new_v4(), s, None, "Zeta"),
                folder(Uuid::new_v4(), s, None, "Alpha"),
                folder(Uuid::new_v4(), s, None, "mid"),
            ],
            Vec::new(),
        );

        let names: Vec<&str> = result
            .section
            .folders
            .iter()
            .map(|n| n.folder.name.as_str())
            .collect();
        assert_eq!(names, ["Alpha", "mid", "Zeta"]);
    }

    #[test]
    fn test_root_files_sorted_with_section_path() {
        let s = Uuid::new_v4();
        let result = materialize(
            section(s),
            Vec::new(),
            vec![
                file(Uuid::new_v4(), s, None, "notes.md"),
                file(Uuid::new_v4(), s, None, "agenda.md"),
            ],
        );

        let names: Vec<&str> = result
            .section
            .files
            .iter()
            .map(|n| n.file.name.as_str())
            .collect();
        assert_eq!(names, ["agenda.md", "notes.md"]);
        assert_eq!(result.section.files[0].path, vec![s]);
        assert_eq!(result.counts.total_files, 2);
    }

    #[test]
    fn test_every_path_extends_its_parent() {
        let s = Uuid::new_v4();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let c = Uuid::new_v4();

        let result = materialize(
            section(s),
            vec![
                folder(a, s, None, "a"),
                folder(b, s, Some(a), "b"),
                folder(c, s, Some(b), "c"),
            ],
            Vec::new(),
        );

        fn check(nodes: &[HierarchyNode], parent_path: &[Uuid]) {
            for node in nodes {
                assert_eq!(&node.path[..parent_path.len()], parent_path);
                assert_eq!(node.path.len(), parent_path.len() + 1);
                assert_eq!(*node.path.last().unwrap(), node.folder.id);
                check(&node.folders, &node.path);
            }
        }
        check(&result.section.folders, &[s]);
    }

    #[test]
    fn test_empty_section() {
        let s = Uuid::new_v4();
        let result = materialize(section(s), Vec::new(), Vec::new());
        assert!(result.section.folders.is_empty());
        assert!(result.section.files.is_empty());
        assert_eq!(result.counts.total_folders, 0);
        assert_eq!(result.counts.total_files, 0);
    }
}
