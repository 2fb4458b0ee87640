//! Path expansion and lopdf object-graph helpers.

use crate::{PdfSplitError, Result};
use lopdf::{Document, Object};
use std::path::PathBuf;

/// Expand input arguments that may contain glob patterns.
///
/// Matches of each pattern are returned in the pattern's (sorted) order,
/// patterns in argument order. An argument that matches nothing is kept
/// verbatim so that a missing file is reported as missing instead of
/// silently dropped.
pub fn collect_paths_for_patterns<T>(patterns: T) -> Result<Vec<PathBuf>>
where
    T: IntoIterator,
    T::Item: AsRef<str>,
{
    let mut resolved_paths = Vec::new();

    for pattern in patterns.into_iter() {
        let pattern = pattern.as_ref();
        let paths = collect_paths_for_pattern(pattern)?;
        if paths.is_empty() {
            resolved_paths.push(PathBuf::from(pattern));
        } else {
            resolved_paths.extend(paths);
        }
    }

    Ok(resolved_paths)
}

fn collect_paths_for_pattern(pattern: &str) -> Result<Vec<PathBuf>> {
    let mut resolved_paths = Vec::new();

    let paths = glob::glob(pattern).map_err(|err| {
        PdfSplitError::invalid_config(format!("Invalid input pattern '{pattern}': {err}"))
    })?;

    for entry in paths {
        let path = entry.map_err(|err| PdfSplitError::other(err.to_string()))?;
        resolved_paths.push(path);
    }

    Ok(resolved_paths)
}

/// Copy every object reachable from `obj` out of `source` into `target`.
///
/// Objects already present in `target` (by id) are not copied again, which
/// also stops the walk at back-references.
pub fn copy_references(target: &mut Document, source: &Document, obj: &Object) {
    match obj {
        Object::Reference(ref_id) => {
            if !target.objects.contains_key(ref_id)
                && let Ok(referenced_obj) = source.get_object(*ref_id)
            {
                target.objects.insert(*ref_id, referenced_obj.clone());
                copy_references(target, source, referenced_obj);
            }
        }
        Object::Dictionary(dict) => {
            for (_, value) in dict.iter() {
                copy_references(target, source, value);
            }
        }
        Object::Array(arr) => {
            for item in arr {
                copy_references(target, source, item);
            }
        }
        Object::Stream(stream) => {
            for (_, value) in stream.dict.iter() {
                copy_references(target, source, value);
            }
        }
        _ => {}
    }
}
