use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use chrono::{SecondsFormat, Utc};
use serde_json::Value;
use crate::models::StoredEntryRef;

// Appends the parsed payload to the output file as line-delimited JSON,
// one stored entry per payload element. The timestamp is computed once,
// so every entry from the same request shares it. Returns how many
// entries were written.
pub fn append_entries(path: &Path, data: &Value) -> std::io::Result<usize> {

    let received_at = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);

    // create parent directories lazily on first write
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;

    let elements: Vec<&Value> = match data {
        Value::Array(items) => items.iter().collect(),
        other => vec![other]
    };

    for element in &elements {
        let entry = StoredEntryRef {
            received_at: &received_at,
            data: element
        };
        let line = serde_json::to_string(&entry)?;
        writeln!(file, "{}", line)?;
    }

    println!(
        "[{}] Wrote {} log entry/entries to {}",
        received_at,
        elements.len(),
        path.display()
    );

    Ok(elements.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StoredEntry;
    use serde_json::json;

    fn read_entries(path: &Path) -> Vec<StoredEntry> {
        fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn single_object_appends_one_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jsonl");

        let written = append_entries(&path, &json!({"msg": "hello"})).unwrap();
        assert_eq!(written, 1);

        let entries = read_entries(&path);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].data, json!({"msg": "hello"}));
        assert!(!entries[0].received_at.is_empty());
    }

    #[test]
    fn array_appends_one_line_per_element_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jsonl");

        let written = append_entries(&path, &json!([{"a": 1}, {"a": 2}, {"a": 3}])).unwrap();
        assert_eq!(written, 3);

        let entries = read_entries(&path);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].data, json!({"a": 1}));
        assert_eq!(entries[1].data, json!({"a": 2}));
        assert_eq!(entries[2].data, json!({"a": 3}));
    }

    #[test]
    fn entries_from_one_request_share_a_timestamp() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jsonl");

        append_entries(&path, &json!([{"a": 1}, {"a": 2}])).unwrap();

        let entries = read_entries(&path);
        assert_eq!(entries[0].received_at, entries[1].received_at);
    }

    #[test]
    fn appends_accumulate_across_calls() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jsonl");

        append_entries(&path, &json!({"n": 1})).unwrap();
        append_entries(&path, &json!({"n": 2})).unwrap();

        let entries = read_entries(&path);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].data, json!({"n": 1}));
        assert_eq!(entries[1].data, json!({"n": 2}));
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/out.jsonl");

        append_entries(&path, &json!({"msg": "hi"})).unwrap();
        assert!(path.exists());
    }
}
