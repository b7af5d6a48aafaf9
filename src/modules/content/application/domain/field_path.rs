use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldPathError {
    #[error("Field path is empty")]
    EmptyPath,

    #[error("Path segment '{segment}' does not exist")]
    MissingSegment { segment: String },

    #[error("Path segment '{segment}' is not an object or list")]
    NotAContainer { segment: String },

    #[error("Index '{segment}' is out of range")]
    IndexOutOfRange { segment: String },
}

/// Replace the value at a dot separated path such as `aboutData.title` or
/// `projects.0.title`.
///
/// Every intermediate segment must already exist. The last segment may add a
/// new key to an object, but list indices can only replace existing entries.
pub fn set_path(root: &mut Value, path: &str, value: Value) -> Result<(), FieldPathError> {
    let segments: Vec<&str> = path.split('.').collect();
    if path.trim().is_empty() || segments.iter().any(|s| s.is_empty()) {
        return Err(FieldPathError::EmptyPath);
    }

    set_segments(root, &segments, value, "")
}

fn set_segments(
    node: &mut Value,
    segments: &[&str],
    value: Value,
    parent: &str,
) -> Result<(), FieldPathError> {
    let (head, rest) = match segments.split_first() {
        Some(split) => split,
        None => return Err(FieldPathError::EmptyPath),
    };

    match node {
        Value::Object(map) => {
            if rest.is_empty() {
                map.insert((*head).to_string(), value);
                return Ok(());
            }
            let child = map
                .get_mut(*head)
                .ok_or_else(|| FieldPathError::MissingSegment {
                    segment: (*head).to_string(),
                })?;
            set_segments(child, rest, value, head)
        }
        Value::Array(items) => {
            let index: usize = head.parse().map_err(|_| FieldPathError::MissingSegment {
                segment: (*head).to_string(),
            })?;
            let child = items
                .get_mut(index)
                .ok_or_else(|| FieldPathError::IndexOutOfRange {
                    segment: (*head).to_string(),
                })?;
            if rest.is_empty() {
                *child = value;
                return Ok(());
            }
            set_segments(child, rest, value, head)
        }
        _ => Err(FieldPathError::NotAContainer {
            segment: parent.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "aboutData": { "title": "Old", "cv": "" },
            "projects": [ { "id": 1, "title": "First" } ],
            "contactInfo": { "email": "a@b.c" }
        })
    }

    #[test]
    fn replaces_nested_object_leaf() {
        let mut doc = sample();

        set_path(&mut doc, "aboutData.title", json!("New Title")).unwrap();

        assert_eq!(doc["aboutData"]["title"], "New Title");
        assert_eq!(doc["aboutData"]["cv"], "");
    }

    #[test]
    fn walks_into_list_entries_by_index() {
        let mut doc = sample();

        set_path(&mut doc, "projects.0.title", json!("Renamed")).unwrap();

        assert_eq!(doc["projects"][0]["title"], "Renamed");
    }

    #[test]
    fn adds_new_key_on_object_leaf() {
        let mut doc = sample();

        set_path(&mut doc, "contactInfo.linkedin", json!("https://linkedin")).unwrap();

        assert_eq!(doc["contactInfo"]["linkedin"], "https://linkedin");
    }

    #[test]
    fn rejects_empty_paths() {
        let mut doc = sample();

        assert_eq!(
            set_path(&mut doc, "", json!(1)),
            Err(FieldPathError::EmptyPath)
        );
        assert_eq!(
            set_path(&mut doc, "aboutData..title", json!(1)),
            Err(FieldPathError::EmptyPath)
        );
    }

    #[test]
    fn missing_intermediate_segment_is_reported() {
        let mut doc = sample();
        let before = doc.clone();

        let err = set_path(&mut doc, "unknown.title", json!("x")).unwrap_err();

        assert_eq!(
            err,
            FieldPathError::MissingSegment {
                segment: "unknown".to_string()
            }
        );
        assert_eq!(doc, before);
    }

    #[test]
    fn scalar_in_the_middle_is_not_a_container() {
        let mut doc = sample();

        let err = set_path(&mut doc, "aboutData.title.text", json!("x")).unwrap_err();

        assert_eq!(
            err,
            FieldPathError::NotAContainer {
                segment: "title".to_string()
            }
        );
    }

    #[test]
    fn list_index_past_the_end_is_out_of_range() {
        let mut doc = sample();

        let err = set_path(&mut doc, "projects.3.title", json!("x")).unwrap_err();

        assert_eq!(
            err,
            FieldPathError::IndexOutOfRange {
                segment: "3".to_string()
            }
        );
    }

    #[test]
    fn non_numeric_list_segment_is_missing() {
        let mut doc = sample();

        let err = set_path(&mut doc, "projects.first", json!("x")).unwrap_err();

        assert!(matches!(err, FieldPathError::MissingSegment { .. }));
    }
}
