use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;
use std::sync::Arc;

use crate::modules::content::application::domain::{
    defaults::VIDEO_EDITING,
    entities::{
        ContentDocument, Graphic, Project, Review, ServiceItem, ServiceItemEdit, ServiceItemKind,
    },
    field_path::{set_path, FieldPathError},
    ids::IdGenerator,
};

/// Id-keyed collections an admin can grow or shrink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Projects,
    Graphics,
    Reviews,
}

impl FromStr for Collection {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "projects" => Ok(Collection::Projects),
            "graphics" => Ok(Collection::Graphics),
            "reviews" => Ok(Collection::Reviews),
            other => Err(DraftError::UnknownCollection(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error(transparent)]
    Path(#[from] FieldPathError),

    #[error("Value does not fit the content document: {0}")]
    InvalidValue(String),

    #[error("Unknown collection: {0}")]
    UnknownCollection(String),

    #[error("Unknown service: {0}")]
    UnknownService(String),

    #[error("Service '{0}' has no item list")]
    NotAnItemList(String),

    #[error("Service '{service}' has no item at index {index}")]
    ItemIndexOutOfRange { service: String, index: usize },
}

/// An uncommitted copy of the content document.
///
/// Every mutation either applies fully or leaves the draft untouched.
#[derive(Debug, Clone)]
pub struct ContentDraft {
    document: ContentDocument,
    ids: Arc<IdGenerator>,
}

impl ContentDraft {
    pub fn new(document: ContentDocument, ids: Arc<IdGenerator>) -> Self {
        Self { document, ids }
    }

    pub fn document(&self) -> &ContentDocument {
        &self.document
    }

    pub fn into_document(self) -> ContentDocument {
        self.document
    }

    /// Replace the value at a dot path. Keys the document has no field for
    /// are refused instead of being dropped on the way back.
    pub fn set_field(&mut self, path: &str, value: Value) -> Result<(), DraftError> {
        let mut tree = serde_json::to_value(&self.document)
            .map_err(|e| DraftError::InvalidValue(e.to_string()))?;

        set_path(&mut tree, path, value)?;

        let document: ContentDocument = serde_json::from_value(tree.clone())
            .map_err(|e| DraftError::InvalidValue(e.to_string()))?;
        let stored = serde_json::to_value(&document)
            .map_err(|e| DraftError::InvalidValue(e.to_string()))?;

        prune_nulls(&mut tree);
        if let Some(segment) = first_dropped_key(&tree, &stored, path) {
            return Err(FieldPathError::MissingSegment { segment }.into());
        }

        self.document = document;
        Ok(())
    }

    /// Append a placeholder entry and return its fresh id.
    pub fn add_item(&mut self, collection: Collection) -> i64 {
        let id = self.ids.next_unused(self.document.used_ids());

        match collection {
            Collection::Projects => self.document.projects.push(Project::placeholder(id)),
            Collection::Graphics => self.document.graphics.push(Graphic::placeholder(id)),
            Collection::Reviews => self.document.reviews.push(Review::placeholder(id)),
        }

        id
    }

    /// Returns `false` when nothing had that id.
    pub fn remove_item(&mut self, collection: Collection, id: i64) -> bool {
        fn retain_without<T>(items: &mut Vec<T>, id: i64, id_of: fn(&T) -> i64) -> bool {
            let before = items.len();
            items.retain(|item| id_of(item) != id);
            items.len() != before
        }

        match collection {
            Collection::Projects => retain_without(&mut self.document.projects, id, |p| p.id),
            Collection::Graphics => retain_without(&mut self.document.graphics, id, |g| g.id),
            Collection::Reviews => retain_without(&mut self.document.reviews, id, |r| r.id),
        }
    }

    /// Append a placeholder shaped like the service's existing items and
    /// return its index.
    pub fn add_service_item(&mut self, service: &str) -> Result<usize, DraftError> {
        let items = self.service_items_mut(service)?;

        let kind = match items.first() {
            Some(existing) => existing.kind(),
            None if service == VIDEO_EDITING => ServiceItemKind::Media,
            None => ServiceItemKind::Product,
        };

        items.push(ServiceItem::placeholder(kind));
        Ok(items.len() - 1)
    }

    pub fn update_service_item(
        &mut self,
        service: &str,
        index: usize,
        edit: ServiceItemEdit,
    ) -> Result<(), DraftError> {
        let item = self
            .service_items_mut(service)?
            .get_mut(index)
            .ok_or_else(|| DraftError::ItemIndexOutOfRange {
                service: service.to_string(),
                index,
            })?;

        item.apply(edit);
        Ok(())
    }

    pub fn remove_service_item(&mut self, service: &str, index: usize) -> Result<(), DraftError> {
        let items = self.service_items_mut(service)?;
        if index >= items.len() {
            return Err(DraftError::ItemIndexOutOfRange {
                service: service.to_string(),
                index,
            });
        }

        items.remove(index);
        Ok(())
    }

    fn service_items_mut(&mut self, service: &str) -> Result<&mut Vec<ServiceItem>, DraftError> {
        self.document
            .service_details
            .get_mut(service)
            .ok_or_else(|| DraftError::UnknownService(service.to_string()))?
            .items_mut()
            .ok_or_else(|| DraftError::NotAnItemList(service.to_string()))
    }
}

/// Null object entries stand for cleared optional fields, which are not
/// serialized back.
fn prune_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            map.values_mut().for_each(prune_nulls);
        }
        Value::Array(items) => items.iter_mut().for_each(prune_nulls),
        _ => {}
    }
}

/// Name of the first key in `edited` that did not survive into `stored`.
fn first_dropped_key(edited: &Value, stored: &Value, key: &str) -> Option<String> {
    match (edited, stored) {
        (Value::Object(edited), Value::Object(stored)) => edited.iter().find_map(|(k, v)| {
            match stored.get(k) {
                Some(s) => first_dropped_key(v, s, k),
                None => Some(k.clone()),
            }
        }),
        (Value::Array(edited), Value::Array(stored)) if edited.len() == stored.len() => edited
            .iter()
            .zip(stored)
            .find_map(|(e, s)| first_dropped_key(e, s, key)),
        (edited, stored) if edited == stored => None,
        _ => Some(key.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::content::application::domain::entities::ServiceDetail;
    use serde_json::json;
    use std::collections::HashSet;

    fn draft() -> ContentDraft {
        ContentDraft::new(ContentDocument::default(), Arc::new(IdGenerator::new()))
    }

    // ──────────────────────────────────────────────────────────
    // set_field
    // ──────────────────────────────────────────────────────────

    #[test]
    fn set_field_replaces_about_title() {
        let mut draft = draft();

        draft
            .set_field("aboutData.title", json!("New Title"))
            .unwrap();

        assert_eq!(draft.document().about_data["title"], "New Title");
    }

    #[test]
    fn set_field_edits_a_project_by_index() {
        let mut draft = draft();

        draft
            .set_field("projects.1.demoUrl", json!("https://demo"))
            .unwrap();

        assert_eq!(draft.document().projects[1].demo_url, "https://demo");
    }

    #[test]
    fn set_field_edits_nested_service_items() {
        let mut draft = draft();

        draft
            .set_field("serviceDetails.Video Editing.0.title", json!("Reel"))
            .unwrap();

        let items = draft.document().service_details[VIDEO_EDITING]
            .items()
            .unwrap();
        assert_eq!(items[0].label(), "Reel");
    }

    #[test]
    fn set_field_with_wrong_type_leaves_draft_unchanged() {
        let mut draft = draft();
        let before = draft.document().clone();

        let err = draft
            .set_field("projects.0.id", json!("not-a-number"))
            .unwrap_err();

        assert!(matches!(err, DraftError::InvalidValue(_)));
        assert_eq!(draft.document(), &before);
    }

    #[test]
    fn set_field_with_bad_path_reports_segment() {
        let mut draft = draft();

        let err = draft.set_field("nothing.here", json!(1)).unwrap_err();

        assert_eq!(
            err,
            DraftError::Path(FieldPathError::MissingSegment {
                segment: "nothing".to_string()
            })
        );
    }

    #[test]
    fn set_field_on_unknown_top_level_key_is_refused() {
        let mut draft = draft();

        let err = draft.set_field("extra", json!("x")).unwrap_err();

        assert_eq!(
            err,
            DraftError::Path(FieldPathError::MissingSegment {
                segment: "extra".to_string()
            })
        );
        assert_eq!(draft.document(), &ContentDocument::default());
    }

    #[test]
    fn misspelled_project_field_is_refused() {
        let mut draft = draft();

        let err = draft
            .set_field("projects.0.tittle", json!("Typo"))
            .unwrap_err();

        assert_eq!(
            err,
            DraftError::Path(FieldPathError::MissingSegment {
                segment: "tittle".to_string()
            })
        );
        assert_eq!(draft.document(), &ContentDocument::default());
    }

    #[test]
    fn replacing_an_entry_with_extra_keys_is_refused() {
        let mut draft = draft();
        let mut project = serde_json::to_value(&draft.document().projects[0]).unwrap();
        project["featured"] = json!(true);

        let err = draft.set_field("projects.0", project).unwrap_err();

        assert_eq!(
            err,
            DraftError::Path(FieldPathError::MissingSegment {
                segment: "featured".to_string()
            })
        );
    }

    #[test]
    fn new_about_entry_is_kept() {
        let mut draft = draft();

        draft.set_field("aboutData.motto", json!("Ship it")).unwrap();

        assert_eq!(draft.document().about_data["motto"], "Ship it");
    }

    // ──────────────────────────────────────────────────────────
    // add_item / remove_item
    // ──────────────────────────────────────────────────────────

    #[test]
    fn add_project_grows_by_one_with_unused_id() {
        let mut draft = draft();
        let before = draft.document().projects.len();
        let existing: HashSet<i64> = draft.document().used_ids().collect();

        let id = draft.add_item(Collection::Projects);

        assert_eq!(draft.document().projects.len(), before + 1);
        assert!(!existing.contains(&id));
        assert_eq!(draft.document().projects.last().unwrap().id, id);
        assert_eq!(draft.document().projects.last().unwrap().title, "New Project");
    }

    #[test]
    fn repeated_adds_never_reuse_an_id() {
        let mut draft = draft();

        let ids: HashSet<i64> = (0..50)
            .map(|i| {
                let c = match i % 3 {
                    0 => Collection::Projects,
                    1 => Collection::Graphics,
                    _ => Collection::Reviews,
                };
                draft.add_item(c)
            })
            .collect();

        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn remove_item_deletes_matching_entry() {
        let mut draft = draft();

        assert!(draft.remove_item(Collection::Graphics, 3));

        assert!(draft.document().graphics.iter().all(|g| g.id != 3));
        assert_eq!(draft.document().graphics.len(), 5);
    }

    #[test]
    fn remove_item_with_absent_id_is_a_no_op() {
        let mut draft = draft();
        let before = draft.document().clone();

        let removed = draft.remove_item(Collection::Reviews, 424242);

        assert!(!removed);
        assert_eq!(draft.document(), &before);
    }

    #[test]
    fn collection_parses_from_route_segment() {
        assert_eq!("graphics".parse::<Collection>(), Ok(Collection::Graphics));
        assert!(matches!(
            "videos".parse::<Collection>(),
            Err(DraftError::UnknownCollection(_))
        ));
    }

    // ──────────────────────────────────────────────────────────
    // service items
    // ──────────────────────────────────────────────────────────

    #[test]
    fn add_service_item_follows_existing_item_shape() {
        let mut draft = draft();

        let index = draft.add_service_item("Web Development").unwrap();
        let items = draft.document().service_details["Web Development"]
            .items()
            .unwrap();

        assert_eq!(index, 3);
        assert_eq!(items[index], ServiceItem::placeholder(ServiceItemKind::Product));
    }

    #[test]
    fn add_service_item_to_empty_video_list_creates_media() {
        let mut draft = draft();
        draft.document.service_details.insert(
            VIDEO_EDITING.to_string(),
            ServiceDetail::Items(Vec::new()),
        );

        draft.add_service_item(VIDEO_EDITING).unwrap();

        let items = draft.document().service_details[VIDEO_EDITING]
            .items()
            .unwrap();
        assert_eq!(items[0].kind(), ServiceItemKind::Media);
    }

    #[test]
    fn add_service_item_to_showcase_is_rejected() {
        let mut draft = draft();

        let err = draft.add_service_item("Digital Branding").unwrap_err();

        assert_eq!(err, DraftError::NotAnItemList("Digital Branding".to_string()));
    }

    #[test]
    fn add_service_item_to_unknown_service_is_rejected() {
        let mut draft = draft();

        let err = draft.add_service_item("Podcasts").unwrap_err();

        assert_eq!(err, DraftError::UnknownService("Podcasts".to_string()));
    }

    #[test]
    fn update_service_item_keeps_variant() {
        let mut draft = draft();

        draft
            .update_service_item(
                VIDEO_EDITING,
                0,
                ServiceItemEdit {
                    name: Some("Launch Film".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        let item = &draft.document().service_details[VIDEO_EDITING]
            .items()
            .unwrap()[0];
        assert_eq!(item.kind(), ServiceItemKind::Media);
        assert_eq!(item.label(), "Launch Film");
    }

    #[test]
    fn update_service_item_out_of_range() {
        let mut draft = draft();

        let err = draft
            .update_service_item("Graphics", 9, ServiceItemEdit::default())
            .unwrap_err();

        assert_eq!(
            err,
            DraftError::ItemIndexOutOfRange {
                service: "Graphics".to_string(),
                index: 9
            }
        );
    }

    #[test]
    fn remove_service_item_shifts_following_items() {
        let mut draft = draft();

        draft.remove_service_item("Graphics", 0).unwrap();

        let items = draft.document().service_details["Graphics"]
            .items()
            .unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].label(), "Marketing Banner");
    }
}
