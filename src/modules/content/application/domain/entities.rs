use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

//
// ──────────────────────────────────────────────────────────
// Portfolio entries
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub image: String,
    pub demo_url: String,
    pub youtube_url: String,
    pub description: String,
}

impl Project {
    pub fn placeholder(id: i64) -> Self {
        Self {
            id,
            title: "New Project".to_string(),
            category: "Web Development".to_string(),
            image: "https://picsum.photos/800/600".to_string(),
            demo_url: "#".to_string(),
            youtube_url: "#".to_string(),
            description: "Description here".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GraphicCategory {
    #[serde(rename = "Branding")]
    Branding,
    #[serde(rename = "UI/UX")]
    UiUx,
    #[serde(rename = "Social Media")]
    SocialMedia,
}

impl GraphicCategory {
    pub const ALL: [GraphicCategory; 3] = [
        GraphicCategory::Branding,
        GraphicCategory::UiUx,
        GraphicCategory::SocialMedia,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GraphicCategory::Branding => "Branding",
            GraphicCategory::UiUx => "UI/UX",
            GraphicCategory::SocialMedia => "Social Media",
        }
    }
}

impl fmt::Display for GraphicCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown graphic category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for GraphicCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GraphicCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Graphic {
    pub id: i64,
    pub title: String,
    pub category: GraphicCategory,
    pub image: String,
}

impl Graphic {
    pub fn placeholder(id: i64) -> Self {
        Self {
            id,
            title: "New Graphic".to_string(),
            category: GraphicCategory::Branding,
            image: "https://picsum.photos/800/800".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub comment: String,
    pub rating: u8,
    pub avatar: String,
}

impl Review {
    pub fn placeholder(id: i64) -> Self {
        Self {
            id,
            name: "New Client".to_string(),
            role: "Role".to_string(),
            comment: "Review text".to_string(),
            rating: 5,
            avatar: "https://i.pravatar.cc/150".to_string(),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Service details
// ──────────────────────────────────────────────────────────
//

/// One entry of a service's item list.
///
/// The variant is fixed when the item is built or deserialized; edits never
/// switch a product into a media item or back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ServiceItem {
    Product {
        name: String,
        image: String,
        link: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        tech: Option<String>,
    },
    Media {
        title: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        url: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        thumbnail: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        image: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceItemKind {
    Product,
    Media,
}

/// Field changes for a single service item. `None` leaves a field as is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ServiceItemEdit {
    pub name: Option<String>,
    pub link: Option<String>,
    pub image: Option<String>,
    pub tech: Option<String>,
}

impl ServiceItem {
    pub fn placeholder(kind: ServiceItemKind) -> Self {
        match kind {
            ServiceItemKind::Media => ServiceItem::Media {
                title: "New Video".to_string(),
                url: Some("#".to_string()),
                thumbnail: Some("https://picsum.photos/600/400".to_string()),
                image: None,
            },
            ServiceItemKind::Product => ServiceItem::Product {
                name: "New Item".to_string(),
                image: "https://picsum.photos/600/400".to_string(),
                link: "#".to_string(),
                tech: Some("Tech".to_string()),
            },
        }
    }

    pub fn kind(&self) -> ServiceItemKind {
        match self {
            ServiceItem::Product { .. } => ServiceItemKind::Product,
            ServiceItem::Media { .. } => ServiceItemKind::Media,
        }
    }

    /// Display name: `name` for products, `title` for media.
    pub fn label(&self) -> &str {
        match self {
            ServiceItem::Product { name, .. } => name,
            ServiceItem::Media { title, .. } => title,
        }
    }

    pub fn apply(&mut self, edit: ServiceItemEdit) {
        match self {
            ServiceItem::Product {
                name,
                image,
                link,
                tech,
            } => {
                if let Some(v) = edit.name {
                    *name = v;
                }
                if let Some(v) = edit.link {
                    *link = v;
                }
                if let Some(v) = edit.image {
                    *image = v;
                }
                if let Some(v) = edit.tech {
                    *tech = Some(v);
                }
            }
            ServiceItem::Media {
                title,
                url,
                thumbnail,
                image,
            } => {
                if let Some(v) = edit.name {
                    *title = v;
                }
                if let Some(v) = edit.link {
                    *url = Some(v);
                }
                if let Some(v) = edit.image {
                    // media without a stand-alone image shows its thumbnail
                    if image.is_some() {
                        *image = Some(v);
                    } else {
                        *thumbnail = Some(v);
                    }
                }
                // media items carry no tech stack
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetric {
    pub label: String,
    pub before: String,
    pub after: String,
    pub trend: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandingShowcase {
    pub before: String,
    pub after: String,
    #[serde(default)]
    pub performance: Vec<PerformanceMetric>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ServiceDetail {
    Items(Vec<ServiceItem>),
    Showcase(BrandingShowcase),
}

impl ServiceDetail {
    pub fn items(&self) -> Option<&[ServiceItem]> {
        match self {
            ServiceDetail::Items(items) => Some(items),
            ServiceDetail::Showcase(_) => None,
        }
    }

    pub fn items_mut(&mut self) -> Option<&mut Vec<ServiceItem>> {
        match self {
            ServiceDetail::Items(items) => Some(items),
            ServiceDetail::Showcase(_) => None,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Content document
// ──────────────────────────────────────────────────────────
//

pub type ServiceDetails = BTreeMap<String, ServiceDetail>;
pub type ContactInfo = BTreeMap<String, String>;
pub type AboutData = BTreeMap<String, String>;

/// Everything the public site renders and the admin edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDocument {
    pub projects: Vec<Project>,
    pub graphics: Vec<Graphic>,
    pub reviews: Vec<Review>,
    pub service_details: ServiceDetails,
    pub contact_info: ContactInfo,
    pub about_data: AboutData,
}

impl Default for ContentDocument {
    fn default() -> Self {
        super::defaults::default_document()
    }
}

impl ContentDocument {
    /// Graphics in display order, optionally limited to one category.
    pub fn graphics_in(&self, category: Option<GraphicCategory>) -> Vec<Graphic> {
        self.graphics
            .iter()
            .filter(|g| category.map_or(true, |c| g.category == c))
            .cloned()
            .collect()
    }

    /// Every id currently used by projects, graphics and reviews.
    pub fn used_ids(&self) -> impl Iterator<Item = i64> + '_ {
        self.projects
            .iter()
            .map(|p| p.id)
            .chain(self.graphics.iter().map(|g| g.id))
            .chain(self.reviews.iter().map(|r| r.id))
    }
}
