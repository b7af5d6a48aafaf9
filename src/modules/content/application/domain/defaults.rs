//! Built-in content shown until an admin has saved anything.

use std::collections::BTreeMap;

use super::entities::{
    AboutData, BrandingShowcase, ContactInfo, ContentDocument, Graphic, GraphicCategory,
    PerformanceMetric, Project, Review, ServiceDetail, ServiceDetails, ServiceItem,
};

pub const VIDEO_EDITING: &str = "Video Editing";

pub fn default_document() -> ContentDocument {
    ContentDocument {
        projects: default_projects(),
        graphics: default_graphics(),
        reviews: default_reviews(),
        service_details: default_service_details(),
        contact_info: default_contact_info(),
        about_data: default_about_data(),
    }
}

fn project(id: i64, title: &str, category: &str, seed: &str, description: &str) -> Project {
    Project {
        id,
        title: title.to_string(),
        category: category.to_string(),
        image: format!("https://picsum.photos/seed/{seed}/800/600"),
        demo_url: "#".to_string(),
        youtube_url: "#".to_string(),
        description: description.to_string(),
    }
}

pub fn default_projects() -> Vec<Project> {
    vec![
        project(
            1,
            "E-Commerce Platform",
            "Web Development",
            "shop",
            "A full-stack e-commerce solution with real-time inventory.",
        ),
        project(
            2,
            "SaaS Dashboard",
            "UI/UX Design",
            "dash",
            "Modern analytics dashboard with dark mode support.",
        ),
        project(
            3,
            "Crypto Wallet App",
            "Mobile App",
            "crypto",
            "Secure cryptocurrency wallet with multi-chain support.",
        ),
    ]
}

pub fn default_graphics() -> Vec<Graphic> {
    [
        (1, "Modern Logo Set", GraphicCategory::Branding, "logo"),
        (2, "App Interface", GraphicCategory::UiUx, "ui"),
        (3, "Instagram Campaign", GraphicCategory::SocialMedia, "social"),
        (4, "Brand Identity", GraphicCategory::Branding, "brand"),
        (5, "Web Layout", GraphicCategory::UiUx, "web"),
        (6, "Marketing Post", GraphicCategory::SocialMedia, "market"),
    ]
    .into_iter()
    .map(|(id, title, category, seed)| Graphic {
        id,
        title: title.to_string(),
        category,
        image: format!("https://picsum.photos/seed/{seed}/800/800"),
    })
    .collect()
}

pub fn default_reviews() -> Vec<Review> {
    [
        (
            1,
            "Alex Johnson",
            "CEO, TechFlow",
            "Towsif delivered an exceptional website that exceeded our expectations. His attention to detail is unmatched.",
            "alex",
        ),
        (
            2,
            "Sarah Miller",
            "Marketing Director",
            "The graphics gallery he created for our brand was stunning. Highly professional and creative.",
            "sarah",
        ),
        (
            3,
            "David Chen",
            "Founder, StartupX",
            "Fast delivery and great communication. The chatbot integration works perfectly.",
            "david",
        ),
    ]
    .into_iter()
    .map(|(id, name, role, comment, seed)| Review {
        id,
        name: name.to_string(),
        role: role.to_string(),
        comment: comment.to_string(),
        rating: 5,
        avatar: format!("https://i.pravatar.cc/150?u={seed}"),
    })
    .collect()
}

pub fn default_service_details() -> ServiceDetails {
    let web = [
        ("Premium E-Commerce", "web1", "https://bdfollow.shop", "Next.js, Tailwind"),
        ("SaaS Landing Page", "web2", "#", "React, Framer Motion"),
        ("Agency Portfolio", "web3", "#", "TypeScript, Vite"),
    ]
    .into_iter()
    .map(|(name, seed, link, tech)| ServiceItem::Product {
        name: name.to_string(),
        image: format!("https://picsum.photos/seed/{seed}/600/400"),
        link: link.to_string(),
        tech: Some(tech.to_string()),
    })
    .collect();

    let video = [
        ("Brand Storytelling", "vid1"),
        ("Commercial Promo", "vid2"),
        ("Event Highlights", "vid3"),
    ]
    .into_iter()
    .map(|(title, seed)| ServiceItem::Media {
        title: title.to_string(),
        url: Some("https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string()),
        thumbnail: Some(format!("https://picsum.photos/seed/{seed}/600/400")),
        image: None,
    })
    .collect();

    let graphics = [
        ("Logo Identity", "gfx1"),
        ("Marketing Banner", "gfx2"),
        ("UI Kit Design", "gfx3"),
    ]
    .into_iter()
    .map(|(title, seed)| ServiceItem::Media {
        title: title.to_string(),
        url: None,
        thumbnail: None,
        image: Some(format!("https://picsum.photos/seed/{seed}/600/400")),
    })
    .collect();

    let performance = [
        ("Page Load Speed", "5.8s", "0.9s"),
        ("Google SEO Rank", "#45", "#3"),
        ("User Retention", "12%", "48%"),
    ]
    .into_iter()
    .map(|(label, before, after)| PerformanceMetric {
        label: label.to_string(),
        before: before.to_string(),
        after: after.to_string(),
        trend: "up".to_string(),
    })
    .collect();

    let mut details = BTreeMap::new();
    details.insert("Web Development".to_string(), ServiceDetail::Items(web));
    details.insert(VIDEO_EDITING.to_string(), ServiceDetail::Items(video));
    details.insert("Graphics".to_string(), ServiceDetail::Items(graphics));
    details.insert(
        "Digital Branding".to_string(),
        ServiceDetail::Showcase(BrandingShowcase {
            before: "https://picsum.photos/seed/oldbrand/800/600?blur=5".to_string(),
            after: "https://picsum.photos/seed/newbrand/800/600".to_string(),
            performance,
        }),
    );
    details
}

fn string_map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub fn default_contact_info() -> ContactInfo {
    string_map(&[
        ("whatsapp", "01309823877"),
        ("website", "bdfollow.shop"),
        ("email", "Hussein.Tausif634@gmail.com"),
        ("facebook", "https://facebook.com/bdfollow"),
        ("instagram", "https://instagram.com/bdfollow"),
        ("twitter", "https://twitter.com/tausif_hossain"),
    ])
}

pub fn default_about_data() -> AboutData {
    string_map(&[
        ("title", "Innovative Solutions for Modern Brands"),
        (
            "description",
            "I am a multi-disciplinary designer and developer based in Bangladesh. Through bdfollow.shop, I help businesses scale their digital presence with cutting-edge technology and premium design aesthetics.",
        ),
        ("image", "https://picsum.photos/seed/towsif/800/800"),
        ("experience", "5+"),
        ("cv", ""),
    ])
}
