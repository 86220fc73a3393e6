use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Gallery,
    Modal,
    Hybrid,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Gallery => "/",
            Route::Modal => "/modal",
            Route::Hybrid => "/hybrid",
        }
    }

    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = path.trim_end_matches('/');
        [Route::Gallery, Route::Modal, Route::Hybrid]
            .into_iter()
            .find(|r| r.path().trim_end_matches('/') == trimmed)
    }
}

pub struct PageVersion {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub route: Route,
    pub features: [&'static str; 4],
}

pub static PAGE_VERSIONS: [PageVersion; 2] = [
    PageVersion {
        id: "modal",
        name: "Modal Version",
        description: "Content displayed in interactive modals with sticky footer navigation",
        route: Route::Modal,
        features: [
            "Sticky footer with persistent CTAs",
            "All content in modal overlays",
            "Minimal initial page load",
            "Best for focused conversions",
        ],
    },
    PageVersion {
        id: "hybrid",
        name: "Hybrid Version",
        description: "Combines inline content sections with modal interactions for key features",
        route: Route::Hybrid,
        features: [
            "Inline video testimonials",
            "Product comparison table",
            "How it works slideshow",
            "Modals for quiz and quick answers",
        ],
    },
];

pub fn version(id: &str) -> Option<&'static PageVersion> {
    PAGE_VERSIONS.iter().find(|v| v.id == id)
}
