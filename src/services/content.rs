use crate::models::{BlogPost, CourseModule, FaqCategory, FaqItem, ModuleCategory, Provider};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const PROVIDERS_FILE: &str = "providers.toml";
pub const BLOG_FILE: &str = "blog.toml";
pub const FAQ_FILE: &str = "faq.toml";
pub const MODULES_FILE: &str = "modules.toml";

/// Number of posts returned by [`ContentStore::recent_posts`] when no limit is given
pub const DEFAULT_RECENT_POSTS: usize = 5;

/// Errors that can occur while loading static content
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Duplicate {collection} key: {key}")]
    DuplicateKey { collection: &'static str, key: String },

    #[error("Provider {slug} has rating {rating} outside 0-5")]
    InvalidRating { slug: String, rating: f64 },
}

#[derive(Debug, Deserialize)]
struct ProvidersFile {
    #[serde(default)]
    providers: Vec<Provider>,
}

#[derive(Debug, Deserialize)]
struct BlogFile {
    #[serde(default)]
    posts: Vec<BlogPost>,
}

#[derive(Debug, Deserialize)]
struct FaqFile {
    #[serde(default)]
    categories: Vec<FaqCategory>,
    #[serde(default)]
    items: Vec<FaqItem>,
}

#[derive(Debug, Deserialize)]
struct ModulesFile {
    #[serde(default)]
    modules: Vec<CourseModule>,
}

/// Immutable site content, loaded once at startup
///
/// Holds the provider catalog, blog posts, FAQ and course modules. Keys
/// (provider slug, post slug, FAQ id, module code) are unique within each
/// collection.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    providers: Vec<Provider>,
    posts: Vec<BlogPost>,
    faq_categories: Vec<FaqCategory>,
    faq_items: Vec<FaqItem>,
    modules: Vec<CourseModule>,
}

impl ContentStore {
    /// Load every content file from a directory
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self, ContentError> {
        let dir = dir.as_ref();

        let providers: ProvidersFile = read_toml(&dir.join(PROVIDERS_FILE))?;
        let blog: BlogFile = read_toml(&dir.join(BLOG_FILE))?;
        let faq: FaqFile = read_toml(&dir.join(FAQ_FILE))?;
        let modules: ModulesFile = read_toml(&dir.join(MODULES_FILE))?;

        let store = Self::new(
            providers.providers,
            blog.posts,
            faq.categories,
            faq.items,
            modules.modules,
        )?;

        tracing::info!(
            "Loaded content from {}: {} providers, {} posts, {} FAQs, {} modules",
            dir.display(),
            store.providers.len(),
            store.posts.len(),
            store.faq_items.len(),
            store.modules.len()
        );

        Ok(store)
    }

    /// Build a store from in-memory collections, validating keys
    pub fn new(
        providers: Vec<Provider>,
        posts: Vec<BlogPost>,
        faq_categories: Vec<FaqCategory>,
        faq_items: Vec<FaqItem>,
        modules: Vec<CourseModule>,
    ) -> Result<Self, ContentError> {
        ensure_unique("provider", providers.iter().map(|p| p.slug.as_str()))?;
        ensure_unique("blog post", posts.iter().map(|p| p.slug.as_str()))?;
        ensure_unique("FAQ category", faq_categories.iter().map(|c| c.id.as_str()))?;
        ensure_unique("FAQ item", faq_items.iter().map(|f| f.id.as_str()))?;
        ensure_unique("module", modules.iter().map(|m| m.code.as_str()))?;

        if let Some(p) = providers.iter().find(|p| !(0.0..=5.0).contains(&p.rating)) {
            return Err(ContentError::InvalidRating {
                slug: p.slug.clone(),
                rating: p.rating,
            });
        }

        if providers.is_empty() {
            tracing::warn!("Provider catalog is empty; quiz results will be empty");
        }

        Ok(Self {
            providers,
            posts,
            faq_categories,
            faq_items,
            modules,
        })
    }

    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    pub fn provider(&self, slug: &str) -> Option<&Provider> {
        self.providers.iter().find(|p| p.slug == slug)
    }

    /// Providers delivering in a state, by exact state code
    pub fn providers_in_state(&self, code: &str) -> Vec<&Provider> {
        self.providers.iter().filter(|p| p.serves_state(code)).collect()
    }

    pub fn posts(&self) -> &[BlogPost] {
        &self.posts
    }

    pub fn post(&self, slug: &str) -> Option<&BlogPost> {
        self.posts.iter().find(|p| p.slug == slug)
    }

    pub fn featured_posts(&self) -> Vec<&BlogPost> {
        self.posts.iter().filter(|p| p.featured).collect()
    }

    pub fn posts_in_category(&self, category: &str) -> Vec<&BlogPost> {
        self.posts.iter().filter(|p| p.category == category).collect()
    }

    /// Newest first by publish date; posts published the same day keep file order
    pub fn recent_posts(&self, limit: usize) -> Vec<&BlogPost> {
        let mut posts: Vec<&BlogPost> = self.posts.iter().collect();
        posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        posts.truncate(limit);
        posts
    }

    pub fn faq_categories(&self) -> &[FaqCategory] {
        &self.faq_categories
    }

    pub fn faq_items(&self) -> &[FaqItem] {
        &self.faq_items
    }

    pub fn featured_faqs(&self) -> Vec<&FaqItem> {
        self.faq_items.iter().filter(|f| f.featured).collect()
    }

    pub fn faqs_in_category(&self, category: &str) -> Vec<&FaqItem> {
        self.faq_items.iter().filter(|f| f.category == category).collect()
    }

    /// Case-insensitive substring search over question, answer and tags
    pub fn search_faqs(&self, query: &str) -> Vec<&FaqItem> {
        let needle = query.to_lowercase();
        self.faq_items.iter().filter(|f| f.mentions(&needle)).collect()
    }

    pub fn modules(&self) -> &[CourseModule] {
        &self.modules
    }

    pub fn module(&self, code: &str) -> Option<&CourseModule> {
        self.modules.iter().find(|m| m.code == code)
    }

    pub fn modules_in_category(&self, category: ModuleCategory) -> Vec<&CourseModule> {
        self.modules.iter().filter(|m| m.category == category).collect()
    }

    /// Nominal hours across the core units
    pub fn total_core_hours(&self) -> u32 {
        self.modules
            .iter()
            .filter(|m| m.category == ModuleCategory::Core)
            .map(|m| m.hours)
            .sum()
    }
}

fn read_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ContentError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&raw).map_err(|source| ContentError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn ensure_unique<'a>(
    collection: &'static str,
    keys: impl Iterator<Item = &'a str>,
) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            return Err(ContentError::DuplicateKey {
                collection,
                key: key.to_string(),
            });
        }
    }
    Ok(())
}
