//! Coarse feature categories and the spec-link classifier.
//!
//! The upstream status service does not categorize features, so Baselyn
//! derives a category from the URLs of a feature's specification links.
//! Classification is a pure, total function with no failure mode.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Coarse category of a web platform feature.
///
/// Variants are declared in alphabetical order of their display names, so
/// the derived `Ord` matches the order category groups are presented in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Category {
    /// Styling features, tracked by the CSS working group.
    #[serde(rename = "CSS")]
    Css,
    /// Markup features from the HTML/WHATWG specifications.
    #[serde(rename = "HTML")]
    Html,
    /// Language features from TC39 / ECMA specifications.
    JavaScript,
    /// Everything else: platform APIs without a more specific home.
    #[serde(rename = "Web Platform")]
    WebPlatform,
}

impl Category {
    /// The display/wire name for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Css => "CSS",
            Category::Html => "HTML",
            Category::JavaScript => "JavaScript",
            Category::WebPlatform => "Web Platform",
        }
    }

    /// Classify a feature by its specification link URLs.
    ///
    /// Links are scanned in order and the first matching link decides:
    ///
    /// 1. URL containing `csswg` or `css` → [`Category::Css`]
    /// 2. URL containing `tc39` or `ecma` → [`Category::JavaScript`]
    /// 3. URL containing `html` or `whatwg` → [`Category::Html`]
    ///
    /// An empty link list, or one where no link matches any pattern, yields
    /// [`Category::WebPlatform`].
    ///
    /// # Examples
    ///
    /// ```
    /// use baselyn_core::Category;
    ///
    /// let css = Category::from_links(["https://drafts.csswg.org/css-grid/"]);
    /// assert_eq!(css, Category::Css);
    ///
    /// let none = Category::from_links(Vec::<&str>::new());
    /// assert_eq!(none, Category::WebPlatform);
    /// ```
    pub fn from_links<I, S>(links: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for link in links {
            let url = link.as_ref();
            if url.contains("csswg") || url.contains("css") {
                return Category::Css;
            }
            if url.contains("tc39") || url.contains("ecma") {
                return Category::JavaScript;
            }
            if url.contains("html") || url.contains("whatwg") {
                return Category::Html;
            }
        }
        Category::WebPlatform
    }

    /// All categories, in display order.
    pub fn all() -> [Category; 4] {
        [
            Category::Css,
            Category::Html,
            Category::JavaScript,
            Category::WebPlatform,
        ]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "css" => Ok(Category::Css),
            "html" => Ok(Category::Html),
            "javascript" | "js" => Ok(Category::JavaScript),
            "web platform" | "web-platform" => Ok(Category::WebPlatform),
            _ => Err(Error::UnknownCategory(s.to_string())),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
