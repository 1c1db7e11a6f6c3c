use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A closed set of category labels known ahead of time.
pub trait Category: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// Every recognised value, in display order
    const ALL: &'static [Self];

    /// Stable key used in content files and on the command line
    fn key(&self) -> &'static str;

    /// Human-readable label
    fn label(&self) -> &'static str;

    fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.key().eq_ignore_ascii_case(raw) || c.label().eq_ignore_ascii_case(raw))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectCategory {
    Web,
    Mobile,
    Other,
}

impl Category for ProjectCategory {
    const ALL: &'static [Self] = &[Self::Web, Self::Mobile, Self::Other];

    fn key(&self) -> &'static str {
        match self {
            ProjectCategory::Web => "Web",
            ProjectCategory::Mobile => "Mobile",
            ProjectCategory::Other => "Other",
        }
    }

    fn label(&self) -> &'static str {
        self.key()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Languages,
    Frontend,
    Backend,
    Databases,
    Tools,
}

impl SkillCategory {
    pub fn icon(&self) -> &'static str {
        match self {
            SkillCategory::Languages => "💻",
            SkillCategory::Frontend => "🎨",
            SkillCategory::Backend => "⚙️",
            SkillCategory::Databases => "🗄️",
            SkillCategory::Tools => "🔧",
        }
    }
}

impl Category for SkillCategory {
    const ALL: &'static [Self] = &[
        Self::Languages,
        Self::Frontend,
        Self::Backend,
        Self::Databases,
        Self::Tools,
    ];

    fn key(&self) -> &'static str {
        match self {
            SkillCategory::Languages => "languages",
            SkillCategory::Frontend => "frontend",
            SkillCategory::Backend => "backend",
            SkillCategory::Databases => "databases",
            SkillCategory::Tools => "tools",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            SkillCategory::Languages => "Languages",
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Databases => "Databases",
            SkillCategory::Tools => "Tools",
        }
    }
}

/// Deserialize an optional category, mapping unknown labels to `None`.
///
/// One stray label must not sink the whole document; the entry just drops
/// out of every specific filter.
pub(crate) fn lenient<'de, D, C>(deserializer: D) -> std::result::Result<Option<C>, D::Error>
where
    D: Deserializer<'de>,
    C: Category,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(C::parse))
}

/// The selected narrowing of a catalog: everything, or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryFilter<C> {
    All,
    Only(C),
}

impl<C> Default for CategoryFilter<C> {
    fn default() -> Self {
        CategoryFilter::All
    }
}

impl<C: Category> CategoryFilter<C> {
    /// Entries without a category only pass the `All` filter.
    pub fn matches(&self, category: Option<C>) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => category == Some(*wanted),
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(c) => c.key(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(c) => c.label(),
        }
    }

    pub fn category(&self) -> Option<C> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Only(c) => Some(*c),
        }
    }

    /// `All` followed by every category, the order filter controls are shown in.
    pub fn options() -> Vec<Self> {
        std::iter::once(CategoryFilter::All)
            .chain(C::ALL.iter().copied().map(CategoryFilter::Only))
            .collect()
    }

    pub fn parse(raw: &str) -> Result<Self> {
        if raw.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        C::parse(raw)
            .map(CategoryFilter::Only)
            .ok_or_else(|| Error::UnknownCategory {
                raw: raw.to_string(),
                expected: C::ALL.iter().map(|c| c.key()).collect(),
            })
    }

    /// Step through `options()` with wrap-around; `delta` is +1 or -1.
    pub fn cycle(&self, delta: isize) -> Self {
        let options = Self::options();
        let len = options.len() as isize;
        let current = options.iter().position(|f| f == self).unwrap_or(0) as isize;
        let next = (current + delta).rem_euclid(len) as usize;
        options[next]
    }
}

impl<C: Category> FromStr for CategoryFilter<C> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl<C: Category> fmt::Display for CategoryFilter<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl<C: Category> Serialize for CategoryFilter<C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}
