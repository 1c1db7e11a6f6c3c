use serde::{Deserialize, Serialize};

use crate::category::{Category, SkillCategory};
use crate::id::ItemId;

/// One skill as it appears in the catalog, tagged with the group it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: ItemId,
    pub name: String,
    pub icon: String,
    /// Percentage in `0..=100`
    pub proficiency: u8,
    pub category: SkillCategory,
}

impl Skill {
    pub fn level(&self) -> ProficiencyLevel {
        ProficiencyLevel::from_score(self.proficiency)
    }

    /// Letter shown when the icon can't be displayed
    pub fn monogram(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

/// A skill as stored in the skills document (grouped, no id).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub name: String,
    #[serde(default)]
    pub icon: String,
    pub proficiency: u8,
}

/// The skills document: one list per category plus free-form soft skills.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsDocument {
    #[serde(default)]
    pub languages: Vec<SkillEntry>,
    #[serde(default)]
    pub frontend: Vec<SkillEntry>,
    #[serde(default)]
    pub backend: Vec<SkillEntry>,
    #[serde(default)]
    pub databases: Vec<SkillEntry>,
    #[serde(default)]
    pub tools: Vec<SkillEntry>,
    #[serde(default)]
    pub soft_skills: Vec<String>,
}

impl SkillsDocument {
    fn group(&self, category: SkillCategory) -> &[SkillEntry] {
        match category {
            SkillCategory::Languages => &self.languages,
            SkillCategory::Frontend => &self.frontend,
            SkillCategory::Backend => &self.backend,
            SkillCategory::Databases => &self.databases,
            SkillCategory::Tools => &self.tools,
        }
    }

    /// Flatten into catalog skills (category order, then document order)
    /// and the soft-skill list.
    ///
    /// Ids are `<category>-<index>`, unique within one document.
    pub fn into_parts(self) -> (Vec<Skill>, Vec<String>) {
        let skills = SkillCategory::ALL
            .iter()
            .flat_map(|&category| {
                self.group(category)
                    .iter()
                    .enumerate()
                    .map(move |(index, entry)| Skill {
                        id: ItemId::Text(format!("{}-{}", category.key(), index)),
                        name: entry.name.clone(),
                        icon: entry.icon.clone(),
                        proficiency: entry.proficiency.min(100),
                        category,
                    })
            })
            .collect();
        (skills, self.soft_skills)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum ProficiencyLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl ProficiencyLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            90.. => ProficiencyLevel::Expert,
            80..=89 => ProficiencyLevel::Advanced,
            70..=79 => ProficiencyLevel::Intermediate,
            _ => ProficiencyLevel::Beginner,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProficiencyLevel::Beginner => "Beginner",
            ProficiencyLevel::Intermediate => "Intermediate",
            ProficiencyLevel::Advanced => "Advanced",
            ProficiencyLevel::Expert => "Expert",
        }
    }
}
