use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub name: String,
    #[serde(default)]
    pub taglines: Vec<String>,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub resume_url: Option<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub social: SocialLinks,
    #[serde(default)]
    pub education: Option<Education>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub grade: Option<String>,
}

impl Summary {
    pub fn mailto(&self) -> Option<String> {
        (!self.email.is_empty()).then(|| format!("mailto:{}", self.email))
    }

    pub fn tel(&self) -> Option<String> {
        (!self.phone.is_empty()).then(|| format!("tel:{}", self.phone.replace(' ', "")))
    }
}
