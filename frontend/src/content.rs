//! Static copy for the landing page: services, portfolio, pricing and
//! contact details. The data ships inside the binary as JSON.

use serde::Deserialize;

const SITE_JSON: &str = include_str!("../content/site.json");
const VISIBLE_TECHNOLOGIES: usize = 3;

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct SiteContent {
    pub stats: Vec<Stat>,
    pub services: Vec<Service>,
    pub projects: Vec<Project>,
    pub coding_pricing: Vec<PricingPlan>,
    pub no_code_pricing: Vec<PricingPlan>,
    pub contact_info: Vec<ContactInfo>,
    pub social_links: Vec<SocialLink>,
}

impl SiteContent {
    pub fn parse(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Content compiled into the binary. Falls back to empty lists if the
    /// document is broken so the page still renders.
    pub fn bundled() -> Self {
        match Self::parse(SITE_JSON) {
            Ok(content) => content,
            Err(err) => {
                log::error!("Failed to parse bundled site content: {}", err);
                Self::default()
            }
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Stat {
    pub number: String,
    pub label: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Service {
    pub title: String,
    pub icon: String,
    pub description: String,
    pub features: Vec<String>,
    /// Suffix of the `gradient-*` CSS class.
    pub gradient: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub category: String,
    pub image: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(default)]
    pub demo_url: String,
}

impl Project {
    pub fn visible_technologies(&self) -> &[String] {
        let end = self.technologies.len().min(VISIBLE_TECHNOLOGIES);
        &self.technologies[..end]
    }

    pub fn hidden_technology_count(&self) -> usize {
        self.technologies.len().saturating_sub(VISIBLE_TECHNOLOGIES)
    }

    pub fn demo_link(&self) -> Option<&str> {
        let url = self.demo_url.trim();
        (!url.is_empty()).then_some(url)
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct PricingPlan {
    pub id: u32,
    pub name: String,
    pub price: String,
    pub period: String,
    pub description: String,
    pub features: Vec<String>,
    pub cta: String,
    #[serde(default)]
    pub popular: bool,
    pub gradient: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ContactInfo {
    pub icon: String,
    pub title: String,
    pub content: String,
    pub link: Option<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}

impl SocialLink {
    pub fn glyph(&self) -> String {
        match self.name.as_str() {
            "Twitter" => "𝕏".to_string(),
            "Instagram" => "IG".to_string(),
            "LinkedIn" => "in".to_string(),
            "GitHub" => "GH".to_string(),
            other => other.chars().next().map(String::from).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(technologies: &[&str], demo_url: &str) -> Project {
        Project {
            id: 1,
            title: "Test".to_string(),
            category: "Web Development".to_string(),
            image: String::new(),
            description: String::new(),
            technologies: technologies.iter().map(|t| t.to_string()).collect(),
            demo_url: demo_url.to_string(),
        }
    }

    #[test]
    fn test_bundled_content_parses() {
        let content = SiteContent::parse(SITE_JSON).expect("bundled content must parse");
        assert_eq!(content.stats.len(), 4);
        assert_eq!(content.services.len(), 3);
        assert_eq!(content.projects.len(), 6);
        assert_eq!(content.coding_pricing.len(), 3);
        assert_eq!(content.no_code_pricing.len(), 3);
        assert_eq!(content.contact_info.len(), 4);
        assert_eq!(content.social_links.len(), 4);
    }

    #[test]
    fn test_one_popular_plan_per_table() {
        let content = SiteContent::bundled();
        for table in [&content.coding_pricing, &content.no_code_pricing] {
            let popular: Vec<&str> = table
                .iter()
                .filter(|plan| plan.popular)
                .map(|plan| plan.name.as_str())
                .collect();
            assert_eq!(popular.len(), 1, "{popular:?}");
        }
    }

    #[test]
    fn test_working_hours_have_no_link() {
        let content = SiteContent::bundled();
        let hours = content
            .contact_info
            .iter()
            .find(|info| info.title == "Working Hours")
            .unwrap();
        assert_eq!(hours.link, None);
    }

    #[test]
    fn test_technologies_truncate_after_three() {
        let p = project(&["Next.js", "TypeScript", "Stripe", "MongoDB"], "#");
        assert_eq!(p.visible_technologies(), ["Next.js", "TypeScript", "Stripe"]);
        assert_eq!(p.hidden_technology_count(), 1);

        let short = project(&["Wix"], "#");
        assert_eq!(short.visible_technologies(), ["Wix"]);
        assert_eq!(short.hidden_technology_count(), 0);
    }

    #[test]
    fn test_demo_link_requires_url() {
        assert_eq!(project(&[], "#").demo_link(), Some("#"));
        assert_eq!(project(&[], "  ").demo_link(), None);
        assert_eq!(project(&[], "").demo_link(), None);
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let json = r#"{"id": 9, "name": "Solo", "price": "₹1", "period": "project",
            "description": "", "features": [], "cta": "Go", "gradient": "blue-cyan"}"#;
        let plan: PricingPlan = serde_json::from_str(json).unwrap();
        assert!(!plan.popular);
    }
}
