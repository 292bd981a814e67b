use std::fmt;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Top-level region of the content document. Each region owns its own mount points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Navigation,
    Hero,
    ContentSections,
    SurveyMethods,
    About,
    WhyChooseUs,
    Clients,
    Footer,
}

impl Region {
    pub const ALL: [Region; 8] = [
        Region::Navigation,
        Region::Hero,
        Region::ContentSections,
        Region::SurveyMethods,
        Region::About,
        Region::WhyChooseUs,
        Region::Clients,
        Region::Footer,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Region::Navigation => "navigation",
            Region::Hero => "hero",
            Region::ContentSections => "contentSections",
            Region::SurveyMethods => "surveyMethods",
            Region::About => "about",
            Region::WhyChooseUs => "whyChooseUs",
            Region::Clients => "clients",
            Region::Footer => "footer",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("content document must be a JSON object")]
    NotAnObject,
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("region `{region}` is unusable: {reason}")]
pub struct RegionError {
    pub region: Region,
    pub reason: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Site {
    pub logo: String,
    pub name: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PageLink {
    pub name: String,
    pub url: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    pub name: String,
    pub url: String,
    /// Absent and `null` both mean a plain link.
    #[serde(default)]
    pub has_dropdown: Option<bool>,
    #[serde(default)]
    pub subpages: Option<Vec<PageLink>>,
}

impl NavItem {
    /// Only items flagged as dropdowns that actually carry subpages expand.
    pub fn dropdown(&self) -> Option<&[PageLink]> {
        match (self.has_dropdown, self.subpages.as_deref()) {
            (Some(true), Some(subpages)) if !subpages.is_empty() => Some(subpages),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavigationContent {
    pub site: Site,
    pub items: Vec<NavItem>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct CallToAction {
    pub text: String,
    pub url: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Hero {
    pub title: String,
    pub description: String,
    #[serde(rename = "primaryCTA")]
    pub primary_cta: CallToAction,
    #[serde(rename = "secondaryCTA")]
    pub secondary_cta: CallToAction,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ImagePosition {
    Left,
    Right,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContentSection {
    pub title: String,
    pub content: Vec<String>,
    pub image: String,
    pub image_alt: String,
    pub image_position: ImagePosition,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SurveyMethod {
    pub icon: String,
    pub name: String,
    pub url: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SurveyMethods {
    pub title: String,
    pub subtitle: String,
    pub methods: Vec<SurveyMethod>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct About {
    pub title: String,
    pub content: Vec<String>,
    pub cta_text: String,
    pub cta_url: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Reason {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct WhyChooseUs {
    pub title: String,
    pub reasons: Vec<Reason>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ClientLogo {
    pub image: String,
    pub name: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Clients {
    pub title: String,
    pub logos: Vec<ClientLogo>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct FooterCompany {
    pub name: String,
    pub description: String,
    pub logo: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct LinkGroup {
    pub title: String,
    pub links: Vec<PageLink>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct FooterContact {
    pub title: String,
    pub email: String,
    pub tagline: String,
    pub instagram: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Footer {
    pub company: FooterCompany,
    pub services: LinkGroup,
    pub company_links: LinkGroup,
    pub contact: FooterContact,
    pub copyright: String,
}

/// The fetched content document.
///
/// Regions stay untyped until a hydrator helper asks for one, so a broken
/// region only costs that region.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentDocument {
    regions: Map<String, Value>,
}

impl ContentDocument {
    pub fn parse(text: &str) -> Result<Self, ContentError> {
        match serde_json::from_str::<Value>(text)? {
            Value::Object(regions) => Ok(Self { regions }),
            _ => Err(ContentError::NotAnObject),
        }
    }

    fn field<T: DeserializeOwned>(&self, region: Region, key: &str) -> Result<T, RegionError> {
        let value = self.regions.get(key).ok_or_else(|| RegionError {
            region,
            reason: format!("missing `{}`", key),
        })?;
        T::deserialize(value).map_err(|e| RegionError {
            region,
            reason: format!("`{}`: {}", key, e),
        })
    }

    pub fn navigation(&self) -> Result<NavigationContent, RegionError> {
        Ok(NavigationContent {
            site: self.field(Region::Navigation, "site")?,
            items: self.field(Region::Navigation, "navigation")?,
        })
    }

    pub fn hero(&self) -> Result<Hero, RegionError> {
        self.field(Region::Hero, Region::Hero.key())
    }

    pub fn content_sections(&self) -> Result<Vec<ContentSection>, RegionError> {
        self.field(Region::ContentSections, Region::ContentSections.key())
    }

    pub fn survey_methods(&self) -> Result<SurveyMethods, RegionError> {
        self.field(Region::SurveyMethods, Region::SurveyMethods.key())
    }

    pub fn about(&self) -> Result<About, RegionError> {
        self.field(Region::About, Region::About.key())
    }

    pub fn why_choose_us(&self) -> Result<WhyChooseUs, RegionError> {
        self.field(Region::WhyChooseUs, Region::WhyChooseUs.key())
    }

    pub fn clients(&self) -> Result<Clients, RegionError> {
        self.field(Region::Clients, Region::Clients.key())
    }

    pub fn footer(&self) -> Result<Footer, RegionError> {
        self.field(Region::Footer, Region::Footer.key())
    }
}

#[cfg(test)]
pub(crate) const SAMPLE_CONTENT: &str = include_str!("../static/content.json");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_document_decodes_every_region() {
        let doc = ContentDocument::parse(SAMPLE_CONTENT).unwrap();
        let nav = doc.navigation().unwrap();
        assert!(!nav.items.is_empty());
        assert!(doc.hero().is_ok());
        assert!(doc.content_sections().is_ok());
        assert!(doc.survey_methods().is_ok());
        assert!(doc.about().is_ok());
        assert!(doc.why_choose_us().is_ok());
        assert!(doc.clients().is_ok());
        assert!(doc.footer().is_ok());
    }

    #[test]
    fn rejects_non_object_documents() {
        assert!(matches!(ContentDocument::parse("[1, 2]"), Err(ContentError::NotAnObject)));
        assert!(matches!(ContentDocument::parse("<html>"), Err(ContentError::Parse(_))));
    }

    #[test]
    fn missing_region_names_the_region() {
        let doc = ContentDocument::parse(r#"{"hero": {"title": "x"}}"#).unwrap();
        let err = doc.clients().unwrap_err();
        assert_eq!(err.region, Region::Clients);
        assert_eq!(err.reason, "missing `clients`");

        let err = doc.hero().unwrap_err();
        assert_eq!(err.region, Region::Hero);
        assert!(err.reason.contains("description"), "{}", err.reason);
    }

    #[test]
    fn navigation_needs_site_and_items() {
        let doc = ContentDocument::parse(r#"{"navigation": []}"#).unwrap();
        let err = doc.navigation().unwrap_err();
        assert_eq!(err.region, Region::Navigation);
        assert_eq!(err.reason, "missing `site`");
    }

    #[test]
    fn unknown_image_position_is_malformed() {
        let doc = ContentDocument::parse(
            r#"{"contentSections": [{"title": "t", "content": [], "image": "a.jpg",
                "imageAlt": "a", "imagePosition": "center"}]}"#,
        )
        .unwrap();
        assert!(doc.content_sections().is_err());
    }

    #[test]
    fn dropdown_requires_flag_and_subpages() {
        let item: NavItem =
            serde_json::from_str(r#"{"name": "A", "url": "/a", "hasDropdown": true}"#).unwrap();
        assert_eq!(item.dropdown(), None);

        let item: NavItem = serde_json::from_str(
            r#"{"name": "A", "url": "/a", "subpages": [{"name": "B", "url": "/b"}]}"#,
        )
        .unwrap();
        assert_eq!(item.dropdown(), None);

        let item: NavItem = serde_json::from_str(
            r#"{"name": "A", "url": "/a", "hasDropdown": true, "subpages": [{"name": "B", "url": "/b"}]}"#,
        )
        .unwrap();
        assert_eq!(item.dropdown().map(|s| s.len()), Some(1));
    }

    #[test]
    fn null_dropdown_fields_mean_a_plain_link() {
        let doc = ContentDocument::parse(
            r#"{"site": {"logo": "S", "name": "N"},
                "navigation": [{"name": "Home", "url": "/", "hasDropdown": null, "subpages": null},
                               {"name": "About", "url": "/about", "hasDropdown": true, "subpages": null}]}"#,
        )
        .unwrap();
        let nav = doc.navigation().unwrap();
        assert_eq!(nav.site.name, "N");
        assert_eq!(nav.items.len(), 2);
        assert!(nav.items.iter().all(|item| item.dropdown().is_none()));
    }
}
