//! Content hydration: turns the content document into the page's mount point contents.
//!
//! [`render`] is pure and builds every write up front; [`hydrate`] checks that the
//! skeleton has all of its mount points and only then applies the writes. A region
//! whose record is missing or malformed is blanked instead of aborting the page.

use log::{debug, warn};
use thiserror::Error;

use crate::components::footer::FooterProps;
use crate::components::navigation::NavLinksProps;
use crate::components::sections::{
    ClientsGridProps, ContentSectionsProps, ParagraphsProps, SurveyGridProps, WhyChooseGridProps,
};
use crate::content::{
    About, Clients, ContentDocument, ContentSection, Footer, Hero, NavigationContent, Region,
    RegionError, SurveyMethods, WhyChooseUs,
};

/// Named anchor in the page skeleton. The hydrator never creates these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MountPoint {
    NavLogo,
    NavCompanyName,
    NavLinks,
    MobileNavLinks,
    HeroTitle,
    HeroDescription,
    HeroPrimaryCta,
    HeroSecondaryCta,
    ContentSections,
    SurveyTitle,
    SurveySubtitle,
    SurveyGrid,
    AboutTitle,
    AboutParagraphs,
    AboutCta,
    WhyChooseTitle,
    WhyChooseGrid,
    ClientsTitle,
    ClientsGrid,
    FooterContainer,
    FooterCopyright,
}

impl MountPoint {
    pub const ALL: [MountPoint; 21] = [
        MountPoint::NavLogo,
        MountPoint::NavCompanyName,
        MountPoint::NavLinks,
        MountPoint::MobileNavLinks,
        MountPoint::HeroTitle,
        MountPoint::HeroDescription,
        MountPoint::HeroPrimaryCta,
        MountPoint::HeroSecondaryCta,
        MountPoint::ContentSections,
        MountPoint::SurveyTitle,
        MountPoint::SurveySubtitle,
        MountPoint::SurveyGrid,
        MountPoint::AboutTitle,
        MountPoint::AboutParagraphs,
        MountPoint::AboutCta,
        MountPoint::WhyChooseTitle,
        MountPoint::WhyChooseGrid,
        MountPoint::ClientsTitle,
        MountPoint::ClientsGrid,
        MountPoint::FooterContainer,
        MountPoint::FooterCopyright,
    ];

    pub fn id(self) -> &'static str {
        match self {
            MountPoint::NavLogo => "nav-logo",
            MountPoint::NavCompanyName => "nav-company-name",
            MountPoint::NavLinks => "nav-links",
            MountPoint::MobileNavLinks => "mobile-nav-links",
            MountPoint::HeroTitle => "hero-title",
            MountPoint::HeroDescription => "hero-description",
            MountPoint::HeroPrimaryCta => "hero-primary-cta",
            MountPoint::HeroSecondaryCta => "hero-secondary-cta",
            MountPoint::ContentSections => "content-sections-container",
            MountPoint::SurveyTitle => "survey-title",
            MountPoint::SurveySubtitle => "survey-subtitle",
            MountPoint::SurveyGrid => "survey-grid",
            MountPoint::AboutTitle => "about-title",
            MountPoint::AboutParagraphs => "about-paragraphs",
            MountPoint::AboutCta => "about-cta",
            MountPoint::WhyChooseTitle => "why-choose-title",
            MountPoint::WhyChooseGrid => "why-choose-grid",
            MountPoint::ClientsTitle => "clients-title",
            MountPoint::ClientsGrid => "clients-grid",
            MountPoint::FooterContainer => "footer-container",
            MountPoint::FooterCopyright => "footer-copyright",
        }
    }

    pub fn region(self) -> Region {
        match self {
            MountPoint::NavLogo
            | MountPoint::NavCompanyName
            | MountPoint::NavLinks
            | MountPoint::MobileNavLinks => Region::Navigation,
            MountPoint::HeroTitle
            | MountPoint::HeroDescription
            | MountPoint::HeroPrimaryCta
            | MountPoint::HeroSecondaryCta => Region::Hero,
            MountPoint::ContentSections => Region::ContentSections,
            MountPoint::SurveyTitle | MountPoint::SurveySubtitle | MountPoint::SurveyGrid => {
                Region::SurveyMethods
            }
            MountPoint::AboutTitle | MountPoint::AboutParagraphs | MountPoint::AboutCta => {
                Region::About
            }
            MountPoint::WhyChooseTitle | MountPoint::WhyChooseGrid => Region::WhyChooseUs,
            MountPoint::ClientsTitle | MountPoint::ClientsGrid => Region::Clients,
            MountPoint::FooterContainer | MountPoint::FooterCopyright => Region::Footer,
        }
    }

    /// What an unusable region leaves behind in this mount point.
    fn blank(self) -> Fill {
        match self {
            MountPoint::NavLinks
            | MountPoint::MobileNavLinks
            | MountPoint::ContentSections
            | MountPoint::SurveyGrid
            | MountPoint::AboutParagraphs
            | MountPoint::WhyChooseGrid
            | MountPoint::ClientsGrid
            | MountPoint::FooterContainer => Fill::Clear,
            _ => Fill::Text(String::new()),
        }
    }
}


/// A container region's component together with the props it renders from.
#[derive(Debug, Clone, PartialEq)]
pub enum RegionView {
    DesktopNav(NavLinksProps),
    MobileNav(NavLinksProps),
    ContentSections(ContentSectionsProps),
    SurveyGrid(SurveyGridProps),
    AboutParagraphs(ParagraphsProps),
    WhyChooseGrid(WhyChooseGridProps),
    ClientsGrid(ClientsGridProps),
    Footer(FooterProps),
}

/// One write into a mount point. Every variant replaces what was there before.
#[derive(Debug, Clone, PartialEq)]
pub enum Fill {
    Text(String),
    Link { text: String, href: String },
    View(RegionView),
    Clear,
}

/// Access to the page skeleton's mount points, looked up by element id.
pub trait MountRoot {
    fn has_mount(&self, id: &str) -> bool;
    fn fill(&mut self, id: &'static str, fill: &Fill) -> Result<(), HydrationError>;
}

#[derive(Debug, Error)]
pub enum HydrationError {
    #[error("mount point `#{0}` is missing from the page")]
    MissingMountPoint(&'static str),
    #[error("failed to write `#{id}`: {reason}")]
    Dom { id: &'static str, reason: String },
}

pub type RegionWrites = Vec<(MountPoint, Fill)>;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct HydrationReport {
    pub rendered: Vec<Region>,
    pub skipped: Vec<RegionError>,
}

impl HydrationReport {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Builds the writes for every region without touching the page.
pub fn render(document: &ContentDocument) -> Vec<(Region, Result<RegionWrites, RegionError>)> {
    Region::ALL
        .iter()
        .map(|&region| {
            let writes = match region {
                Region::Navigation => document.navigation().map(render_navigation),
                Region::Hero => document.hero().map(render_hero),
                Region::ContentSections => document.content_sections().map(render_content_sections),
                Region::SurveyMethods => document.survey_methods().map(render_survey_methods),
                Region::About => document.about().map(render_about),
                Region::WhyChooseUs => document.why_choose_us().map(render_why_choose_us),
                Region::Clients => document.clients().map(render_clients),
                Region::Footer => document.footer().map(render_footer),
            };
            (region, writes)
        })
        .collect()
}

/// Populates every mount point from `document`.
///
/// Fails before any write if a mount point is missing. Regions that cannot be
/// decoded are blanked, logged, and listed in the report.
pub fn hydrate<M>(
    mounts: &mut M,
    document: &ContentDocument,
) -> Result<HydrationReport, HydrationError>
where
    M: MountRoot + ?Sized,
{
    if let Some(missing) = MountPoint::ALL.iter().find(|mount| !mounts.has_mount(mount.id())) {
        return Err(HydrationError::MissingMountPoint(missing.id()));
    }

    let mut report = HydrationReport::default();
    for (region, writes) in render(document) {
        match writes {
            Ok(writes) => {
                for (mount, fill) in &writes {
                    mounts.fill(mount.id(), fill)?;
                }
                debug!("Hydrated {} ({} mount points)", region, writes.len());
                report.rendered.push(region);
            }
            Err(err) => {
                warn!("Skipping {}: {}", region, err.reason);
                for mount in MountPoint::ALL.iter().filter(|mount| mount.region() == region) {
                    mounts.fill(mount.id(), &mount.blank())?;
                }
                report.skipped.push(err);
            }
        }
    }
    Ok(report)
}

fn text(value: String) -> Fill {
    Fill::Text(value)
}

fn link(text: String, href: String) -> Fill {
    Fill::Link { text, href }
}

fn render_navigation(nav: NavigationContent) -> RegionWrites {
    let links = NavLinksProps { items: nav.items };
    vec![
        (MountPoint::NavLogo, text(nav.site.logo)),
        (MountPoint::NavCompanyName, text(nav.site.name)),
        (MountPoint::NavLinks, Fill::View(RegionView::DesktopNav(links.clone()))),
        (MountPoint::MobileNavLinks, Fill::View(RegionView::MobileNav(links))),
    ]
}

fn render_hero(hero: Hero) -> RegionWrites {
    vec![
        (MountPoint::HeroTitle, text(hero.title)),
        (MountPoint::HeroDescription, text(hero.description)),
        (
            MountPoint::HeroPrimaryCta,
            link(hero.primary_cta.text, hero.primary_cta.url),
        ),
        (
            MountPoint::HeroSecondaryCta,
            link(hero.secondary_cta.text, hero.secondary_cta.url),
        ),
    ]
}

fn render_content_sections(sections: Vec<ContentSection>) -> RegionWrites {
    vec![(
        MountPoint::ContentSections,
        Fill::View(RegionView::ContentSections(ContentSectionsProps { sections })),
    )]
}

fn render_survey_methods(survey: SurveyMethods) -> RegionWrites {
    vec![
        (MountPoint::SurveyTitle, text(survey.title)),
        (MountPoint::SurveySubtitle, text(survey.subtitle)),
        (
            MountPoint::SurveyGrid,
            Fill::View(RegionView::SurveyGrid(SurveyGridProps {
                methods: survey.methods,
            })),
        ),
    ]
}

fn render_about(about: About) -> RegionWrites {
    vec![
        (MountPoint::AboutTitle, text(about.title)),
        (
            MountPoint::AboutParagraphs,
            Fill::View(RegionView::AboutParagraphs(ParagraphsProps {
                paragraphs: about.content,
            })),
        ),
        (MountPoint::AboutCta, link(about.cta_text, about.cta_url)),
    ]
}

fn render_why_choose_us(why: WhyChooseUs) -> RegionWrites {
    vec![
        (MountPoint::WhyChooseTitle, text(why.title)),
        (
            MountPoint::WhyChooseGrid,
            Fill::View(RegionView::WhyChooseGrid(WhyChooseGridProps {
                reasons: why.reasons,
            })),
        ),
    ]
}

fn render_clients(clients: Clients) -> RegionWrites {
    vec![
        (MountPoint::ClientsTitle, text(clients.title)),
        (
            MountPoint::ClientsGrid,
            Fill::View(RegionView::ClientsGrid(ClientsGridProps {
                logos: clients.logos,
            })),
        ),
    ]
}

fn render_footer(footer: Footer) -> RegionWrites {
    let copyright = footer.copyright.clone();
    vec![
        (
            MountPoint::FooterContainer,
            Fill::View(RegionView::Footer(FooterProps { footer })),
        ),
        (MountPoint::FooterCopyright, text(copyright)),
    ]
}
