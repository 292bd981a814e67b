//! Repeated blocks of the page body: content sections, card grids and paragraph lists.

use yew::prelude::*;

use crate::content::{ClientLogo, ContentSection, ImagePosition, Reason, SurveyMethod};

/// Staggered animation delay (ms) of the grid item at `index`.
pub fn stagger_delay(index: usize) -> usize {
    (index + 1) * 50
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionLayout {
    pub section_class: &'static str,
    pub container_class: &'static str,
    pub image_aos: &'static str,
    pub content_aos: &'static str,
}

/// Odd sections get the gray background; right-hand images flip the row.
pub fn section_layout(index: usize, position: ImagePosition) -> SectionLayout {
    let section_class = if index % 2 == 1 {
        "content-section gray-bg"
    } else {
        "content-section"
    };
    match position {
        ImagePosition::Left => SectionLayout {
            section_class,
            container_class: "section-container",
            image_aos: "fade-right",
            content_aos: "fade-left",
        },
        ImagePosition::Right => SectionLayout {
            section_class,
            container_class: "section-container reverse",
            image_aos: "fade-left",
            content_aos: "fade-right",
        },
    }
}

#[derive(Properties, PartialEq, Clone, Debug)]
pub struct ContentSectionsProps {
    pub sections: Vec<ContentSection>,
}

#[function_component(ContentSections)]
pub fn content_sections(props: &ContentSectionsProps) -> Html {
    html! {
        <>
            {
                for props.sections.iter().enumerate()
                    .map(|(index, section)| content_section(index, section))
            }
        </>
    }
}

fn content_section(index: usize, section: &ContentSection) -> Html {
    let layout = section_layout(index, section.image_position);
    html! {
        <section class={layout.section_class}>
            <div class={layout.container_class}>
                <div data-aos={layout.image_aos} class="section-image-wrapper">
                    <img
                        src={section.image.clone()}
                        alt={section.image_alt.clone()}
                        class="section-image"
                    />
                </div>
                <div data-aos={layout.content_aos} class="section-content">
                    <h2>{ section.title.clone() }</h2>
                    { for section.content.iter().map(|p| html! { <p>{ p.clone() }</p> }) }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq, Clone, Debug)]
pub struct SurveyGridProps {
    pub methods: Vec<SurveyMethod>,
}

#[function_component(SurveyGrid)]
pub fn survey_grid(props: &SurveyGridProps) -> Html {
    let cards = props.methods.iter().enumerate().map(|(index, method)| {
        html! {
            <a
                href={method.url.clone()}
                data-aos="zoom-in"
                data-aos-delay={stagger_delay(index).to_string()}
                class="survey-card"
            >
                <div class="survey-icon">{ method.icon.clone() }</div>
                <h3>{ method.name.clone() }</h3>
            </a>
        }
    });
    html! { <>{ for cards }</> }
}

#[derive(Properties, PartialEq, Clone, Debug)]
pub struct ParagraphsProps {
    pub paragraphs: Vec<String>,
}

#[function_component(Paragraphs)]
pub fn paragraphs(props: &ParagraphsProps) -> Html {
    html! {
        <>{ for props.paragraphs.iter().map(|p| html! { <p>{ p.clone() }</p> }) }</>
    }
}

#[derive(Properties, PartialEq, Clone, Debug)]
pub struct WhyChooseGridProps {
    pub reasons: Vec<Reason>,
}

#[function_component(WhyChooseGrid)]
pub fn why_choose_grid(props: &WhyChooseGridProps) -> Html {
    let items = props.reasons.iter().enumerate().map(|(index, reason)| {
        html! {
            <div
                data-aos="fade-up"
                data-aos-delay={stagger_delay(index).to_string()}
                class="why-choose-item"
            >
                <div class="why-icon">{ reason.icon.clone() }</div>
                <h3>{ reason.title.clone() }</h3>
                <p>{ reason.description.clone() }</p>
            </div>
        }
    });
    html! { <>{ for items }</> }
}

#[derive(Properties, PartialEq, Clone, Debug)]
pub struct ClientsGridProps {
    pub logos: Vec<ClientLogo>,
}

#[function_component(ClientsGrid)]
pub fn clients_grid(props: &ClientsGridProps) -> Html {
    let logos = props.logos.iter().enumerate().map(|(index, client)| {
        html! {
            <img src={client.image.clone()} alt={client.name.clone()} data-aos="fade-up"
                data-aos-delay={stagger_delay(index).to_string()} class="client-logo" />
        }
    });
    html! { <>{ for logos }</> }
}
