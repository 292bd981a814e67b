use yew::prelude::*;

use crate::content::{Footer, FooterCompany, FooterContact, LinkGroup};

const INSTAGRAM_ICON_PATH: &str = "M12 2.163c3.204 0 3.584.012 4.85.07 3.252.148 4.771 1.691 4.919 4.919.058 1.265.069 1.645.069 4.849 0 3.205-.012 3.584-.069 4.849-.149 3.225-1.664 4.771-4.919 4.919-1.266.058-1.644.07-4.85.07-3.204 0-3.584-.012-4.849-.07-3.26-.149-4.771-1.699-4.919-4.92-.058-1.265-.07-1.644-.07-4.849 0-3.204.013-3.583.07-4.849.149-3.227 1.664-4.771 4.919-4.919 1.266-.057 1.645-.069 4.849-.069zm0-2.163c-3.259 0-3.667.014-4.947.072-4.358.2-6.78 2.618-6.98 6.98-.059 1.281-.073 1.689-.073 4.948 0 3.259.014 3.668.072 4.948.2 4.358 2.618 6.78 6.98 6.98 1.281.058 1.689.072 4.948.072 3.259 0 3.668-.014 4.948-.072 4.354-.2 6.782-2.618 6.979-6.98.059-1.28.073-1.689.073-4.948 0-3.259-.014-3.667-.072-4.947-.196-4.354-2.617-6.78-6.979-6.98-1.281-.059-1.69-.073-4.949-.073zm0 5.838c-3.403 0-6.162 2.759-6.162 6.162s2.759 6.163 6.162 6.163 6.162-2.759 6.162-6.163c0-3.403-2.759-6.162-6.162-6.162zm0 10.162c-2.209 0-4-1.79-4-4 0-2.209 1.791-4 4-4s4 1.791 4 4c0 2.21-1.791 4-4 4zm6.406-11.845c-.796 0-1.441.645-1.441 1.44s.645 1.44 1.441 1.44c.795 0 1.439-.645 1.439-1.44s-.644-1.44-1.439-1.44z";

#[derive(Properties, PartialEq, Clone, Debug)]
pub struct FooterProps {
    pub footer: Footer,
}

/// The four footer columns: company, services, company links and contact.
#[function_component(FooterSections)]
pub fn footer_sections(props: &FooterProps) -> Html {
    let footer = &props.footer;
    html! {
        <>
            { company_section(&footer.company) }
            { link_section(&footer.services) }
            { link_section(&footer.company_links) }
            { contact_section(&footer.contact) }
        </>
    }
}

fn company_section(company: &FooterCompany) -> Html {
    html! {
        <div class="footer-section">
            <h3>{ company.name.clone() }</h3>
            <p>{ company.description.clone() }</p>
            <div class="footer-logo-wrapper">
                <img
                    src={company.logo.clone()}
                    alt={format!("{} Logo", company.name)}
                    class="footer-logo"
                />
            </div>
        </div>
    }
}

fn link_section(group: &LinkGroup) -> Html {
    html! {
        <div class="footer-section">
            <h3>{ group.title.clone() }</h3>
            <ul>
                {
                    for group.links.iter().map(|link| html! {
                        <li><a href={link.url.clone()}>{ link.name.clone() }</a></li>
                    })
                }
            </ul>
        </div>
    }
}

fn contact_section(contact: &FooterContact) -> Html {
    html! {
        <div class="footer-section">
            <h3>{ contact.title.clone() }</h3>
            <p>
                { "Email: " }
                <a href={format!("mailto:{}", contact.email)} class="footer-email">
                    { contact.email.clone() }
                </a>
            </p>
            <p>{ contact.tagline.clone() }</p>
            <p class="footer-social">
                <a
                    href={contact.instagram.clone()}
                    target="_blank"
                    rel="noopener noreferrer"
                    class="footer-social-link"
                >
                    <svg width="24" height="24" viewBox="0 0 24 24" fill="currentColor">
                        <path d={INSTAGRAM_ICON_PATH} />
                    </svg>
                    <span>{ "Follow us on Instagram" }</span>
                </a>
            </p>
        </div>
    }
}
