use super::page::{Page, Section};

const HOME: &[Section] = &[
    Section::Hero,
    Section::TrustBar,
    Section::ServicesGrid,
    Section::Testimonials,
    Section::ContactForm,
];
const SERVICES: &[Section] = &[Section::ServicesGrid];
const ABOUT: &[Section] = &[Section::About];
const CONTACT: &[Section] = &[Section::ContactForm];

/// Ordered sections for a page. Pure and total over [`Page`].
pub fn compose(page: Page) -> &'static [Section] {
    match page {
        Page::Home => HOME,
        Page::Services => SERVICES,
        Page::About => ABOUT,
        Page::Contact => CONTACT,
    }
}

/// Whether the contact form is mounted on `page`.
pub fn contains_contact_form(page: Page) -> bool {
    compose(page).contains(&Section::ContactForm)
}
