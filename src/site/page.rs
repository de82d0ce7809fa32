use serde::Serialize;

/// Top-level views of the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    #[default]
    Home,
    Services,
    About,
    Contact,
}

impl Page {
    /// Navigation order, as shown in the header.
    pub const ALL: [Page; 4] = [Page::Home, Page::Services, Page::About, Page::Contact];

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Services => "Services",
            Page::About => "About",
            Page::Contact => "Contact",
        }
    }

    /// Page bound to a header hotkey (`1`..=`4`).
    pub fn from_hotkey(ch: char) -> Option<Page> {
        let index = ch.to_digit(10)? as usize;
        index.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

/// One self-contained content block composed into a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    Hero,
    TrustBar,
    ServicesGrid,
    Testimonials,
    ContactForm,
    About,
}
