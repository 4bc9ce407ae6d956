//! Contact page: where to reach me.

use leptos::prelude::*;

use crate::components::link_list::{ContactLine, LinkList};
use crate::components::page_layout::PageLayout;
use crate::util::theme::Theme;

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

pub const CONTACT_LINES: &[ContactLine] = &[
    ContactLine {
        prefix: "Email me at",
        href: "mailto:chrisbenti.com",
        label: "chris@chrisbenti.com",
        suffix: "",
    },
    ContactLine {
        prefix: "Or check out my Twitter,",
        href: "https://twitter.com/chrisbenti",
        label: "@chrisbenti",
        suffix: "",
    },
    ContactLine {
        prefix: "If you're feeling chatty",
        href: "http://m.me/chris.bentivenga",
        label: "Messenger",
        suffix: "works",
    },
    ContactLine {
        prefix: "You can also try",
        href: "https://discordapp.com/users/361710258915246081",
        label: "chrisbenti#2337",
        suffix: "on Discord",
    },
];

#[component]
pub fn ContactPage() -> impl IntoView {
    let theme = Theme::DEFAULT;

    view! {
        <PageLayout theme=theme>
            <LinkList lines=CONTACT_LINES theme=theme/>
        </PageLayout>
    }
}
