//! Sentence-per-row list of labeled external links.

use leptos::prelude::*;

use crate::components::page_layout::HoverLink;
use crate::util::theme::Theme;

#[cfg(test)]
#[path = "link_list_test.rs"]
mod link_list_test;

/// One row: `prefix`, then the link, then `suffix`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactLine {
    pub prefix: &'static str,
    pub href: &'static str,
    pub label: &'static str,
    pub suffix: &'static str,
}

impl ContactLine {
    /// Row text as read aloud, e.g. `"Or check out my Twitter, @chrisbenti"`.
    pub fn plain_text(&self) -> String {
        let mut text = format!("{} {}", self.prefix, self.label);
        if !self.suffix.is_empty() {
            text.push(' ');
            text.push_str(self.suffix);
        }
        text
    }
}

#[component]
pub fn LinkList(lines: &'static [ContactLine], theme: Theme) -> impl IntoView {
    lines
        .iter()
        .map(|line| {
            let suffix = (!line.suffix.is_empty()).then(|| format!(" {}", line.suffix));
            view! {
                <div class="link-list__row">
                    {format!("{} ", line.prefix)}
                    <HoverLink href=line.href label=line.label theme=theme/>
                    {suffix}
                </div>
            }
        })
        .collect_view()
}
