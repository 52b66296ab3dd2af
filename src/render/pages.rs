use super::{attr, instance_form, layout, text, SITE_NAME};
use crate::parsers::DisplayOptions;
use crate::pipeline::ViewModel;

pub fn index_page() -> String {
    let body = format!(
        "<h1>{}</h1>\n<p>See every custom emoji on a Mastodon-compatible instance. Click one to copy its shortcode.</p>\n{}",
        SITE_NAME,
        instance_form("", DisplayOptions::default()),
    );
    layout(SITE_NAME, &body)
}

pub fn listing_page(view: &ViewModel) -> String {
    let mut body = format!(
        "<h1>custom emoji on <a href=\"https://{}/\">{}</a></h1>\n",
        attr(&view.domain),
        text(&view.domain)
    );
    body.push_str(&instance_form(&view.domain, view.options()));
    body.push('\n');

    if view.is_empty() {
        body.push_str("<p class=\"empty\">This instance has no custom emoji to show.</p>\n");
        return layout(&format!("{} - {}", view.domain, SITE_NAME), &body);
    }

    // Table of contents only pays off with more than one category
    if view.groups.len() > 1 {
        body.push_str("<nav><ul>\n");
        for key in view.groups.keys() {
            body.push_str(&format!(
                "<li><a href=\"#{}\">{}</a></li>\n",
                attr(&key.slug()),
                text(&key.to_string())
            ));
        }
        body.push_str("</ul></nav>\n");
    }

    for group in view.groups.iter() {
        body.push_str(&format!(
            "<section id=\"{}\">\n<h2>{}</h2>\n<dl class=\"emojo\">\n",
            attr(&group.key.slug()),
            text(&group.key.to_string())
        ));
        for emoji in &group.emojis {
            let shortcode = emoji.to_string();
            body.push_str(&format!(
                "<div><dt><img src=\"{}\" alt=\"{}\" title=\"{}\" loading=\"lazy\"></dt><dd>{}</dd></div>\n",
                attr(emoji.url()),
                attr(&shortcode),
                attr(&shortcode),
                text(&shortcode)
            ));
        }
        body.push_str("</dl>\n</section>\n");
    }

    layout(&format!("{} - {}", view.domain, SITE_NAME), &body)
}

/// The instance could not be reached or did not answer with an emoji list
pub fn oh_no_page(domain: &str, reason: &str) -> String {
    let body = format!(
        "<h1>oh no</h1>\n<p class=\"error\">Something went wrong getting the emoji from <strong>{}</strong>.</p>\n<p>{}</p>\n{}",
        text(domain),
        text(reason),
        instance_form(domain, DisplayOptions::default()),
    );
    layout(&format!("oh no - {}", SITE_NAME), &body)
}

pub fn forbidden_page(domain: &str) -> String {
    let body = format!(
        "<h1>not allowed</h1>\n<p class=\"error\"><strong>{}</strong> doesn't let anonymous visitors list its custom emoji.</p>\n{}",
        text(domain),
        instance_form(domain, DisplayOptions::default()),
    );
    layout(&format!("forbidden - {}", SITE_NAME), &body)
}
