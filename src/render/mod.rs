//! HTML for every page the server returns. Pages are assembled as strings;
//! every piece of remote or user-supplied text goes through `text` or `attr`.

mod pages;

pub use pages::*;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::parsers::DisplayOptions;

pub const SITE_NAME: &str = "emojos";

pub(crate) fn text(s: &str) -> String {
    encode_text(s).into_owned()
}

pub(crate) fn attr(s: &str) -> String {
    encode_double_quoted_attribute(s).into_owned()
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="stylesheet" href="/static/site.css">
</head>
<body>
{body}
<footer><a href="/">{site}</a> &middot; <a href="/code">source</a></footer>
<script src="/static/copy.js"></script>
</body>
</html>
"#,
        title = text(title),
        body = body,
        site = SITE_NAME,
    )
}

fn checkbox(name: &str, label: &str, checked: bool) -> String {
    format!(
        r#"<label><input type="checkbox" name="{}"{}> {}</label>"#,
        name,
        if checked { " checked" } else { "" },
        label
    )
}

fn instance_form(domain: &str, options: DisplayOptions) -> String {
    format!(
        r#"<form method="post" action="/">
<input type="text" name="instance" placeholder="mastodon.social" value="{}" required>
{}
{}
<button type="submit">show emoji</button>
</form>"#,
        attr(domain),
        checkbox("show_all", "include emoji hidden from the picker", options.show_all),
        checkbox("show_animated", "show animated emoji", options.show_animated),
    )
}
