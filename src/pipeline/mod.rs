//! Fetched records in, renderable view model out.
//!
//! `filter` drops what the visibility policy hides, `group_and_sort` orders the
//! survivors and buckets them by category, and `build` packages the result
//! with the display flags for the renderer. `run` chains all three.

pub mod filter;
pub mod group;
pub mod view;

pub use filter::filter;
pub use group::{group_and_sort, sort_records};
pub use view::{build, ViewModel};

use crate::models::EmojiRecord;
use crate::parsers::DisplayOptions;

pub fn run(records: Vec<EmojiRecord>, domain: &str, options: DisplayOptions) -> ViewModel {
    let visible = filter(records, options.show_all);
    let groups = group_and_sort(visible, options.show_animated);
    build(groups, domain, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryKey;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_options_list_visible_emoji_by_category() {
        let records: Vec<EmojiRecord> = serde_json::from_str(
            r#"[
                {"shortcode":"zzz","category":"sleep","url":"u1","static_url":"s1"},
                {"shortcode":"secret","category":"admin","url":"u2","static_url":"s2","visible_in_picker":false},
                {"shortcode":"blobcat","category":"blobs","url":"u3","static_url":"s3","visible_in_picker":true}
            ]"#,
        )
        .unwrap();

        let view = run(records, "example.social", DisplayOptions::default());

        let keys: Vec<_> = view.groups.keys().cloned().collect();
        assert_eq!(
            keys,
            vec![
                CategoryKey::Named("blobs".into()),
                CategoryKey::Named("sleep".into())
            ]
        );
        let urls: Vec<_> = view.groups.flatten().map(|e| e.url()).collect();
        assert_eq!(urls, vec!["s3", "s1"]);
        assert_eq!(view.domain, "example.social");
    }
}
