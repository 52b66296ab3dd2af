use crate::models::{CategoryGroups, CategoryKey, Emoji, EmojiRecord};

/// Sort by category (uncategorized first), then case-insensitive shortcode,
/// then raw shortcode so case-only duplicates land in a fixed order.
pub fn sort_records(records: &mut [EmojiRecord]) {
    records.sort_by_cached_key(|record| {
        (
            record.category.clone().unwrap_or_default(),
            record.shortcode.to_lowercase(),
            record.shortcode.clone(),
        )
    });
}

/// Sort the records and bucket them by category. Groups come out in the order
/// their first member appears in the sorted sequence, and flattening the
/// groups gives back exactly that sequence.
pub fn group_and_sort(mut records: Vec<EmojiRecord>, show_animated: bool) -> CategoryGroups {
    sort_records(&mut records);

    let mut groups = CategoryGroups::new();
    for record in &records {
        groups.push(
            CategoryKey::from_category(record.category.as_deref()),
            Emoji::from_record(record, show_animated),
        );
    }
    groups
}
