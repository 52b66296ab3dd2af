use crate::models::EmojiRecord;

/// Keep the records the visibility policy allows. With `show_all` every record
/// survives; otherwise only those not explicitly hidden from the picker.
pub fn filter(records: Vec<EmojiRecord>, show_all: bool) -> Vec<EmojiRecord> {
    if show_all {
        return records;
    }
    records.into_iter().filter(EmojiRecord::is_visible).collect()
}
