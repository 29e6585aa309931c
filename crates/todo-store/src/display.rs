//! Display Model
//!
//! What the list view renders, computed from store state.

use std::fmt::Display;

use chrono::{DateTime, TimeZone, Utc};

use crate::model::{Item, ItemId};

/// One rendered row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: ItemId,
    /// Escaped text, injected as markup
    pub text_html: String,
    pub completed: bool,
    /// Locale-formatted creation time
    pub timestamp: String,
    /// Row is fading out before removal
    pub removing: bool,
}

/// Items newest first; ties go to the larger id
pub fn display_order(items: &[Item]) -> Vec<&Item> {
    let mut ordered: Vec<&Item> = items.iter().collect();
    ordered.sort_by(|a, b| b.created.cmp(&a.created).then(b.id.cmp(&a.id)));
    ordered
}

/// Format like `Jan 2, 2024, 03:04 PM` in `tz`
pub fn format_created<Tz>(created: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    created
        .with_timezone(tz)
        .format("%b %-d, %Y, %I:%M %p")
        .to_string()
}

/// Build the rows for `items` in display order
pub fn rows<Tz>(items: &[Item], pending_removal: Option<ItemId>, tz: &Tz) -> Vec<RowView>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    display_order(items)
        .into_iter()
        .map(|item| RowView {
            id: item.id,
            text_html: item.text.clone(),
            completed: item.completed,
            timestamp: format_created(&item.created, tz),
            removing: pending_removal == Some(item.id),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn make_item(id: ItemId, minute: u32) -> Item {
        Item::new(
            id,
            format!("Item {}", id),
            Utc.with_ymd_and_hms(2024, 1, 2, 15, minute, 0).unwrap(),
        )
    }

    #[test]
    fn test_display_order_newest_first() {
        let items = vec![make_item(1, 0), make_item(2, 5), make_item(3, 5), make_item(4, 1)];
        let ids: Vec<ItemId> = display_order(&items).iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![3, 2, 4, 1]);
        // Stored order is untouched
        assert_eq!(items[0].id, 1);
    }

    #[test]
    fn test_format_created() {
        let created = Utc.with_ymd_and_hms(2024, 1, 2, 15, 4, 0).unwrap();
        assert_eq!(format_created(&created, &Utc), "Jan 2, 2024, 03:04 PM");

        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        assert_eq!(format_created(&created, &tokyo), "Jan 3, 2024, 12:04 AM");
    }

    #[test]
    fn test_rows_flag_removing() {
        let items = vec![make_item(1, 0), make_item(2, 1)];
        let rows = rows(&items, Some(1), &Utc);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, 2);
        assert!(!rows[0].removing);
        assert!(rows[1].removing);
        assert_eq!(rows[1].text_html, "Item 1");
    }
}
