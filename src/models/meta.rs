pub const KEY_LAST_CHECKOUT_ID: &str = "last_checkout_id";
pub const KEY_CURRENT_SHEET: &str = "current_sheet";
pub const KEY_LAST_SHEET: &str = "last_sheet";

pub const DEFAULT_SHEET: &str = "main";

/// Snapshot of the `meta` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meta {
    pub last_checkout_id: i64,
    pub current_sheet: String,
    pub last_sheet: String,
}

impl Default for Meta {
    fn default() -> Self {
        Self {
            last_checkout_id: 0,
            current_sheet: DEFAULT_SHEET.to_string(),
            last_sheet: DEFAULT_SHEET.to_string(),
        }
    }
}

impl Meta {
    /// Rows seeded on store creation, in insertion order.
    pub fn seed_rows() -> [(&'static str, String); 3] {
        let m = Self::default();
        [
            (KEY_LAST_CHECKOUT_ID, m.last_checkout_id.to_string()),
            (KEY_CURRENT_SHEET, m.current_sheet),
            (KEY_LAST_SHEET, m.last_sheet),
        ]
    }
}
