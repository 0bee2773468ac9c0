pub mod bookings;
pub mod dashboard;
pub mod property_browse;
pub mod property_manage;
pub mod settings;
pub mod user_manage;

/// Route pages are one-based; `0` means no page was linked.
pub fn deep_link_page(page: usize) -> Option<usize> {
    page.checked_sub(1)
}
