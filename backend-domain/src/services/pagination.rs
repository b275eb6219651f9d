use crate::entities::{NumberedEvent, PageView, TrashEvent};

pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

/// Slices one page out of a newest-first event list.
///
/// `page` is 1-based and clamped to the available range. Rows are numbered so
/// the oldest event is 1 and the newest is `events.len()`.
pub fn paginate(events: &[TrashEvent], page: usize, page_size: usize) -> PageView {
    let page_size = page_size.max(1);
    let total_items = events.len();
    let total_pages = total_pages(total_items, page_size);
    let page = page.clamp(1, total_pages.max(1));

    let start = ((page - 1) * page_size).min(total_items);
    let end = (start + page_size).min(total_items);
    let rows = events[start..end]
        .iter()
        .enumerate()
        .map(|(i, event)| NumberedEvent {
            number: total_items - (start + i),
            event: event.clone(),
        })
        .collect();

    PageView {
        page,
        page_size,
        total_pages,
        total_items,
        has_previous: page > 1,
        has_next: page < total_pages,
        rows,
    }
}
