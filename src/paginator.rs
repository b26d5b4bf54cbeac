//! Paginator: page count, page clamping and window slicing.
//!
//! Pages are 1-based. A requested page is always clamped into
//! `[1, max(1, page_count)]` before slicing, so an out-of-range request
//! never produces an out-of-bounds slice.

use crate::config::EmptyPagePolicy;

/// Number of pages for `n` items. `page_size == 0` is treated as 1.
pub fn page_count(n: usize, page_size: usize, policy: EmptyPagePolicy) -> usize {
    let size = page_size.max(1);
    let pages = n.div_ceil(size);
    match policy {
        EmptyPagePolicy::ShowSinglePage => pages.max(1),
        EmptyPagePolicy::HideControls => pages,
    }
}

/// Clamp a (possibly negative or huge) page request into `[1, max(1, page_count)]`.
#[inline]
pub fn clamp_page(requested: i64, page_count: usize) -> usize {
    let upper = page_count.max(1) as i64;
    requested.clamp(1, upper) as usize
}

/// Parse a page number typed by a user. Integers that overflow `i64`
/// saturate to `i64::MIN`/`i64::MAX` so `clamp_page` can pull them to the
/// nearest bound. Non-numeric text -> None.
pub fn parse_page_number(s: &str) -> Option<i64> {
    let s = s.trim();
    if let Ok(n) = s.parse::<i64>() {
        return Some(n);
    }
    let (negative, digits) = match s.strip_prefix('-') {
        Some(d) => (true, d),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(if negative { i64::MIN } else { i64::MAX })
}

/// Slice bounds `[start, end)` of `page` within a list of `len` items.
pub fn window_bounds(len: usize, page: usize, page_size: usize) -> (usize, usize) {
    let size = page_size.max(1);
    let start = page.saturating_sub(1).saturating_mul(size).min(len);
    let end = start.saturating_add(size).min(len);
    (start, end)
}

/// Contiguous window for `page` (clamped first) over `list`.
pub fn window<T>(list: &[T], page: i64, page_size: usize, policy: EmptyPagePolicy) -> &[T] {
    let pages = page_count(list.len(), page_size, policy);
    let p = clamp_page(page, pages);
    let (start, end) = window_bounds(list.len(), p, page_size);
    &list[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_per_policy() {
        assert_eq!(page_count(0, 10, EmptyPagePolicy::ShowSinglePage), 1);
        assert_eq!(page_count(0, 10, EmptyPagePolicy::HideControls), 0);
        assert_eq!(page_count(10, 10, EmptyPagePolicy::HideControls), 1);
        assert_eq!(page_count(11, 10, EmptyPagePolicy::ShowSinglePage), 2);
        assert_eq!(page_count(3, 0, EmptyPagePolicy::ShowSinglePage), 3);
    }

    #[test]
    fn clamp_edges() {
        assert_eq!(clamp_page(-5, 3), 1);
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(i64::MAX, 3), 3);
        // ноль страниц — всё равно страница 1
        assert_eq!(clamp_page(7, 0), 1);
    }

    #[test]
    fn page_numbers_saturate_on_overflow() {
        assert_eq!(parse_page_number(" 3 "), Some(3));
        assert_eq!(parse_page_number("-2"), Some(-2));
        assert_eq!(parse_page_number("99999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_page_number("+99999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_page_number("-99999999999999999999"), Some(i64::MIN));
        assert_eq!(parse_page_number("12a"), None);
        assert_eq!(parse_page_number("-"), None);
        assert_eq!(parse_page_number(""), None);
        assert_eq!(clamp_page(parse_page_number("99999999999999999999").unwrap_or(1), 2), 2);
    }

    #[test]
    fn window_never_out_of_bounds() {
        let v: Vec<u32> = (0..5).collect();
        assert_eq!(window(&v, 1, 2, EmptyPagePolicy::ShowSinglePage), &[0, 1]);
        assert_eq!(window(&v, 3, 2, EmptyPagePolicy::ShowSinglePage), &[4]);
        assert_eq!(window(&v, 99, 2, EmptyPagePolicy::ShowSinglePage), &[4]);
        let empty: Vec<u32> = Vec::new();
        assert!(window(&empty, 4, 2, EmptyPagePolicy::HideControls).is_empty());
    }
}
