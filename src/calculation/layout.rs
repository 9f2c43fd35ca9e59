//! Presentation helpers for list layouts.
//!
//! These are display details only: splitting the mega-dropdown into two
//! columns and padding payslip tables so both sides line up.

/// Splits items into two columns, the first holding `ceil(n / 2)` items.
///
/// # Examples
///
/// ```
/// use idms_site::calculation::split_columns;
///
/// let (left, right) = split_columns(&[1, 2, 3, 4, 5]);
/// assert_eq!(left, &[1, 2, 3]);
/// assert_eq!(right, &[4, 5]);
/// ```
pub fn split_columns<T>(items: &[T]) -> (&[T], &[T]) {
    items.split_at(items.len().div_ceil(2))
}

/// Pads a list with `None` rows up to `len`.
///
/// Lists already at or beyond `len` are returned in full; nothing is
/// truncated.
///
/// # Examples
///
/// ```
/// use idms_site::calculation::pad_rows;
///
/// let rows = pad_rows(&["a", "b"], 4);
/// assert_eq!(rows, vec![Some(&"a"), Some(&"b"), None, None]);
/// ```
pub fn pad_rows<T>(items: &[T], len: usize) -> Vec<Option<&T>> {
    let mut rows: Vec<Option<&T>> = items.iter().map(Some).collect();
    if rows.len() < len {
        rows.resize(len, None);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_nine_products() {
        let items: Vec<u32> = (1..=9).collect();
        let (left, right) = split_columns(&items);
        assert_eq!(left.len(), 5);
        assert_eq!(right.len(), 4);
    }

    #[test]
    fn test_split_even_and_empty() {
        let (left, right) = split_columns(&[1, 2]);
        assert_eq!((left, right), (&[1][..], &[2][..]));

        let empty: [u8; 0] = [];
        let (left, right) = split_columns(&empty);
        assert!(left.is_empty() && right.is_empty());
    }

    #[test]
    fn test_pad_rows_never_truncates() {
        let rows = pad_rows(&[1, 2, 3], 2);
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(Option::is_some));
    }

    #[test]
    fn test_pad_rows_empty_list() {
        let empty: [u8; 0] = [];
        assert_eq!(pad_rows(&empty, 2), vec![None, None]);
    }
}
