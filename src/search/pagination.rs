/// Splits `items` into consecutive pages of at most `page_size` elements,
/// the last page shorter if `items.len()` isn't a multiple of `page_size`
/// (§4.11). Grounded on the original `Paginator`/`Paginate` helper.
pub fn paginate<T>(items: &[T], page_size: usize) -> Paginate<'_, T> {
    Paginate {
        remaining: items,
        page_size: page_size.max(1),
    }
}

pub struct Paginate<'a, T> {
    remaining: &'a [T],
    page_size: usize,
}

impl<'a, T> Iterator for Paginate<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining.is_empty() {
            return None;
        }
        let take = self.page_size.min(self.remaining.len());
        let (page, rest) = self.remaining.split_at(take);
        self.remaining = rest;
        Some(page)
    }
}
