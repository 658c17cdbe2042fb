// Push-and-borrow, so creation methods can hand the stored record back to the
// caller without a second lookup.
pub(crate) fn appended<T>(items: &mut Vec<T>, item: T) -> &T {
    items.push(item);
    items.last().expect("push appends an element")
}
