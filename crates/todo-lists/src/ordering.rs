//! Display ordering for lists and todos.

/// Orders items so that those where `is_done` is false come first, followed
/// by those where it is true. Relative order inside each group is kept.
///
/// Each item is paired with its stored position so that links rendered from
/// the reordered view still address the right record.
pub fn unfinished_first<T, F>(items: &[T], is_done: F) -> Vec<(usize, &T)>
where
    F: Fn(&T) -> bool,
{
    let (done, open): (Vec<_>, Vec<_>) = items
        .iter()
        .enumerate()
        .partition(|(_, item)| is_done(*item));

    open.into_iter().chain(done).collect()
}
