//! Stable top down merge sort over one scratch buffer
use std::cmp::Ordering;

/// Sort `data` with `cmp`, keeping equal elements in their original order.
pub fn merge_sort_by<T, F>(data: &mut [T], mut cmp: F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    if data.len() < 2 {
        return;
    }
    let mut scratch = data.to_vec();
    sort_rec(data, &mut scratch, &mut cmp);
}

fn sort_rec<T, F>(data: &mut [T], scratch: &mut [T], cmp: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    if data.len() < 2 {
        return;
    }
    let mid = data.len() / 2;
    {
        let (data_l, data_r) = data.split_at_mut(mid);
        let (scratch_l, scratch_r) = scratch.split_at_mut(mid);
        sort_rec(data_l, scratch_l, cmp);
        sort_rec(data_r, scratch_r, cmp);
    }
    merge_halves(data, mid, scratch, cmp);
}

/// `data[..mid]` and `data[mid..]` are each sorted by `cmp`. Afterwards, all of `data` is.
///
/// On ties the element from the left half goes first. `scratch` must be at least as long as
/// `data`.
pub(crate) fn merge_halves<T, F>(data: &mut [T], mid: usize, scratch: &mut [T], cmp: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = data.len();
    assert!(mid <= len);
    assert!(scratch.len() >= len);

    let (mut i, mut j) = (0, mid);
    for slot in scratch[..len].iter_mut() {
        let take_left = j >= len || (i < mid && cmp(&data[j], &data[i]) != Ordering::Less);
        if take_left {
            *slot = data[i];
            i += 1;
        } else {
            *slot = data[j];
            j += 1;
        }
    }
    data.copy_from_slice(&scratch[..len]);
}
