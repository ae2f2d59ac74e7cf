#[derive(Debug, Clone, PartialEq)]
pub struct SortEntry<T> {
    pub vs: Vec<T>,
    /// Position of the entry before sorting.
    pub i: usize,
    pub barycenter: Option<f64>,
    pub weight: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SortResult<T> {
    pub vs: Vec<T>,
    pub barycenter: Option<f64>,
    pub weight: Option<f64>,
}

/// Weighted mean of neighbour positions. `None` when there is no neighbour with positive weight.
pub(crate) fn barycenter(
    neighbours: impl Iterator<Item = (usize, f64)>,
) -> (Option<f64>, Option<f64>) {
    let mut sum = 0.0;
    let mut weight = 0.0;
    for (pos, w) in neighbours {
        sum += w * pos as f64;
        weight += w;
    }
    if weight > 0.0 {
        (Some(sum / weight), Some(weight))
    } else {
        (None, None)
    }
}

/// Sorts entries by barycenter. Entries without one keep their original index; ties are broken by
/// index, preferring the rightmost entry when `bias_right` is set.
pub fn sort<T>(entries: Vec<SortEntry<T>>, bias_right: bool) -> SortResult<T> {
    let (mut sortable, mut unsortable): (Vec<_>, Vec<_>) =
        entries.into_iter().partition(|e| e.barycenter.is_some());
    // Popped from the back, so the smallest index comes out first.
    unsortable.sort_by(|a, b| b.i.cmp(&a.i));
    sortable.sort_by(|a, b| {
        let (ab, bb) = (a.barycenter.unwrap_or(0.0), b.barycenter.unwrap_or(0.0));
        ab.total_cmp(&bb).then_with(|| {
            if bias_right {
                b.i.cmp(&a.i)
            } else {
                a.i.cmp(&b.i)
            }
        })
    });

    let mut vs: Vec<T> = Vec::new();
    let mut sum = 0.0;
    let mut weight = 0.0;
    let mut index = consume_unsortable(&mut vs, &mut unsortable, 0);
    for entry in sortable {
        index += entry.vs.len();
        if let (Some(b), Some(w)) = (entry.barycenter, entry.weight) {
            sum += b * w;
            weight += w;
        }
        vs.extend(entry.vs);
        index = consume_unsortable(&mut vs, &mut unsortable, index);
    }

    let (barycenter, weight) = if weight > 0.0 {
        (Some(sum / weight), Some(weight))
    } else {
        (None, None)
    };
    SortResult {
        vs,
        barycenter,
        weight,
    }
}

fn consume_unsortable<T>(
    vs: &mut Vec<T>,
    unsortable: &mut Vec<SortEntry<T>>,
    mut index: usize,
) -> usize {
    while unsortable.last().is_some_and(|last| last.i <= index) {
        if let Some(last) = unsortable.pop() {
            vs.extend(last.vs);
            index += 1;
        }
    }
    index
}
