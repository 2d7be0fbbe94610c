use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Column sort that cycles ascending, descending, unsorted on repeated
/// clicks of the same column. Clicking another column starts it ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState<F> {
    active: Option<(F, SortDirection)>,
}

impl<F> Default for SortState<F> {
    fn default() -> Self {
        Self { active: None }
    }
}

impl<F: Copy + PartialEq> SortState<F> {
    pub fn field(&self) -> Option<F> {
        self.active.map(|(field, _)| field)
    }

    pub fn direction(&self) -> Option<SortDirection> {
        self.active.map(|(_, direction)| direction)
    }

    pub fn direction_for(&self, field: F) -> Option<SortDirection> {
        match self.active {
            Some((active, direction)) if active == field => Some(direction),
            _ => None,
        }
    }

    pub fn toggle(&mut self, field: F) {
        self.active = match self.active {
            Some((active, SortDirection::Asc)) if active == field => {
                Some((field, SortDirection::Desc))
            }
            Some((active, SortDirection::Desc)) if active == field => None,
            _ => Some((field, SortDirection::Asc)),
        };
    }

    pub fn clear(&mut self) {
        self.active = None;
    }

    /// Returns a sorted copy. Ties keep their original relative order, and
    /// an unsorted state returns the items as given.
    pub fn apply<T, C>(&self, items: &[T], compare: C) -> Vec<T>
    where
        T: Clone,
        C: Fn(F, &T, &T) -> Ordering,
    {
        let mut sorted = items.to_vec();
        if let Some((field, direction)) = self.active {
            sorted.sort_by(|a, b| {
                let ordering = compare(field, a, b);
                match direction {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                }
            });
        }
        sorted
    }
}

/// Header indicator for a sortable column.
pub fn sort_indicator(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Asc) => "▲",
        Some(SortDirection::Desc) => "▼",
        None => "↕",
    }
}
