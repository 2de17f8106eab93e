//! Display ordering and drag reorder
//!
//! Sounds carry a 1-based `order`. A drag gesture moves one record onto
//! another; the dragged record takes the destination's index, everything in
//! between shifts by one, and the whole list is renumbered `1..=N`.

use crate::types::{Sound, SoundId};

/// Records that occupy a slot in an ordered grid
pub trait Ordered: Clone {
    /// Identity type
    type Id: PartialEq;

    /// Identity of the record
    fn id(&self) -> &Self::Id;

    /// Current 1-based position
    fn order(&self) -> u32;

    /// Overwrite the position
    fn set_order(&mut self, order: u32);
}

impl Ordered for Sound {
    type Id = SoundId;

    fn id(&self) -> &SoundId {
        &self.id
    }

    fn order(&self) -> u32 {
        self.order
    }

    fn set_order(&mut self, order: u32) {
        self.order = order;
    }
}

/// Move `dragged` to the position held by `destination`
///
/// `items` must already be sorted by order. Returns `None` when nothing
/// changes: the two ids are equal, or either is missing from `items`.
/// Otherwise returns the new sequence with every `order` set to `index + 1`.
pub fn reorder<T: Ordered>(items: &[T], dragged: &T::Id, destination: &T::Id) -> Option<Vec<T>> {
    if dragged == destination {
        return None;
    }

    let from = items.iter().position(|item| item.id() == dragged)?;
    let to = items.iter().position(|item| item.id() == destination)?;

    let mut result = items.to_vec();
    let moved = result.remove(from);
    result.insert(to, moved);
    renumber(&mut result);

    Some(result)
}

/// Assign `order = index + 1` to every item
pub fn renumber<T: Ordered>(items: &mut [T]) {
    for (index, item) in items.iter_mut().enumerate() {
        item.set_order(index as u32 + 1);
    }
}

/// Sort by order, keeping the incoming relative order for ties
pub fn sort_by_order<T: Ordered>(items: &mut [T]) {
    items.sort_by_key(|item| item.order());
}

/// Order assigned to a record appended after `count` existing ones
pub fn next_order(count: usize) -> u32 {
    count as u32 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Tile {
        id: &'static str,
        order: u32,
    }

    impl Ordered for Tile {
        type Id = &'static str;

        fn id(&self) -> &&'static str {
            &self.id
        }

        fn order(&self) -> u32 {
            self.order
        }

        fn set_order(&mut self, order: u32) {
            self.order = order;
        }
    }

    fn tiles(ids: &[&'static str]) -> Vec<Tile> {
        ids.iter()
            .enumerate()
            .map(|(i, id)| Tile { id: *id, order: i as u32 + 1 })
            .collect()
    }

    fn ids(items: &[Tile]) -> Vec<&'static str> {
        items.iter().map(|t| t.id).collect()
    }

    #[test]
    fn drag_forward_takes_destination_index() {
        let items = tiles(&["a", "b", "c", "d"]);
        let result = reorder(&items, &"a", &"c").unwrap();
        assert_eq!(ids(&result), vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn drag_backward_takes_destination_index() {
        let items = tiles(&["a", "b", "c", "d"]);
        let result = reorder(&items, &"d", &"b").unwrap();
        assert_eq!(ids(&result), vec!["a", "d", "b", "c"]);
    }

    #[test]
    fn result_is_renumbered_densely() {
        let items = vec![
            Tile { id: "a", order: 3 },
            Tile { id: "b", order: 7 },
            Tile { id: "c", order: 40 },
        ];
        let result = reorder(&items, &"c", &"a").unwrap();
        let orders: Vec<u32> = result.iter().map(|t| t.order).collect();
        assert_eq!(orders, vec![1, 2, 3]);
        assert_eq!(ids(&result), vec!["c", "a", "b"]);
    }

    #[test]
    fn same_id_is_a_no_op() {
        let items = tiles(&["a", "b"]);
        assert!(reorder(&items, &"a", &"a").is_none());
    }

    #[test]
    fn unknown_ids_are_a_no_op() {
        let items = tiles(&["a", "b"]);
        assert!(reorder(&items, &"x", &"a").is_none());
        assert!(reorder(&items, &"a", &"x").is_none());
    }

    #[test]
    fn next_order_appends() {
        assert_eq!(next_order(0), 1);
        assert_eq!(next_order(12), 13);
    }

    #[test]
    fn sort_is_stable_for_ties() {
        let mut items = vec![
            Tile { id: "b", order: 2 },
            Tile { id: "a", order: 1 },
            Tile { id: "c", order: 2 },
        ];
        sort_by_order(&mut items);
        assert_eq!(ids(&items), vec!["a", "b", "c"]);
    }
}
