use super::errors::CartError;
use super::model::{CartItemPayload, CartState, LineItem};
use super::value_objects::{ProductId, Quantity};

/// A state transition on a cart.
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Replace the cart with items loaded from storage.
    Load(Vec<LineItem>),
    Reset,
    /// Merge `count` units of `item` into the cart.
    Add { item: CartItemPayload, count: i64 },
    Remove { id: ProductId },
    /// Set the count of an existing entry.
    ChangeCount { id: ProductId, count: i64 },
}

/// Computes the next cart state. Never touches storage.
///
/// Totals of the returned state are recomputed from its full item list.
/// Invalid counts are rejected and leave `state` as it was.
pub fn reduce(state: &CartState, action: CartAction) -> Result<CartState, CartError> {
    let items = match action {
        CartAction::Load(items) => items,
        CartAction::Reset => Vec::new(),
        CartAction::Add { item, count } => add_item(state.items(), item, Quantity::new(count)?)?,
        CartAction::Remove { id } => state
            .items()
            .iter()
            .filter(|entry| entry.id != id)
            .cloned()
            .collect(),
        CartAction::ChangeCount { id, count } => {
            let quantity = Quantity::new(count)?;
            state
                .items()
                .iter()
                .map(|entry| {
                    if entry.id == id {
                        LineItem {
                            count: quantity.get(),
                            ..entry.clone()
                        }
                    } else {
                        entry.clone()
                    }
                })
                .collect()
        }
    };

    Ok(CartState::from_items(items))
}

fn add_item(
    items: &[LineItem],
    payload: CartItemPayload,
    quantity: Quantity,
) -> Result<Vec<LineItem>, CartError> {
    let mut updated = items.to_vec();

    // Existing entries keep their own fields; only the count grows.
    match updated.iter_mut().find(|entry| entry.id == payload.id) {
        Some(existing) => {
            existing.count = existing
                .count
                .checked_add(quantity.get())
                .ok_or(CartError::CountOverflow)?;
        }
        None => updated.push(LineItem::new(payload, quantity)),
    }

    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn payload(id: &str, price: u64) -> CartItemPayload {
        CartItemPayload {
            id: ProductId::new(id),
            title: format!("Product {id}"),
            price,
            description: None,
            category_id: None,
            image: None,
        }
    }

    fn add(state: &CartState, id: &str, price: u64, count: i64) -> CartState {
        reduce(
            state,
            CartAction::Add {
                item: payload(id, price),
                count,
            },
        )
        .unwrap()
    }

    #[test]
    fn should_follow_add_merge_change_remove_scenario() {
        let state = add(&CartState::empty(), "p1", 1000, 2);
        assert_eq!(state.len(), 1);
        assert_eq!(state.items()[0].count, 2);
        assert_eq!(state.total_count(), 2);
        assert_eq!(state.total_price(), 2000);

        let state = add(&state, "p1", 1000, 3);
        assert_eq!(state.len(), 1);
        assert_eq!(state.items()[0].count, 5);
        assert_eq!(state.total_price(), 5000);

        let state = reduce(
            &state,
            CartAction::ChangeCount {
                id: ProductId::new("p1"),
                count: 1,
            },
        )
        .unwrap();
        assert_eq!(state.items()[0].count, 1);
        assert_eq!(state.total_price(), 1000);

        let state = reduce(
            &state,
            CartAction::Remove {
                id: ProductId::new("p1"),
            },
        )
        .unwrap();
        assert!(state.is_empty());
        assert_eq!(state.total_count(), 0);
        assert_eq!(state.total_price(), 0);
    }

    #[test]
    fn should_append_new_items_in_order() {
        let state = add(&CartState::empty(), "p1", 10, 1);
        let state = add(&state, "p2", 20, 1);
        let state = add(&state, "p3", 30, 1);

        let ids: Vec<&str> = state.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2", "p3"]);
    }

    #[test]
    fn should_keep_existing_fields_when_merging() {
        let state = add(&CartState::empty(), "p1", 1000, 1);

        let mut changed = payload("p1", 9999);
        changed.title = "Renamed".to_string();
        let state = reduce(
            &state,
            CartAction::Add {
                item: changed,
                count: 2,
            },
        )
        .unwrap();

        let item = &state.items()[0];
        assert_eq!(item.title, "Product p1");
        assert_eq!(item.price, 1000);
        assert_eq!(item.count, 3);
    }

    #[test]
    fn should_ignore_removal_of_unknown_id() {
        let state = add(&CartState::empty(), "p1", 1000, 2);

        let next = reduce(
            &state,
            CartAction::Remove {
                id: ProductId::new("ghost"),
            },
        )
        .unwrap();

        assert_eq!(next, state);
    }

    #[test]
    fn should_leave_items_unchanged_when_changing_unknown_id() {
        let state = add(&CartState::empty(), "p1", 1000, 2);

        let next = reduce(
            &state,
            CartAction::ChangeCount {
                id: ProductId::new("ghost"),
                count: 4,
            },
        )
        .unwrap();

        assert_eq!(next, state);
    }

    #[test]
    fn should_reject_zero_and_negative_counts() {
        let state = add(&CartState::empty(), "p1", 1000, 2);

        for count in [0, -1] {
            let change = reduce(
                &state,
                CartAction::ChangeCount {
                    id: ProductId::new("p1"),
                    count,
                },
            );
            assert_eq!(change, Err(CartError::InvalidCount(count)));

            let added = reduce(
                &state,
                CartAction::Add {
                    item: payload("p2", 10),
                    count,
                },
            );
            assert_eq!(added, Err(CartError::InvalidCount(count)));
        }
    }

    #[test]
    fn should_reject_count_overflow_on_merge() {
        let state = add(&CartState::empty(), "p1", 1, i64::from(u32::MAX));

        let result = reduce(
            &state,
            CartAction::Add {
                item: payload("p1", 1),
                count: 1,
            },
        );

        assert_eq!(result, Err(CartError::CountOverflow));
    }

    #[test]
    fn should_empty_cart_on_reset() {
        let state = add(&CartState::empty(), "p1", 1000, 2);

        let next = reduce(&state, CartAction::Reset).unwrap();

        assert_eq!(next, CartState::empty());
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(usize, u64, i64),
        Remove(usize),
        Change(usize, i64),
    }

    const IDS: [&str; 4] = ["p1", "p2", "p3", "p4"];

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0..IDS.len(), 0u64..10_000, 1i64..50).prop_map(|(i, p, c)| Op::Add(i, p, c)),
            (0..IDS.len()).prop_map(Op::Remove),
            (0..IDS.len(), 1i64..50).prop_map(|(i, c)| Op::Change(i, c)),
        ]
    }

    proptest! {
        #[test]
        fn totals_always_match_items(ops in proptest::collection::vec(op_strategy(), 0..40)) {
            let mut state = CartState::empty();
            for op in ops {
                let action = match op {
                    Op::Add(i, price, count) => CartAction::Add { item: payload(IDS[i], price), count },
                    Op::Remove(i) => CartAction::Remove { id: ProductId::new(IDS[i]) },
                    Op::Change(i, count) => CartAction::ChangeCount { id: ProductId::new(IDS[i]), count },
                };
                state = reduce(&state, action).unwrap();

                let count: u64 = state.items().iter().map(|i| u64::from(i.count)).sum();
                let price: u64 = state.items().iter().map(|i| i.price * u64::from(i.count)).sum();
                prop_assert_eq!(state.total_count(), count);
                prop_assert_eq!(state.total_price(), price);

                let mut ids: Vec<&str> = state.items().iter().map(|i| i.id.as_str()).collect();
                ids.sort_unstable();
                ids.dedup();
                prop_assert_eq!(ids.len(), state.len());
                prop_assert!(state.items().iter().all(|i| i.count >= 1));
            }
        }
    }
}
