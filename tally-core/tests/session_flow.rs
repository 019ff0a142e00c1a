//! End-to-end operation sequences over a single session.

use tally_core::{Catalog, CatalogItem, Money, Op, Phase, SessionState};

fn catalog() -> Catalog {
    Catalog::from_json_str(
        r#"{"items": [
            {"id": 1, "description": "Apple", "price": 40, "suggestion": "Peanut butter goes well with apples."},
            {"id": 2, "description": "Banana", "price": 10},
            {"id": 3, "description": "Apricot", "price": 60},
            {"id": 4, "description": "Rice", "price": 50},
            {"id": 5, "description": "Milk", "price": 25.5}
        ]}"#,
    )
    .unwrap()
}

fn find<'a>(catalog: &'a Catalog, name: &str) -> &'a CatalogItem {
    catalog
        .items()
        .iter()
        .find(|i| i.description == name)
        .unwrap()
}

/// Sum the cart directly, independent of the state's own bookkeeping.
fn cart_sum(state: &SessionState) -> Money {
    Money::from_paise(
        state
            .cart()
            .iter()
            .map(|l| l.item.price.paise() * l.quantity as u64)
            .sum(),
    )
}

#[test]
fn full_shopping_session() {
    let catalog = catalog();

    let state = SessionState::new();
    assert_eq!(state.phase(), Phase::AwaitingBudget);

    // A couple of bad budgets first; each leaves the session waiting.
    for bad in ["", "abc", "0", "-5"] {
        let before = state.clone();
        assert!(state.apply(Op::SetBudget(bad.into())).is_err());
        assert_eq!(state, before);
    }

    let state = state.apply(Op::SetBudget("200".into())).unwrap();
    assert_eq!(state.budget(), Some(Money::from_rupees(200)));

    // Search, then add two apples from the visible results.
    let state = state.apply(Op::Search("Ap".into())).unwrap();
    let visible: Vec<String> = state
        .search_results(&catalog)
        .iter()
        .map(|i| i.description.clone())
        .collect();
    assert_eq!(visible, vec!["Apple", "Apricot"]);

    let apple = find(&catalog, "Apple").clone();
    let state = state
        .apply(Op::AddItem {
            item: apple,
            quantity: 2,
        })
        .unwrap();
    assert_eq!(state.spent(), Money::from_rupees(80));
    assert_eq!(state.suggestion(), "Peanut butter goes well with apples.");

    // Milk's fractional price stays exact through the total.
    let milk = find(&catalog, "Milk").clone();
    let state = state
        .apply(Op::AddItem {
            item: milk,
            quantity: 2,
        })
        .unwrap();
    assert_eq!(state.spent(), Money::from_paise(13100));

    // Review and come back; nothing but the phase moves.
    let before = state.clone();
    let state = state.apply(Op::Finalize).unwrap();
    assert_eq!(state.phase(), Phase::ReviewingFinalList);
    let state = state.apply(Op::CloseReview).unwrap();
    assert_eq!(state, before);

    // Drop the apples, spent follows.
    let state = state.apply(Op::RemoveItem(0)).unwrap();
    assert_eq!(state.spent(), Money::from_paise(5100));
    assert_eq!(state.spent(), cart_sum(&state));
}

#[test]
fn spent_tracks_cart_through_any_successful_sequence() {
    let catalog = catalog();
    let mut state = SessionState::new().apply(Op::SetBudget("1000".into())).unwrap();

    let script: Vec<Op> = vec![
        Op::AddItem {
            item: find(&catalog, "Apple").clone(),
            quantity: 3,
        },
        Op::AddItem {
            item: find(&catalog, "Banana").clone(),
            quantity: 1,
        },
        Op::RemoveItem(0),
        Op::AddItem {
            item: find(&catalog, "Rice").clone(),
            quantity: 2,
        },
        Op::AddItem {
            item: find(&catalog, "Banana").clone(),
            quantity: 5,
        },
        Op::RemoveItem(1),
        Op::RemoveItem(0),
    ];

    for op in script {
        state = state.apply(op).unwrap();
        assert_eq!(state.spent(), cart_sum(&state));
        assert!(state.spent() <= state.budget().unwrap());
    }
}

#[test]
fn boundary_admission_then_rejection() {
    let catalog = catalog();
    let state = SessionState::new().apply(Op::SetBudget("100".into())).unwrap();

    // 2 × 50 lands exactly on the budget and is accepted.
    let state = state
        .apply(Op::AddItem {
            item: find(&catalog, "Rice").clone(),
            quantity: 2,
        })
        .unwrap();
    assert_eq!(state.spent(), Money::from_rupees(100));

    // Any further positive-priced item is rejected, state untouched.
    let before = state.clone();
    let result = state.apply(Op::AddItem {
        item: find(&catalog, "Banana").clone(),
        quantity: 1,
    });
    assert!(result.is_err());
    assert_eq!(state, before);
}
