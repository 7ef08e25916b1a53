//! Property tests for the decision store.

use std::sync::Arc;

use proptest::prelude::*;
use tokio::runtime::Runtime;

use decision_journal::adapters::InMemoryKeyValueStorage;
use decision_journal::application::{DecisionStore, DEFAULT_STORAGE_KEY};
use decision_journal::domain::foundation::DecisionId;
use decision_journal::domain::journal::{ArgumentKind, Decision, DecisionPatch, JournalError};

fn runtime() -> Runtime {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
}

fn title() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z ]{0,20}"
}

fn outcome_label() -> impl Strategy<Value = String> {
    "[A-Za-z]{1,8}"
}

proptest! {
    #[test]
    fn creates_are_counted_newest_first(titles in prop::collection::vec(title(), 0..12)) {
        runtime().block_on(async {
            let storage = InMemoryKeyValueStorage::new();
            let mut store = DecisionStore::open(Arc::new(storage), DEFAULT_STORAGE_KEY).await;

            let mut ids = Vec::new();
            for title in &titles {
                let draft = Decision::titled(title.clone());
                ids.push(*draft.id());
                prop_assert!(store.create(draft).await);
            }

            prop_assert_eq!(store.len(), titles.len());
            ids.reverse();
            let stored: Vec<DecisionId> = store.decisions().iter().map(|d| *d.id()).collect();
            prop_assert_eq!(stored, ids);
            Ok(())
        })?;
    }

    #[test]
    fn blank_titles_never_create(blank in "[ \t]{0,6}") {
        runtime().block_on(async {
            let storage = InMemoryKeyValueStorage::new();
            let mut store = DecisionStore::open(Arc::new(storage.clone()), DEFAULT_STORAGE_KEY).await;

            prop_assert!(!store.create(Decision::titled(blank)).await);
            prop_assert!(store.is_empty());
            prop_assert_eq!(storage.write_count(), 0);
            Ok(())
        })?;
    }

    #[test]
    fn chosen_option_accepted_iff_listed(
        outcomes in prop::collection::vec(outcome_label(), 0..5),
        choice in prop_oneof![Just(String::new()), outcome_label()],
    ) {
        runtime().block_on(async {
            let storage = InMemoryKeyValueStorage::new();
            let mut store = DecisionStore::open(Arc::new(storage), DEFAULT_STORAGE_KEY).await;

            let mut draft = Decision::titled("Property");
            draft.add_argument(ArgumentKind::Pro, "Reason");
            for outcome in &outcomes {
                draft.add_outcome(outcome);
            }
            let id = *draft.id();
            store.create(draft).await;
            let before = store.get(&id).cloned().unwrap();

            let result = store
                .apply_partial_update(&id, DecisionPatch::new().chosen_option(choice.clone()))
                .await;

            let listed = choice.is_empty() || outcomes.contains(&choice);
            if listed {
                prop_assert_eq!(result, Ok(true));
                prop_assert_eq!(store.get(&id).unwrap().chosen_option(), choice.as_str());
            } else {
                prop_assert_eq!(
                    result,
                    Err(JournalError::OutcomeNotAllowed { chosen: choice.clone(), allowed: outcomes.clone() })
                );
                prop_assert_eq!(store.get(&id).cloned().unwrap(), before);
            }
            Ok(())
        })?;
    }

    #[test]
    fn finalize_completes_iff_chosen(choose in any::<bool>()) {
        runtime().block_on(async {
            let storage = InMemoryKeyValueStorage::new();
            let mut store = DecisionStore::open(Arc::new(storage), DEFAULT_STORAGE_KEY).await;

            let mut draft = Decision::titled("Finalize me");
            draft.add_outcome("Only");
            let id = *draft.id();
            store.create(draft).await;
            if choose {
                store
                    .apply_partial_update(&id, DecisionPatch::new().chosen_option("Only"))
                    .await
                    .unwrap();
            }

            prop_assert_eq!(store.finalize(&id).await, choose);
            prop_assert_eq!(store.get(&id).unwrap().is_complete(), choose);
            Ok(())
        })?;
    }

    #[test]
    fn reopening_reproduces_the_collection(
        entries in prop::collection::vec((title(), prop::collection::vec(outcome_label(), 0..3), 1u8..=10), 0..6)
    ) {
        runtime().block_on(async {
            let storage = InMemoryKeyValueStorage::new();
            let mut store = DecisionStore::open(Arc::new(storage.clone()), DEFAULT_STORAGE_KEY).await;

            for (title, outcomes, weight) in &entries {
                store.draft_mut().set_title(title.clone());
                store.add_argument(ArgumentKind::Con, "Cost");
                store.set_weight(ArgumentKind::Con, 0, *weight).unwrap();
                for outcome in outcomes {
                    store.add_outcome(outcome);
                }
                store.save_draft().await;
            }
            store.persist().await;

            let reopened = DecisionStore::open(Arc::new(storage), DEFAULT_STORAGE_KEY).await;
            prop_assert_eq!(reopened.decisions(), store.decisions());
            Ok(())
        })?;
    }
}
