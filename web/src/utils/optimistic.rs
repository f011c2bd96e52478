//! The one optimistic-mutation helper every list-mutating action goes
//! through: snapshot the list by value, apply the intended end state
//! synchronously, fire the write, and on rejection restore the exact
//! snapshot. A rejected request therefore never leaves a list half-applied
//! or ordered differently from before the action.

use std::future::Future;

use leptos::prelude::*;

/// Core of the pattern, storage-agnostic so it works on any list holder.
///
/// `read` must return the current list by value; `write` replaces it
/// wholesale. The returned error is whatever the write request produced,
/// after the snapshot has been restored.
pub async fn optimistic_mutation<T, E, Fut>(
    read: impl FnOnce() -> Vec<T>,
    write: impl Fn(Vec<T>),
    apply: impl FnOnce(&mut Vec<T>),
    request: Fut,
) -> Result<(), E>
where
    T: Clone,
    Fut: Future<Output = Result<(), E>>,
{
    let snapshot = read();
    let mut staged = snapshot.clone();
    apply(&mut staged);
    write(staged);

    match request.await {
        Ok(()) => Ok(()),
        Err(err) => {
            write(snapshot);
            Err(err)
        }
    }
}

/// Signal-backed convenience wrapper used by the views.
pub async fn optimistic_signal<T, E, Fut>(
    list: RwSignal<Vec<T>>,
    apply: impl FnOnce(&mut Vec<T>),
    request: Fut,
) -> Result<(), E>
where
    T: Clone + Send + Sync + 'static,
    Fut: Future<Output = Result<(), E>>,
{
    optimistic_mutation(
        move || list.get_untracked(),
        move |value| list.set(value),
        apply,
        request,
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn harness(initial: Vec<&str>) -> (Rc<RefCell<Vec<String>>>, impl FnOnce() -> Vec<String>, impl Fn(Vec<String>)) {
        let list = Rc::new(RefCell::new(
            initial.into_iter().map(String::from).collect::<Vec<_>>(),
        ));
        let read = {
            let list = Rc::clone(&list);
            move || list.borrow().clone()
        };
        let write = {
            let list = Rc::clone(&list);
            move |value: Vec<String>| *list.borrow_mut() = value
        };
        (list, read, write)
    }

    #[test]
    fn test_success_keeps_applied_state() {
        let (list, read, write) = harness(vec!["a", "b"]);

        let result = futures::executor::block_on(optimistic_mutation(
            read,
            write,
            |books| books.push("c".to_string()),
            async { Ok::<(), String>(()) },
        ));

        assert!(result.is_ok());
        assert_eq!(*list.borrow(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_failure_restores_exact_snapshot() {
        let (list, read, write) = harness(vec!["b", "a", "c"]);

        let result = futures::executor::block_on(optimistic_mutation(
            read,
            write,
            |books| books.retain(|b| b != "a"),
            async { Err::<(), String>("rejected".to_string()) },
        ));

        assert_eq!(result.unwrap_err(), "rejected");
        // same ids, same order
        assert_eq!(*list.borrow(), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_rapid_toggle_last_action_wins() {
        // Add then remove the same book before either request resolves.
        // Whichever request fails, its revert restores a list equal to the
        // state the *other* action produced, so the last user action stays
        // on screen.
        let (list, read, write) = harness(vec!["x"]);

        // First toggle: optimistic add of "fav"; its request has not
        // resolved yet when the second toggle runs.
        let snapshot_before_add = list.borrow().clone();
        list.borrow_mut().push("fav".to_string());

        // Second toggle: optimistic remove, whose request succeeds.
        let result = futures::executor::block_on(optimistic_mutation(
            read,
            write,
            |books| books.retain(|b| b != "fav"),
            async { Ok::<(), String>(()) },
        ));
        assert!(result.is_ok());

        // Now the first request fails and reverts to its own snapshot.
        *list.borrow_mut() = snapshot_before_add;

        // Final state matches the last user action: "fav" is absent.
        assert_eq!(*list.borrow(), vec!["x"]);
    }
}
