use std::cell::Cell;
use std::rc::Rc;

use chain_rail::{hook, ChainError, HandleStep, Hook, Ref, Wrapper};

use super::MyStruct;

type Handle = Option<Ref<MyStruct>>;

type Outcome = (Handle, Option<ChainError>);

fn inc(handle: Handle) -> Outcome {
    if let Some(h) = &handle {
        h.borrow_mut().val += 1;
    }
    (handle, None)
}

fn double(handle: Handle) -> Outcome {
    if let Some(h) = &handle {
        h.borrow_mut().val *= 2;
    }
    (handle, None)
}

fn fail_if_three(handle: Handle) -> Outcome {
    if handle.as_ref().is_some_and(|h| h.borrow().val == 3) {
        return (handle, Some(ChainError::new("val cannot be 3")));
    }
    (handle, None)
}

fn new_wrapper(val: i32, hook: Option<Hook>) -> Wrapper<MyStruct> {
    Wrapper::new(Some(Ref::new(MyStruct { val })), hook)
}

fn val_of(wrapper: &Wrapper<MyStruct>) -> i32 {
    wrapper.get().expect("handle present").val
}

#[test]
fn then_mutates_through_the_handle() {
    let shared = Ref::new(MyStruct { val: 1 });
    let wrapper = Wrapper::<MyStruct>::new(Some(shared.clone()), None)
        .then(Some(inc))
        .then(Some(double));

    assert!(wrapper.is_success());
    assert_eq!(val_of(&wrapper), 4);
    assert_eq!(shared.get().val, 4);
}

#[test]
fn error_stops_chain_and_keeps_previous_handle() {
    let propagate = hook(Some);
    let (handle, error) = new_wrapper(2, Some(propagate))
        .then(Some(inc))
        .then(Some(fail_if_three))
        .then(Some(double))
        .result();

    assert_eq!(error.unwrap().message(), "val cannot be 3");
    assert_eq!(handle.unwrap().get().val, 3);
}

#[test]
fn missing_hook_propagates_error_as_is() {
    let wrapper = new_wrapper(3, None).then(Some(fail_if_three));

    assert_eq!(wrapper.has_error().unwrap().message(), "val cannot be 3");
    assert_eq!(val_of(&wrapper), 3);
}

#[test]
fn failing_step_handle_is_dropped_for_previous_handle() {
    let replacement = Ref::new(MyStruct { val: 99 });
    let wrapper = new_wrapper(5, None)
        .then(Some(|_: Handle| (Some(replacement.clone()), Some(ChainError::new("gone")))));

    assert_eq!(wrapper.has_error().unwrap().message(), "gone");
    assert!(!wrapper.handle().unwrap().ptr_eq(&replacement));
    assert_eq!(val_of(&wrapper), 5);

    let absent = new_wrapper(6, None).then(Some(|_: Handle| (None, Some(ChainError::new("gone")))));
    assert_eq!(val_of(&absent), 6);
}

#[test]
fn hook_can_rewrite_the_error() {
    let rewrite = hook(|e: ChainError| Some(ChainError::new(format!("wrapped: {e}"))));
    let wrapper = new_wrapper(3, Some(rewrite)).then(Some(fail_if_three));

    assert_eq!(wrapper.has_error().unwrap().message(), "wrapped: val cannot be 3");
    assert_eq!(val_of(&wrapper), 3);
}

#[test]
fn hook_can_suppress_the_error() {
    let suppress = hook(|_: ChainError| None);
    let wrapper = new_wrapper(2, Some(suppress))
        .then(Some(inc))
        .then(Some(fail_if_three))
        .then(Some(double));

    assert!(wrapper.is_success());
    assert_eq!(val_of(&wrapper), 6);
}

#[test]
fn hook_is_called_once_per_failing_step_and_threaded_forward() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let counting = hook(move |_: ChainError| {
        counter.set(counter.get() + 1);
        None
    });

    let wrapper = new_wrapper(3, Some(counting))
        .then(Some(fail_if_three))
        .map(|_| {})
        .then(Some(fail_if_three));

    assert_eq!(calls.get(), 2);
    assert!(wrapper.hook().is_some());
}

#[test]
fn hook_is_not_called_when_steps_succeed() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let counting = hook(move |e: ChainError| {
        counter.set(counter.get() + 1);
        Some(e)
    });

    let _ = new_wrapper(1, Some(counting)).then(Some(inc)).then(Some(double));
    assert_eq!(calls.get(), 0);
}

#[test]
fn absent_steps_are_skipped() {
    let wrapper = new_wrapper(1, None)
        .then(None::<HandleStep<MyStruct>>)
        .then(None::<HandleStep<MyStruct>>);

    assert!(wrapper.is_success());
    assert_eq!(val_of(&wrapper), 1);
}

#[test]
fn failed_wrapper_short_circuits_every_transform() {
    let called = Cell::new(false);
    let failed = new_wrapper(7, None).with_error(ChainError::new("boom"));

    let after = failed
        .then(Some(|h: Handle| {
            called.set(true);
            (h, None)
        }))
        .map(|_| called.set(true))
        .filter(
            |_| {
                called.set(true);
                true
            },
            ChainError::new("other"),
        );

    assert!(!called.get());
    assert_eq!(after.has_error().unwrap().message(), "boom");
    assert_eq!(val_of(&after), 7);
}

#[test]
fn map_mutates_in_place_and_aliases_share_the_value() {
    let original = new_wrapper(1, None);
    let alias = original.clone();

    let mapped = original.map(|m| m.val += 10);

    assert_eq!(val_of(&mapped), 11);
    assert_eq!(val_of(&alias), 11);
    assert!(mapped.handle().unwrap().ptr_eq(alias.handle().unwrap()));
}

#[test]
fn map_skips_absent_handle() {
    let called = Cell::new(false);
    let (handle, error) = Wrapper::<MyStruct>::new(None, None)
        .map(|_| called.set(true))
        .result();

    assert!(!called.get());
    assert!(handle.is_none());
    assert!(error.is_none());
}

#[test]
fn filter_rejects_value_and_absent_handle() {
    let err = ChainError::new("not positive");

    let accepted = new_wrapper(1, None).filter(|m| m.val > 0, err.clone());
    assert!(accepted.is_success());

    let rejected = new_wrapper(-1, None).filter(|m| m.val > 0, err.clone());
    assert_eq!(rejected.has_error(), Some(&err));
    assert_eq!(val_of(&rejected), -1);

    let absent = Wrapper::<MyStruct>::new(None, None).filter(|_| true, err.clone());
    assert_eq!(absent.has_error(), Some(&err));
}

#[test]
fn flat_map_sequences_wrappers() {
    let (handle, error) = new_wrapper(1, None)
        .flat_map(|h| {
            if let Some(h) = &h {
                h.borrow_mut().val *= 3;
            }
            Wrapper::new(h, None)
        })
        .result();

    assert!(error.is_none());
    assert_eq!(handle.unwrap().get().val, 3);
}

#[test]
fn flat_map_error_propagates_to_later_steps() {
    let wrapper = new_wrapper(3, None)
        .flat_map(|h| {
            let three = h.as_ref().is_some_and(|h| h.borrow().val == 3);
            let next = Wrapper::new(h, None);
            if three {
                next.with_error(ChainError::new("fail on 3"))
            } else {
                next
            }
        })
        .then(Some(inc));

    assert_eq!(wrapper.has_error().unwrap().message(), "fail on 3");
    assert_eq!(val_of(&wrapper), 3);
}

#[test]
fn match_with_receives_handle_or_error() {
    let seen = Cell::new(0);
    new_wrapper(4, None).match_with(
        Some(|h: Option<&Ref<MyStruct>>| seen.set(h.unwrap().get().val)),
        None::<fn(&ChainError)>,
    );
    assert_eq!(seen.get(), 4);

    let failed = new_wrapper(4, None).with_error(ChainError::new("x"));
    failed.match_with(
        Some(|_: Option<&Ref<MyStruct>>| seen.set(-1)),
        Some(|e: &ChainError| {
            assert_eq!(e.message(), "x");
            seen.set(100);
        }),
    );
    assert_eq!(seen.get(), 100);
}

#[test]
fn or_else_replaces_handle_and_clears_error() {
    let fallback = Ref::new(MyStruct { val: 42 });
    let recovered = new_wrapper(1, Some(hook(Some)))
        .with_error(ChainError::new("boom"))
        .or_else(Some(fallback.clone()));

    assert!(recovered.is_success());
    assert!(recovered.has_error().is_none());
    assert!(recovered.handle().unwrap().ptr_eq(&fallback));
    assert!(recovered.hook().is_some());

    let untouched = new_wrapper(1, None).or_else(Some(fallback));
    assert_eq!(val_of(&untouched), 1);
}

#[test]
fn recover_replaces_handle_on_success() {
    let wrapper =
        new_wrapper(1, None).recover(Some(|| (Some(Ref::new(MyStruct { val: 100 })), None)));

    assert!(wrapper.is_success());
    assert_eq!(val_of(&wrapper), 100);
}

#[test]
fn recover_converts_panic_and_keeps_hook() {
    let wrapper = new_wrapper(0, Some(hook(Some)))
        .recover(Some(|| -> Outcome { panic!("ouch") }));

    assert_eq!(wrapper.has_error().unwrap().message(), "panic recovered: ouch");
    assert!(wrapper.handle().is_none());
    assert!(wrapper.hook().is_some());
}

#[test]
fn recover_routes_producer_errors_through_hook() {
    let suppress = hook(|_: ChainError| None);
    let wrapper = new_wrapper(9, Some(suppress))
        .recover(Some(|| -> Outcome { (None, Some(ChainError::new("soft"))) }));

    assert!(wrapper.is_success());
    assert_eq!(val_of(&wrapper), 9);
}

#[test]
fn recover_is_skipped_on_failed_wrapper() {
    let called = Cell::new(false);
    let wrapper = new_wrapper(1, None)
        .with_error(ChainError::new("before"))
        .recover(Some(|| {
            called.set(true);
            (None, None)
        }));

    assert!(!called.get());
    assert_eq!(wrapper.has_error().unwrap().message(), "before");
}

#[test]
fn unwrap_returns_handle_on_success() {
    let handle = new_wrapper(9, None).unwrap();
    assert_eq!(handle.unwrap().get().val, 9);
}

#[test]
#[should_panic(expected = "called Unwrap on error: fail")]
fn unwrap_panics_on_failure() {
    let _ = new_wrapper(9, None).with_error(ChainError::new("fail")).unwrap();
}

#[test]
fn flatten_collapses_nested_wrappers() {
    let inner = new_wrapper(5, None);
    let outer: Wrapper<Wrapper<MyStruct>> = Wrapper::new(Some(Ref::new(inner)), Some(hook(Some)));
    let flat = outer.flatten();

    assert!(flat.is_success());
    assert_eq!(val_of(&flat), 5);
    assert!(flat.hook().is_some());
}

#[test]
fn flatten_propagates_outer_then_inner_error() {
    let inner_failed = new_wrapper(5, None).with_error(ChainError::new("inner"));

    let outer_failed: Wrapper<Wrapper<MyStruct>> =
        Wrapper::new(Some(Ref::new(inner_failed.clone())), None).with_error(ChainError::new("outer"));
    let flat = outer_failed.flatten();
    assert_eq!(flat.has_error().unwrap().message(), "outer");
    assert!(flat.handle().is_none());

    let outer_ok: Wrapper<Wrapper<MyStruct>> = Wrapper::new(Some(Ref::new(inner_failed)), None);
    let flat = outer_ok.flatten();
    assert_eq!(flat.has_error().unwrap().message(), "inner");
    assert!(flat.handle().is_none());
}

#[test]
fn flatten_of_absent_outer_handle_is_empty_success() {
    let outer: Wrapper<Wrapper<MyStruct>> = Wrapper::new(None, None);
    let flat = outer.flatten();

    assert!(flat.is_success());
    assert!(flat.handle().is_none());
}
