#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::*;

    #[test]
    fn test_local_default_and_override() {
        let local = CompositionLocal::new(1);
        assert_eq!(*local.current(), 1);
        assert!(local.lookup().is_none());

        local.provide(2, || {
            assert_eq!(*local.current(), 2);
            local.provide(3, || assert_eq!(*local.current(), 3));
            assert_eq!(*local.current(), 2);
        });

        assert_eq!(*local.current(), 1);
        assert_eq!(locals_depth(), 0);
    }

    #[test]
    fn test_locals_of_same_type_are_distinct() {
        let a = CompositionLocal::new("a-default");
        let b = CompositionLocal::new("b-default");
        assert_ne!(a.id(), b.id());

        a.provide("a-provided", || {
            assert_eq!(*a.current(), "a-provided");
            assert_eq!(*b.current(), "b-default");
        });
    }

    #[test]
    fn test_provide_rc_keeps_identity() {
        let local = CompositionLocal::new(Vec::<u8>::new());
        let value = Rc::new(vec![1, 2, 3]);
        let seen = local.provide_rc(value.clone(), || local.current());
        assert!(Rc::ptr_eq(&value, &seen));
    }

    #[test]
    fn test_frame_popped_on_panic() {
        let local = CompositionLocal::new(0);
        let res = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _: () = local.provide(5, || panic!("boom"));
        }));
        assert!(res.is_err());
        assert_eq!(locals_depth(), 0);
        assert_eq!(*local.current(), 0);
    }

    #[test]
    fn test_key_based_remember() {
        COMPOSER.with(|c| c.borrow_mut().keyed_slots.clear());

        let val1 = remember_with_key("test", || 42);
        let val2 = remember_with_key("test", || 100);

        // Should return the same instance
        assert_eq!(*val1, 42);
        assert_eq!(*val2, 42); // Not 100, because key exists
    }

    #[test]
    fn test_positional_remember_across_passes() {
        let mut composer = Composer::new();
        let scope = Scope::new();

        let first = composer.compose(&scope, || (remember(|| 1), remember(|| "x")));
        let second = composer.compose(&scope, || (remember(|| 2), remember(|| "y")));

        assert!(Rc::ptr_eq(&first.0, &second.0));
        assert_eq!(*second.0, 1);
        assert_eq!(*second.1, "x");
    }

    #[test]
    fn test_composers_are_isolated() {
        let scope = Scope::new();
        let mut a = Composer::new();
        let mut b = Composer::new();

        a.compose(&scope, || remember(|| 10));
        let from_b = b.compose(&scope, || remember(|| 20));
        let from_a = a.compose(&scope, || remember(|| 30));

        assert_eq!(*from_b, 20);
        assert_eq!(*from_a, 10);
    }

    #[test]
    fn test_scope_explicit_dispose() {
        let cleaned_up = Rc::new(RefCell::new(false));

        let scope = Scope::new();
        let cleaned_up_clone = cleaned_up.clone();
        scope.add_disposer(move || {
            *cleaned_up_clone.borrow_mut() = true;
        });

        assert!(!*cleaned_up.borrow());
        let handle = scope.clone();
        scope.dispose();
        assert!(*cleaned_up.borrow());
        assert!(handle.is_disposed());
    }

    #[test]
    fn test_state_requests_recompose() {
        take_recompose_request();
        let rendered = render_hook(|| use_state(|| 0));
        assert!(!take_recompose_request());

        rendered.result().set(4);
        assert!(take_recompose_request());
        assert!(!take_recompose_request());
    }

    #[test]
    fn test_act_recomposes_only_on_write() {
        let mut rendered = render_hook(|| use_state(|| String::from("a")));
        assert_eq!(rendered.render_count(), 1);

        rendered.act(|s| s.with(|v| v.len()));
        assert_eq!(rendered.render_count(), 1);

        rendered.act(|s| s.update(|v| v.push('b')));
        assert_eq!(rendered.render_count(), 2);
        assert_eq!(rendered.result().get(), "ab");
    }

    #[test]
    fn test_unmount_runs_cleanup_once() {
        let count = Rc::new(RefCell::new(0));
        let mut rendered = render_hook({
            let count = count.clone();
            move || {
                let count = count.clone();
                on_unmount(move || *count.borrow_mut() += 1);
            }
        });
        rendered.rerender();
        rendered.rerender();
        assert_eq!(*count.borrow(), 0);

        rendered.unmount();
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_wrapper_provides_to_hook() {
        let theme = CompositionLocal::new("dark");
        let rendered = render_hook_with(
            {
                let theme = theme.clone();
                move |content| theme.provide("light", content)
            },
            {
                let theme = theme.clone();
                move || *theme.current()
            },
        );
        assert_eq!(*rendered.result(), "light");
        assert_eq!(*theme.current(), "dark");
    }

    #[test]
    fn test_remember_init_may_remember() {
        let mut rendered = render_hook(|| use_state(|| *remember(|| 5)));
        assert_eq!(rendered.result().get(), 5);

        let first = rendered.result().clone();
        rendered.rerender();
        assert!(rendered.result().ptr_eq(&first));
        assert_eq!(rendered.result().get(), 5);
    }

    #[test]
    fn test_keyed_init_may_remember() {
        let rendered =
            render_hook(|| *remember_with_key("outer", || *remember_with_key("inner", || 3)));
        assert_eq!(*rendered.result(), 3);
    }

    #[test]
    fn test_state_handle_survives_rerender() {
        let mut rendered = render_hook(|| use_state(|| 0u8));
        let first = rendered.result().clone();
        let unrelated = render_hook(|| use_state(|| 0u8));

        rendered.rerender();
        assert!(rendered.result().ptr_eq(&first));
        assert!(!rendered.result().ptr_eq(unrelated.result()));
    }
}
