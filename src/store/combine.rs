/// Build a root reducer out of per-section reducers.
///
/// Each named section is a field of the root state holding an `Arc` of the
/// section state. Every section reducer sees every action and returns its
/// input `Arc` when the action is not its business. A new root is only
/// allocated when at least one section came back as a different `Arc`;
/// otherwise the previous root is returned as is.
///
/// ```ignore
/// combine_reducers! {
///     pub fn reduce(RootState, Action) {
///         counter => counter::reduce,
///         posts => posts::reduce,
///     }
/// }
/// ```
#[macro_export]
macro_rules! combine_reducers {
    (
        $(#[$meta:meta])*
        $vis:vis fn $name:ident($root:ident, $action:ty) {
            $($section:ident => $reduce:path),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis fn $name(
            state: &::std::sync::Arc<$root>,
            action: &$action,
        ) -> ::std::sync::Arc<$root> {
            $(let $section = $reduce(&state.$section, action);)+
            let changed = false $(|| !::std::sync::Arc::ptr_eq(&$section, &state.$section))+;
            if !changed {
                return ::std::sync::Arc::clone(state);
            }
            ::std::sync::Arc::new($root { $($section),+ })
        }
    };
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    #[derive(Debug, Clone, PartialEq)]
    struct Root {
        left: Arc<i32>,
        right: Arc<String>,
    }

    enum Msg {
        Left(i32),
        Right(&'static str),
        Nothing,
    }

    fn reduce_left(state: &Arc<i32>, action: &Msg) -> Arc<i32> {
        match action {
            Msg::Left(n) => Arc::new(**state + n),
            _ => Arc::clone(state),
        }
    }

    fn reduce_right(state: &Arc<String>, action: &Msg) -> Arc<String> {
        match action {
            Msg::Right(s) => Arc::new(format!("{state}{s}")),
            _ => Arc::clone(state),
        }
    }

    combine_reducers! {
        fn reduce(Root, Msg) {
            left => reduce_left,
            right => reduce_right,
        }
    }

    fn root() -> Arc<Root> {
        Arc::new(Root {
            left: Arc::new(1),
            right: Arc::new("a".to_string()),
        })
    }

    #[test]
    fn test_unchanged_root_is_reused() {
        let state = root();
        let next = reduce(&state, &Msg::Nothing);
        assert!(Arc::ptr_eq(&state, &next));
    }

    #[test]
    fn test_only_touched_section_is_replaced() {
        let state = root();
        let next = reduce(&state, &Msg::Left(2));
        assert!(!Arc::ptr_eq(&state, &next));
        assert_eq!(*next.left, 3);
        assert!(Arc::ptr_eq(&state.right, &next.right));

        let next = reduce(&next, &Msg::Right("b"));
        assert_eq!(next.right.as_str(), "ab");
        assert_eq!(*next.left, 3);
        // the original root still has its values
        assert_eq!(*state.left, 1);
        assert_eq!(state.right.as_str(), "a");
    }
}
