/// Enters a call scope on a [`Recorder`](crate::Recorder), named after the enclosing function.
///
/// Expands to [`Recorder::enter`](crate::Recorder::enter) and therefore evaluates to a
/// `Result<CallScope>`; keep the returned scope alive for as long as the call should stay active.
/// An explicit name can be passed as second argument.
///
/// ```rust
/// use valueflow::{trace_call, Recorder};
///
/// fn add(recorder: &Recorder) -> valueflow::Result<()> {
///     let _call = trace_call!(recorder)?;
///     Ok(())
/// }
///
/// let recorder = Recorder::new();
/// add(&recorder)?;
/// {
///     let _call = trace_call!(recorder, "explicit")?;
/// }
///
/// recorder.with(|graph| {
///     let first = graph.root().children()[0];
///     assert!(graph.subgraph(first).unwrap().identifier().ends_with("add"));
/// });
/// # Ok::<(), valueflow::Error>(())
/// ```
#[macro_export]
macro_rules! trace_call {
    ($recorder:expr) => {
        $recorder.enter({
            fn __here() {}
            fn __name_of<T>(_: T) -> &'static str {
                ::std::any::type_name::<T>()
            }
            let name = __name_of(__here);
            name.strip_suffix("::__here").unwrap_or(name)
        })
    };

    ($recorder:expr, $name:expr) => {
        $recorder.enter($name)
    };
}

#[cfg(test)]
mod tests {
    use crate::Recorder;

    fn traced(recorder: &Recorder) -> crate::Result<crate::graph::SubgraphId> {
        let call = trace_call!(recorder)?;
        Ok(call.id())
    }

    #[test]
    fn test_trace_call_uses_function_path() {
        let recorder = Recorder::new();
        let id = traced(&recorder).unwrap();

        recorder.with(|graph| {
            let identifier = graph.subgraph(id).unwrap().identifier().to_string();
            assert!(identifier.ends_with("tests::traced"), "{identifier}");
            assert_eq!(graph.depth(), 1);
        });
    }

    #[test]
    fn test_trace_call_explicit_name() {
        let recorder = Recorder::new();
        let id = {
            let call = trace_call!(recorder, "named").unwrap();
            call.id()
        };

        recorder.with(|graph| {
            assert_eq!(graph.subgraph(id).unwrap().identifier(), "named");
        });
    }
}
