/* 📖 # Why use a separate file for these error tests?

Some of the cases verify span traces, which are only captured while a subscriber
with the ErrorLayer is active. Keeping them here keeps error.rs focused on the type itself.
*/

#[cfg(test)]
mod tests {
    use crate::error::ErrorKind;
    use crate::{ExplorerError, ExplorerResult, ResultExt};
    use expect_test::expect;
    use std::error::Error;
    use std::io;
    use std::path::PathBuf;
    use tracing_error::ErrorLayer;
    use tracing_subscriber::layer::SubscriberExt;

    fn not_found(path: &str) -> ExplorerError {
        ExplorerError::file_error(
            PathBuf::from(path),
            io::Error::new(io::ErrorKind::NotFound, "not found"),
        )
    }

    #[test]
    fn test_file_error_kind_and_source() {
        let error = not_found("/r/missing");

        match error.kind() {
            ErrorKind::FileError { path, .. } => assert_eq!(path, &PathBuf::from("/r/missing")),
            _ => panic!("Expected FileError variant"),
        }
        assert!(error.source().is_some());
        assert_eq!(error.root_cause().to_string(), "not found");
    }

    #[test]
    fn test_display_with_contexts() {
        let error = ExplorerError::message("root error")
            .context("first")
            .with_context(|| "second".to_string());
        assert_eq!(error.to_string(), "first: second: root error");
        assert_eq!(error.get_context(), ["first", "second"]);
    }

    #[test]
    fn test_display_invalid_pattern() {
        let error = ExplorerError::new(ErrorKind::InvalidPattern {
            pattern: "[a".to_string(),
            reason: "unclosed character class".to_string(),
        });
        assert_eq!(
            error.to_string(),
            "Invalid pattern '[a': unclosed character class"
        );
    }

    #[test]
    fn test_display_multiple_errors() {
        let error = ExplorerError::new(ErrorKind::Multiple {
            errors: vec![
                ExplorerError::message("error 1"),
                ExplorerError::message("error 2"),
            ],
            count: 2,
        });
        assert_eq!(
            error.to_string(),
            "Multiple errors occurred (2 total): error 1"
        );
    }

    #[test]
    fn test_root_cause_follows_causes() {
        let error = ExplorerError::message("search aborted").caused_by(not_found("/r/sub"));
        assert_eq!(error.root_cause().to_string(), "not found");
        assert_eq!(
            error.cause().map(|cause| cause.to_string()),
            Some("File error at /r/sub: not found".to_string())
        );
    }

    #[test]
    fn test_result_ext_chaining() {
        let result: ExplorerResult<i32> = Err(Box::new(ExplorerError::message("root")));
        let err = result
            .context("step 1")
            .with_context(|| "step 2".to_string())
            .unwrap_err();
        assert_eq!(err.to_string(), "step 1: step 2: root");
    }

    #[test]
    fn test_result_ext_success_untouched() {
        let result: ExplorerResult<i32> = Ok(42);
        assert_eq!(result.context("never used").unwrap(), 42);
    }

    #[test]
    fn test_err_and_bail_macros() {
        fn fails(limit: usize) -> ExplorerResult<()> {
            crate::bail!("limit {} exceeded", limit);
        }
        let err = fails(3).unwrap_err();
        assert_eq!(err.to_string(), "limit 3 exceeded");

        let boxed: Box<ExplorerError> = crate::err!("{} files", 5);
        assert_eq!(boxed.to_string(), "5 files");
    }

    #[test]
    fn test_debug_nested_errors_without_subscriber() {
        let inner = ExplorerError::message("inner error").context("inner context");
        let outer = ExplorerError::message("outer error")
            .context("outer context")
            .caused_by(inner);

        expect![[r#"
            outer error
            ├─ outer context
            └─ cause: inner error
               └─ inner context

        "#]]
        .assert_debug_eq(&outer);
    }

    #[test]
    fn test_debug_includes_span_trace_when_captured() {
        let subscriber = tracing_subscriber::registry().with(ErrorLayer::default());
        let error = tracing::subscriber::with_default(subscriber, || {
            let span = tracing::debug_span!("explore_directory", depth = 3);
            let _guard = span.enter();
            ExplorerError::message("listing failed")
        });

        let debug = format!("{:?}", error);
        assert!(debug.starts_with("listing failed\n"));
        assert!(debug.contains("Trace:"));
        assert!(debug.contains("explore_directory"));
        assert!(debug.contains("depth=3"));
    }
}
