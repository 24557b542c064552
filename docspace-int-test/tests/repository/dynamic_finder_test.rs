use docspace::common::Value;
use docspace::doc;
use docspace::errors::ErrorKind;
use docspace_int_test::test_util::{cleanup, create_test_context, run_test};

#[test]
fn test_call_is_always_unsupported() {
    run_test(
        create_test_context,
        |ctx| {
            let repository = ctx.repository();
            repository.add(&mut doc!{ title: "Hello" })?;

            for method in ["findByTitle", "findOneByTitle", "countByTitle", "anything"] {
                let error = repository.call(method, &[Value::from("Hello")]).unwrap_err();
                assert_eq!(error.kind(), &ErrorKind::UnsupportedOperation);
                assert_eq!(
                    error.message(),
                    format!("The method \"{}\" is not supported by the repository.", method)
                );
            }
            Ok(())
        },
        cleanup,
    );
}

#[test]
fn test_named_finders_are_unsupported_even_with_matches() {
    run_test(
        create_test_context,
        |ctx| {
            let repository = ctx.repository();
            repository.add(&mut doc!{ title: "Hello" })?;

            assert_eq!(repository.find_by("title", "Hello").unwrap_err().kind(), &ErrorKind::UnsupportedOperation);
            assert_eq!(repository.find_one_by("title", "Hello").unwrap_err().kind(), &ErrorKind::UnsupportedOperation);
            assert_eq!(repository.count_by("title", "Hello").unwrap_err().kind(), &ErrorKind::UnsupportedOperation);
            Ok(())
        },
        cleanup,
    );
}
