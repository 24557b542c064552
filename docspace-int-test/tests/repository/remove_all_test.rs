use docspace::doc;
use docspace::errors::ErrorKind;
use docspace_int_test::test_util::{
    cleanup, create_test_context, create_unscoped_test_context, insert_documents, run_test,
};

#[test]
fn test_remove_all_empties_selected_namespace_only() {
    run_test(
        create_test_context,
        |ctx| {
            let mut repository = ctx.repository();
            repository.set_namespace("x")?;
            insert_documents(&repository, 3)?;
            repository.add(&mut doc!{ namespace: "y", title: "keep" })?;
            repository.add(&mut doc!{ namespace: "z", title: "keep too" })?;

            assert_eq!(repository.remove_all()?, 3);
            assert_eq!(repository.count_all()?, 0);
            assert!(repository.find_all()?.is_empty());

            let untouched = repository.find_all_ignore_namespace()?;
            assert_eq!(untouched.len(), 2);
            assert_eq!(repository.with_namespace("y")?.count_all()?, 1);
            assert_eq!(repository.with_namespace("z")?.count_all()?, 1);
            Ok(())
        },
        cleanup,
    );
}

#[test]
fn test_remove_all_on_empty_namespace() {
    run_test(
        create_test_context,
        |ctx| {
            assert_eq!(ctx.repository().remove_all()?, 0);
            Ok(())
        },
        cleanup,
    );
}

#[test]
fn test_remove_all_without_namespace_fails() {
    run_test(
        create_unscoped_test_context,
        |ctx| {
            let repository = ctx.repository();
            repository.add(&mut doc!{ namespace: "x", title: "stays" })?;

            let error = repository.remove_all().unwrap_err();
            assert_eq!(error.kind(), &ErrorKind::NoNamespaceSelected);
            assert_eq!(ctx.engine().len(), 1);
            Ok(())
        },
        cleanup,
    );
}
