use docspace::doc;
use docspace::errors::ErrorKind;
use docspace::repository::{is_valid_namespace, DocumentRepository};
use docspace::store::memory::InMemoryEngine;
use docspace::store::PersistenceEngine;
use docspace_int_test::test_util::{
    cleanup, create_test_context, create_unscoped_test_context, random_namespace, run_test,
};

#[test]
fn test_set_namespace_accepts_alphanumeric_names() {
    run_test(
        create_unscoped_test_context,
        |ctx| {
            let mut repository = ctx.repository();
            let generated = random_namespace();
            for name in ["a", "Z", "0", "abc", "ABC123", "news2024", generated.as_str()] {
                repository.set_namespace(name)?;
                assert_eq!(repository.get_namespace(), Some(name));
            }
            Ok(())
        },
        cleanup,
    );
}

#[test]
fn test_set_namespace_rejects_other_names() {
    run_test(
        create_unscoped_test_context,
        |ctx| {
            let mut repository = ctx.repository();
            repository.set_namespace("before")?;

            for name in ["", " ", "a b", "a-b", "a_b", "a.b", "a/b", "news!", "ü", "tab\t"] {
                let error = repository.set_namespace(name).unwrap_err();
                assert_eq!(error.kind(), &ErrorKind::InvalidNamespace, "{:?}", name);
                assert_eq!(error.message(), "The given database name is invalid");
                assert_eq!(repository.get_namespace(), Some("before"));
                assert!(!is_valid_namespace(name));
            }
            Ok(())
        },
        cleanup,
    );
}

#[test]
fn test_find_all_without_namespace_fails() {
    run_test(
        create_unscoped_test_context,
        |ctx| {
            let repository = ctx.repository();
            let error = repository.find_all().unwrap_err();
            assert_eq!(error.kind(), &ErrorKind::NoNamespaceSelected);
            assert_eq!(error.message(), "No Document database has been selected");

            let error = repository.count_all().unwrap_err();
            assert_eq!(error.kind(), &ErrorKind::NoNamespaceSelected);
            Ok(())
        },
        cleanup,
    );
}

#[test]
fn test_add_without_any_namespace_fails_before_storing() {
    run_test(
        create_unscoped_test_context,
        |ctx| {
            let repository = ctx.repository();
            let mut document = doc!{ title: "orphan" };

            let error = repository.add(&mut document).unwrap_err();
            assert_eq!(error.kind(), &ErrorKind::NoNamespaceSelected);
            assert_eq!(error.message(), "The given object and the repository have no database set");
            assert!(ctx.engine().is_empty());
            assert_eq!(document.namespace(), None);
            Ok(())
        },
        cleanup,
    );
}

#[test]
fn test_empty_document_namespace_counts_as_unset() {
    run_test(
        create_test_context,
        |ctx| {
            let repository = ctx.repository();
            let mut document = doc!{ namespace: "", title: "blank" };
            repository.add(&mut document)?;
            assert_eq!(document.namespace(), repository.get_namespace());
            Ok(())
        },
        cleanup,
    );
}

#[test]
fn test_namespace_from_config() {
    run_test(
        create_test_context,
        |ctx| {
            let engine = PersistenceEngine::new(ctx.engine());
            let repository = DocumentRepository::builder(engine.clone()).namespace("blog").build()?;
            assert_eq!(repository.get_namespace(), Some("blog"));

            let result = DocumentRepository::builder(engine).namespace("blog post").build();
            assert_eq!(result.err().map(|e| e.kind().clone()), Some(ErrorKind::InvalidNamespace));
            Ok(())
        },
        cleanup,
    );
}

#[test]
fn test_with_namespace_shares_the_store() {
    run_test(
        create_test_context,
        |ctx| {
            let blog = ctx.repository().with_namespace("blog")?;
            let news = blog.with_namespace("news")?;

            blog.add(&mut doc!{ title: "post" })?;
            news.add(&mut doc!{ title: "headline" })?;
            news.add(&mut doc!{ title: "another" })?;

            assert_eq!(blog.count_all()?, 1);
            assert_eq!(news.count_all()?, 2);
            assert_eq!(ctx.engine().len(), 3);
            Ok(())
        },
        cleanup,
    );
}

#[test]
fn test_find_by_namespace_switches_selection() {
    run_test(
        || {
            let ctx = create_unscoped_test_context()?;
            let repository = ctx.repository();
            repository.add(&mut doc!{ namespace: "blog", title: "post" })?;
            repository.add(&mut doc!{ namespace: "news", title: "headline" })?;
            Ok(ctx)
        },
        |ctx| {
            let mut repository = ctx.repository();
            let news = repository.find_by_namespace("news")?;
            assert_eq!(news.len(), 1);
            assert_eq!(repository.get_namespace(), Some("news"));

            assert!(repository.find_by_namespace("no such").is_err());
            assert_eq!(repository.get_namespace(), Some("news"));
            Ok(())
        },
        cleanup,
    );
}

#[test]
fn test_unscoped_engine_sharing() {
    let engine = InMemoryEngine::new();
    let mut first = DocumentRepository::new(PersistenceEngine::new(engine.clone()));
    let mut second = DocumentRepository::new(PersistenceEngine::new(engine.clone()));
    first.set_namespace("a").unwrap();
    second.set_namespace("b").unwrap();

    first.add(&mut doc!{ title: "one" }).unwrap();
    assert_eq!(second.count_all().unwrap(), 0);
    assert_eq!(second.find_all_ignore_namespace().unwrap().len(), 1);
}
