use crate::repository::{text, titles};
use docspace::common::Value;
use docspace::doc;
use docspace::errors::ErrorKind;
use docspace_int_test::test_util::{cleanup, create_test_context, insert_documents, run_test};

#[test]
fn test_add_assigns_repository_namespace() {
    run_test(
        create_test_context,
        |ctx| {
            let mut repository = ctx.repository();
            repository.set_namespace("abc")?;

            let mut document = doc!{ id: "first", title: "Hello" };
            repository.add(&mut document)?;
            assert_eq!(document.namespace(), Some("abc"));
            assert!(document.uid().is_some());

            let stored = repository.find_by_identity(document.uid().unwrap_or_default())?;
            assert_eq!(stored.and_then(|d| d.namespace().map(str::to_string)), Some("abc".to_string()));
            Ok(())
        },
        cleanup,
    );
}

#[test]
fn test_find_all_returns_only_selected_namespace() {
    run_test(
        create_test_context,
        |ctx| {
            let mut repository = ctx.repository();
            repository.set_namespace("abc")?;
            repository.add(&mut doc!{ title: "one", views: 10, tags: ["a", "b"] })?;
            repository.add(&mut doc!{ title: "two", author: { name: "Ada" } })?;
            repository.add(&mut doc!{ namespace: "other", title: "three" })?;

            let found = repository.find_all()?;
            assert_eq!(titles(&found), vec!["one".to_string(), "two".to_string()]);
            for document in &found {
                assert_eq!(document.namespace(), Some("abc"));
            }

            // hydration keeps every stored field
            assert_eq!(found[0].get("views"), Value::I64(10));
            assert_eq!(found[0].get("tags"), Value::from(vec!["a", "b"]));
            assert_eq!(found[1].get("author"), Value::from(doc!{ name: "Ada" }));
            assert_eq!(repository.count_all()?, 2);
            Ok(())
        },
        cleanup,
    );
}

#[test]
fn test_find_all_ignore_namespace_sees_everything() {
    run_test(
        create_test_context,
        |ctx| {
            let repository = ctx.repository();
            insert_documents(&repository, 2)?;
            repository.add(&mut doc!{ namespace: "never", title: "x" })?;
            repository.add(&mut doc!{ namespace: "selected", title: "y" })?;

            let everything = repository.find_all_ignore_namespace()?;
            assert_eq!(everything.len(), 4);
            let namespaces: Vec<Option<String>> = everything
                .iter()
                .map(|d| d.namespace().map(str::to_string))
                .collect();
            assert!(namespaces.contains(&Some("never".to_string())));
            assert!(namespaces.contains(&Some("selected".to_string())));
            Ok(())
        },
        cleanup,
    );
}

#[test]
fn test_find_one_by_id_crosses_namespaces() {
    run_test(
        create_test_context,
        |ctx| {
            let repository = ctx.repository();
            repository.add(&mut doc!{ namespace: "elsewhere", id: "shared", title: "found" })?;

            let found = repository.find_one_by_id("shared")?;
            assert_eq!(found.map(|d| text(&d, "title")), Some("found".to_string()));
            assert!(repository.find_by_id("shared")?.is_some());
            Ok(())
        },
        cleanup,
    );
}

#[test]
fn test_find_one_by_id_missing_is_none() {
    run_test(
        create_test_context,
        |ctx| {
            let repository = ctx.repository();
            insert_documents(&repository, 3)?;
            assert!(repository.find_one_by_id("nonexistent")?.is_none());
            Ok(())
        },
        cleanup,
    );
}

#[test]
fn test_find_one_by_id_returns_first_in_storage_order() {
    run_test(
        create_test_context,
        |ctx| {
            let repository = ctx.repository();
            repository.add(&mut doc!{ id: 7, title: "older" })?;
            repository.add(&mut doc!{ id: 7, title: "newer" })?;

            let found = repository.find_one_by_id(7)?;
            assert_eq!(found.map(|d| text(&d, "title")), Some("older".to_string()));
            Ok(())
        },
        cleanup,
    );
}

#[test]
fn test_update_replaces_stored_fields() {
    run_test(
        create_test_context,
        |ctx| {
            let repository = ctx.repository();
            let mut document = doc!{ id: "post", title: "Draft", draft: true };
            repository.add(&mut document)?;

            document.put("title", "Published")?;
            document.remove("draft");
            repository.update(&mut document)?;

            let found = repository.find_all()?;
            assert_eq!(found.len(), 1);
            assert_eq!(text(&found[0], "title"), "Published");
            assert!(!found[0].contains_key("draft"));
            Ok(())
        },
        cleanup,
    );
}

#[test]
fn test_update_without_uid_fails() {
    run_test(
        create_test_context,
        |ctx| {
            let repository = ctx.repository();
            let mut document = doc!{ title: "never stored" };
            let error = repository.update(&mut document).unwrap_err();
            assert_eq!(error.kind(), &ErrorKind::NotIdentifiable);

            document.set_uid(1000);
            let error = repository.update(&mut document).unwrap_err();
            assert_eq!(error.kind(), &ErrorKind::NotFound);
            Ok(())
        },
        cleanup,
    );
}

#[test]
fn test_remove_deletes_one_document() {
    run_test(
        create_test_context,
        |ctx| {
            let repository = ctx.repository();
            let mut documents = insert_documents(&repository, 3)?;

            repository.remove(&mut documents[1])?;
            let remaining = repository.find_all()?;
            assert_eq!(titles(&remaining), vec!["title-0".to_string(), "title-2".to_string()]);
            assert!(repository.find_by_uid(documents[1].uid().unwrap_or_default())?.is_none());
            Ok(())
        },
        cleanup,
    );
}

#[test]
fn test_find_by_identity_bypasses_namespace() {
    run_test(
        create_test_context,
        |ctx| {
            let repository = ctx.repository();
            let mut foreign = doc!{ namespace: "foreign", title: "theirs" };
            repository.add(&mut foreign)?;

            let uid = foreign.uid().unwrap_or_default();
            let found = repository.find_by_identity(uid)?;
            assert_eq!(found.map(|d| text(&d, "title")), Some("theirs".to_string()));
            assert!(repository.find_by_identity(uid + 100)?.is_none());
            Ok(())
        },
        cleanup,
    );
}
