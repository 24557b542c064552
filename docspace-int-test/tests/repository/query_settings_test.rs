use crate::repository::titles;
use docspace::common::{SortOrder, Value, ENGINE_LANGUAGE, ENGINE_STORAGE_LOCATION};
use docspace::doc;
use docspace::query::{Query, QuerySettings};
use docspace::repository::DocumentRepository;
use docspace::store::memory::{InMemoryEngine, InMemoryEngineConfig};
use docspace::store::{PersistenceEngine, PersistenceEngineProvider};
use docspace_int_test::test_util::{cleanup, create_test_context, init_logger, run_test};

#[test]
fn test_rows_in_other_locations_and_languages_are_visible() {
    init_logger();
    let engine = InMemoryEngine::with_config(InMemoryEngineConfig::new().storage_location(12).language(3));
    let mut repository = DocumentRepository::new(PersistenceEngine::new(engine.clone()));
    repository.set_namespace("blog").unwrap();

    repository.add(&mut doc!{ title: "located" }).unwrap();
    repository.add(&mut doc!{ title: "any language", "_language": (-1) }).unwrap();

    // a plain engine query hides both rows
    assert_eq!(engine.count(&Query::new()).unwrap(), 0);

    let found = repository.find_all().unwrap();
    assert_eq!(titles(&found), vec!["located".to_string(), "any language".to_string()]);
    assert_eq!(repository.count_all().unwrap(), 2);
}

#[test]
fn test_repository_rows_are_raw() {
    run_test(
        create_test_context,
        |ctx| {
            let repository = ctx.repository();
            repository.add(&mut doc!{ title: "raw" })?;

            let found = repository.find_all()?;
            assert!(found[0].contains_key(ENGINE_STORAGE_LOCATION));
            assert!(found[0].contains_key(ENGINE_LANGUAGE));
            assert_eq!(found[0].get(ENGINE_STORAGE_LOCATION), Value::U64(0));
            Ok(())
        },
        cleanup,
    );
}

#[test]
fn test_configured_settings_cannot_hide_rows() {
    run_test(
        create_test_context,
        |ctx| {
            let repository = DocumentRepository::builder(PersistenceEngine::new(ctx.engine()))
                .namespace("blog")
                .query_settings(QuerySettings::new().language(9).storage_locations(vec![99]))
                .build()?;
            repository.add(&mut doc!{ title: "visible" })?;

            assert_eq!(repository.count_all()?, 1);
            let query = repository.create_query();
            assert!(!query.get_settings().is_language_respected());
            assert!(!query.get_settings().is_storage_location_respected());
            assert!(query.get_settings().is_raw());
            assert_eq!(query.get_settings().get_language(), 9);
            Ok(())
        },
        cleanup,
    );
}

#[test]
fn test_default_orderings_apply_to_find_all() {
    run_test(
        create_test_context,
        |ctx| {
            let repository = DocumentRepository::builder(PersistenceEngine::new(ctx.engine()))
                .namespace("sorted")
                .order_by("rank", SortOrder::Descending)
                .order_by("title", SortOrder::Ascending)
                .build()?;

            repository.add(&mut doc!{ title: "b", rank: 1 })?;
            repository.add(&mut doc!{ title: "c", rank: 2 })?;
            repository.add(&mut doc!{ title: "a", rank: 1 })?;
            repository.add(&mut doc!{ title: "unranked" })?;

            let found = repository.find_all()?;
            assert_eq!(
                titles(&found),
                vec!["c".to_string(), "a".to_string(), "b".to_string(), "unranked".to_string()]
            );

            let everything = repository.find_all_ignore_namespace()?;
            assert_eq!(titles(&everything)[0], "c");
            Ok(())
        },
        cleanup,
    );
}

#[test]
fn test_without_orderings_storage_order_is_kept() {
    run_test(
        create_test_context,
        |ctx| {
            let repository = ctx.repository();
            for title in ["delta", "alpha", "charlie", "bravo"] {
                repository.add(&mut doc!{ title: title })?;
            }
            let found = repository.find_all()?;
            assert_eq!(titles(&found), vec!["delta", "alpha", "charlie", "bravo"]);

            let direct = ctx.engine().len();
            assert_eq!(direct, 4);
            assert_eq!(repository.engine().count(&Query::new())?, 4);
            Ok(())
        },
        cleanup,
    );
}
