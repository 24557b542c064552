use docspace::collection::Document;
use docspace::errors::DocspaceResult;
use docspace::repository::DocumentRepository;
use docspace::store::memory::InMemoryEngine;
use docspace::store::PersistenceEngine;
use std::panic::{catch_unwind, resume_unwind, AssertUnwindSafe};
use std::sync::Once;
use std::time::Instant;

static LOGGER: Once = Once::new();

/// Installs colog once per test binary. `RUST_LOG` controls the level.
pub fn init_logger() {
    LOGGER.call_once(|| {
        let _ = colog::default_builder().is_test(true).try_init();
    });
}

/// Runs a test between a `before` and an `after` step.
///
/// `after` runs even when the test fails or panics, then the failure is
/// reported.
pub fn run_test<T, B, A>(before: B, test: T, after: A)
where
    T: Fn(TestContext) -> DocspaceResult<()>,
    B: Fn() -> DocspaceResult<TestContext>,
    A: Fn(TestContext) -> DocspaceResult<()>,
{
    let start_time = Instant::now();
    let ctx = match before() {
        Ok(ctx) => ctx,
        Err(e) => panic!("Before run failed: {:?}", e),
    };

    let result = catch_unwind(AssertUnwindSafe(|| test(ctx.clone())));
    let after_result = after(ctx);
    log::debug!("Test finished in {:?}", start_time.elapsed());

    match result {
        Ok(Ok(())) => {
            if let Err(e) = after_result {
                panic!("After run failed: {:?}", e);
            }
        }
        Ok(Err(e)) => panic!("Test failed: {:?}", e),
        Err(panic) => resume_unwind(panic),
    }
}

/// An in-memory engine plus a repository scoped to a fresh namespace.
#[derive(Clone)]
pub struct TestContext {
    engine: InMemoryEngine,
    repository: DocumentRepository,
}

impl TestContext {
    pub fn new(engine: InMemoryEngine, repository: DocumentRepository) -> Self {
        Self { engine, repository }
    }

    /// The raw engine, for checks that bypass the repository.
    pub fn engine(&self) -> InMemoryEngine {
        self.engine.clone()
    }

    pub fn repository(&self) -> DocumentRepository {
        self.repository.clone()
    }

    /// A repository over the same store with no namespace selected.
    pub fn unscoped_repository(&self) -> DocumentRepository {
        DocumentRepository::new(PersistenceEngine::new(self.engine.clone()))
    }
}

/// A random namespace name. Simple-format UUIDs are plain hex, so they pass
/// namespace validation.
pub fn random_namespace() -> String {
    format!("ns{}", uuid::Uuid::new_v4().simple())
}

pub fn create_test_context() -> DocspaceResult<TestContext> {
    init_logger();
    let engine = InMemoryEngine::new();
    let repository = DocumentRepository::builder(PersistenceEngine::new(engine.clone()))
        .namespace(&random_namespace())
        .build()?;
    Ok(TestContext::new(engine, repository))
}

/// Creates a context with an unscoped repository.
pub fn create_unscoped_test_context() -> DocspaceResult<TestContext> {
    init_logger();
    let engine = InMemoryEngine::new();
    let repository = DocumentRepository::new(PersistenceEngine::new(engine.clone()));
    Ok(TestContext::new(engine, repository))
}

/// Deletes every stored row.
pub fn cleanup(ctx: TestContext) -> DocspaceResult<()> {
    let repository = ctx.unscoped_repository();
    for document in repository.find_all_ignore_namespace()? {
        repository.engine().delete(&document)?;
    }
    Ok(())
}

/// Stores `count` documents titled `title-<n>` in the repository's namespace.
pub fn insert_documents(repository: &DocumentRepository, count: usize) -> DocspaceResult<Vec<Document>> {
    let mut documents = Vec::with_capacity(count);
    for n in 0..count {
        let mut document = Document::with_random_id();
        document.put("title", format!("title-{}", n))?;
        document.put("position", n)?;
        repository.add(&mut document)?;
        documents.push(document);
    }
    Ok(documents)
}
