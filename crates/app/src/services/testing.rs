//! In-memory repository double shared by the service tests.

use std::future::Future;
use std::io;
use std::sync::{Arc, Mutex, MutexGuard};

use campus_domain::error::CampusError;
use campus_domain::id::RecordId;
use campus_domain::record::Identified;

use crate::ports::RecordRepository;

struct State<T> {
    records: Vec<T>,
    next_id: i64,
    calls: Vec<&'static str>,
    received: Vec<T>,
}

/// Vector-backed repository that records every call it receives.
///
/// Clones share state, so a test can keep a handle after moving one into a
/// service.
#[derive(Clone)]
pub(crate) struct InMemoryRepo<T> {
    state: Arc<Mutex<State<T>>>,
    failing: bool,
}

impl<T> Default for InMemoryRepo<T> {
    fn default() -> Self {
        Self {
            state: Arc::new(Mutex::new(State {
                records: Vec::new(),
                next_id: 1,
                calls: Vec::new(),
                received: Vec::new(),
            })),
            failing: false,
        }
    }
}

impl<T: Clone> InMemoryRepo<T> {
    /// A repository whose every call fails with a storage error.
    pub(crate) fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// Seed records directly, bypassing id assignment.
    pub(crate) fn with_records(records: Vec<T>) -> Self {
        let repo = Self::default();
        {
            let mut state = repo.state.lock().unwrap();
            state.next_id = i64::try_from(records.len()).unwrap() + 1;
            state.records = records;
        }
        repo
    }

    /// Names of the repository methods called so far, in order.
    pub(crate) fn calls(&self) -> Vec<&'static str> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Payloads handed to `add` and `update`, in order.
    pub(crate) fn received(&self) -> Vec<T> {
        self.state.lock().unwrap().received.clone()
    }

    fn enter(&self, call: &'static str) -> Result<MutexGuard<'_, State<T>>, CampusError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        if self.failing {
            return Err(CampusError::Storage(Box::new(io::Error::other(
                "storage unavailable",
            ))));
        }
        Ok(state)
    }
}

impl<T> RecordRepository<T> for InMemoryRepo<T>
where
    T: Identified + Clone + Send + 'static,
{
    fn add(&self, record: T) -> impl Future<Output = Result<T, CampusError>> + Send {
        let result = self.enter("add").map(|mut state| {
            state.received.push(record.clone());
            let id = RecordId::parse(Some(state.next_id)).unwrap();
            state.next_id += 1;
            let stored = record.with_id(id);
            state.records.push(stored.clone());
            stored
        });
        async { result }
    }

    fn get_by_id(
        &self,
        id: RecordId,
    ) -> impl Future<Output = Result<Option<T>, CampusError>> + Send {
        let result = self.enter("get_by_id").map(|state| {
            state
                .records
                .iter()
                .find(|record| record.id() == Some(id))
                .cloned()
        });
        async { result }
    }

    fn list(&self) -> impl Future<Output = Result<Vec<T>, CampusError>> + Send {
        let result = self.enter("list").map(|state| state.records.clone());
        async { result }
    }

    fn update(
        &self,
        id: RecordId,
        record: T,
    ) -> impl Future<Output = Result<Option<T>, CampusError>> + Send {
        let result = self.enter("update").map(|mut state| {
            state.received.push(record.clone());
            let slot = state
                .records
                .iter_mut()
                .find(|stored| stored.id() == Some(id))?;
            *slot = record.clone();
            Some(record)
        });
        async { result }
    }

    fn delete(&self, id: RecordId) -> impl Future<Output = Result<bool, CampusError>> + Send {
        let result = self.enter("delete").map(|mut state| {
            let before = state.records.len();
            state.records.retain(|record| record.id() != Some(id));
            state.records.len() != before
        });
        async { result }
    }
}
