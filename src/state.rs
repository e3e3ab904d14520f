use crate::session::Session;
use crate::storage::KvStore;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<Session>>,
}

impl AppState {
    pub fn new(store: KvStore) -> Self {
        Self {
            session: Arc::new(Mutex::new(Session::new(store))),
        }
    }
}
