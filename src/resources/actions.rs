//! Action resource client

use crate::action::{self, Action, ActionFetch, PollOpts};
use crate::error::Result;
use crate::paginate;
use crate::transport::Transport;
use crate::types::FilterParams;
use futures::Stream;

const ITEMS_KEY: &str = "actions";

/// Operations on actions
#[derive(Debug)]
pub struct ActionsClient<'a> {
    transport: &'a Transport,
}

impl<'a> ActionsClient<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Lazily stream all actions matching `filters`
    pub fn list(&self, filters: &FilterParams) -> impl Stream<Item = Result<Action>> + 'a {
        paginate::paginate(self.transport, "actions", ITEMS_KEY, filters)
    }

    /// Fetch every matching action eagerly
    pub async fn all(&self, filters: &FilterParams) -> Result<Vec<Action>> {
        paginate::fetch_all(self.transport, "actions", ITEMS_KEY, filters).await
    }

    /// Fetch one action by id
    pub async fn get(&self, id: u64) -> Result<Action> {
        self.transport.fetch_action(id).await
    }

    /// Wait for an action to reach a terminal state
    pub async fn poll(&self, id: u64, opts: PollOpts) -> Result<Action> {
        action::poll(self.transport, id, opts).await
    }
}
