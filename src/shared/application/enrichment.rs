//! Fan-out / fan-in enrichment of a primary collection.
//!
//! One dependent fetch is issued per primary item, all of them polled
//! concurrently, and the batch completes once every fetch has settled. A
//! failing fetch never fails the batch: it is replaced by the fallback at the
//! level of that single fetch.

use futures::future::join_all;
use serde::{Deserialize, Serialize};
use std::future::Future;

use crate::shared::errors::AppResult;

/// Outcome of a dependent fetch, keeping "failed" distinct from "empty"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Lookup<T> {
    Resolved(T),
    Unresolved,
}

impl<T> Lookup<T> {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Lookup::Resolved(_))
    }

    pub fn resolved(self) -> Option<T> {
        match self {
            Lookup::Resolved(value) => Some(value),
            Lookup::Unresolved => None,
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        self.resolved().unwrap_or(default)
    }
}

/// Enrich every item with one dependent fetch.
///
/// `result[i]` always belongs to `items[i]`: each future is tied to its index
/// when it is created and `join_all` yields outputs in creation order, so the
/// order in which fetches complete has no effect on the result. Failed
/// fetches are logged and replaced by `fallback`. An empty input resolves
/// immediately without calling `fetch_one`.
pub async fn enrich_each<'a, T, R, F, Fut>(items: &'a [T], fetch_one: F, fallback: R) -> Vec<R>
where
    F: Fn(&'a T) -> Fut,
    Fut: Future<Output = AppResult<R>>,
    R: Clone,
{
    if items.is_empty() {
        return Vec::new();
    }

    let total = items.len();
    let pending = items.iter().enumerate().map(|(index, item)| {
        let fetch = fetch_one(item);
        let fallback = fallback.clone();
        async move {
            match fetch.await {
                Ok(value) => value,
                Err(e) => {
                    tracing::warn!(
                        "Dependent fetch {}/{} failed, using fallback: {}",
                        index + 1,
                        total,
                        e
                    );
                    fallback
                }
            }
        }
    });

    join_all(pending).await
}
