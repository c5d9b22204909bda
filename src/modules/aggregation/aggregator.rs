use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use super::view_models::{EnrichedActivity, EnrichedBooking};
use crate::modules::activity::{Activity, ActivityRepository};
use crate::modules::booking::{Booking, BookingRepository};
use crate::shared::application::{enrich_each, Lookup};
use crate::shared::domain::BookingId;
use crate::shared::utils::{LogContext, TimedOperation};
use crate::log_warn;

/// Joins primary collections with one dependent fetch per record.
///
/// Dependent failures never reach the caller: a count that cannot be fetched
/// becomes 0 (flagged as unknown) and an activity that cannot be fetched
/// becomes `Lookup::Unresolved`.
pub struct Aggregator {
    activity_repo: Arc<dyn ActivityRepository>,
    booking_repo: Arc<dyn BookingRepository>,
}

impl Aggregator {
    pub fn new(
        activity_repo: Arc<dyn ActivityRepository>,
        booking_repo: Arc<dyn BookingRepository>,
    ) -> Self {
        Self {
            activity_repo,
            booking_repo,
        }
    }

    /// Attach the booking count to every activity, keeping input order
    pub async fn enrich_with_counts(&self, activities: Vec<Activity>) -> Vec<EnrichedActivity> {
        if activities.is_empty() {
            return Vec::new();
        }

        let timer = TimedOperation::new("enrich activities with booking counts");
        let counts = enrich_each(
            &activities,
            |activity| async move {
                self.booking_repo
                    .list_for_activity(activity.id)
                    .await
                    .map(|bookings| Lookup::Resolved(bookings.len()))
            },
            Lookup::Unresolved,
        )
        .await;

        let unresolved = counts.iter().filter(|count| !count.is_resolved()).count();
        LogContext::enrichment_batch("booking counts", activities.len(), unresolved);
        timer.finish_with_info(&format!("{} activities", activities.len()));

        activities
            .into_iter()
            .zip(counts)
            .map(|(activity, count)| EnrichedActivity::new(activity, count))
            .collect()
    }

    /// Resolve the activity behind every booking, keyed by booking id.
    ///
    /// Each booking id appears once. Should the service ever return the same
    /// booking twice, the first occurrence wins.
    pub async fn enrich_with_activity(
        &self,
        bookings: Vec<Booking>,
    ) -> HashMap<BookingId, EnrichedBooking> {
        if bookings.is_empty() {
            return HashMap::new();
        }

        let timer = TimedOperation::new("enrich bookings with activities");
        let activities = enrich_each(
            &bookings,
            |booking| async move {
                self.activity_repo
                    .get_activity(booking.activity_id)
                    .await
                    .map(Lookup::Resolved)
            },
            Lookup::Unresolved,
        )
        .await;

        let unresolved = activities.iter().filter(|a| !a.is_resolved()).count();
        LogContext::enrichment_batch("booking activities", bookings.len(), unresolved);
        timer.finish_with_info(&format!("{} bookings", bookings.len()));

        let mut enriched = HashMap::with_capacity(bookings.len());
        for (booking, activity) in bookings.into_iter().zip(activities) {
            match enriched.entry(booking.id) {
                Entry::Vacant(slot) => {
                    slot.insert(EnrichedBooking { booking, activity });
                }
                Entry::Occupied(_) => {
                    log_warn!("Booking {} listed more than once, keeping first", booking.id);
                }
            }
        }
        enriched
    }

    /// `enrich_with_activity`, returned in the order of the input list
    pub async fn enrich_with_activity_ordered(&self, bookings: Vec<Booking>) -> Vec<EnrichedBooking> {
        let order: Vec<BookingId> = bookings.iter().map(|b| b.id).collect();
        let mut by_id = self.enrich_with_activity(bookings).await;
        order
            .into_iter()
            .filter_map(|id| by_id.remove(&id))
            .collect()
    }
}
