use serde::Serialize;
use std::sync::Arc;

use crate::modules::activity::domain::{Activity, ActivityFilter, ActivityRepository, NewActivity};
use crate::modules::aggregation::{Aggregator, EnrichedActivity};
use crate::modules::booking::{Booking, BookingRepository};
use crate::modules::volunteer::{VolunteerApplication, VolunteerRepository};
use crate::shared::domain::ActivityId;
use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;
use crate::{log_debug, log_info};

/// Number of activities shown on the landing page
pub const FEATURED_LIMIT: usize = 6;

/// Landing page data
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeView {
    pub featured: Vec<Activity>,
    pub categories: Vec<String>,
}

/// Everything the activity detail page shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityDetail {
    pub activity: Activity,
    pub bookings: Vec<Booking>,
    pub volunteers: Vec<VolunteerApplication>,
}

impl ActivityDetail {
    pub fn booking_count(&self) -> usize {
        self.bookings.len()
    }

    pub fn remaining_capacity(&self) -> Option<u32> {
        self.activity.remaining_capacity(self.bookings.len())
    }
}

pub struct ActivityService {
    activity_repo: Arc<dyn ActivityRepository>,
    booking_repo: Arc<dyn BookingRepository>,
    volunteer_repo: Arc<dyn VolunteerRepository>,
    aggregator: Arc<Aggregator>,
}

impl ActivityService {
    pub fn new(
        activity_repo: Arc<dyn ActivityRepository>,
        booking_repo: Arc<dyn BookingRepository>,
        volunteer_repo: Arc<dyn VolunteerRepository>,
        aggregator: Arc<Aggregator>,
    ) -> Self {
        Self {
            activity_repo,
            booking_repo,
            volunteer_repo,
            aggregator,
        }
    }

    /// Activity list with booking counts.
    ///
    /// The list itself is a primary fetch and its failure is returned; count
    /// failures are absorbed by the aggregator.
    pub async fn browse(&self, filter: &ActivityFilter) -> AppResult<Vec<EnrichedActivity>> {
        log_debug!("Browsing activities with filter {:?}", filter);
        let activities = self.activity_repo.list_activities(filter).await?;
        Ok(self.aggregator.enrich_with_counts(activities).await)
    }

    pub async fn categories(&self) -> AppResult<Vec<String>> {
        self.activity_repo.list_categories().await
    }

    /// Featured activities and categories, fetched together; either failing
    /// fails the page
    pub async fn home(&self) -> AppResult<HomeView> {
        let all = ActivityFilter::default();
        let (mut activities, categories) = futures::try_join!(
            self.activity_repo.list_activities(&all),
            self.activity_repo.list_categories()
        )?;

        activities.truncate(FEATURED_LIMIT);
        Ok(HomeView {
            featured: activities,
            categories,
        })
    }

    /// Activity, its bookings and its volunteers, fetched together
    pub async fn detail(&self, id: ActivityId) -> AppResult<ActivityDetail> {
        Validator::validate_id("Activity", id)?;

        let (activity, bookings, volunteers) = futures::try_join!(
            self.activity_repo.get_activity(id),
            self.booking_repo.list_for_activity(id),
            self.volunteer_repo.list_for_activity(id)
        )?;

        log_debug!(
            "Loaded activity {} with {} bookings and {} volunteers",
            id,
            bookings.len(),
            volunteers.len()
        );

        Ok(ActivityDetail {
            activity,
            bookings,
            volunteers,
        })
    }

    pub async fn create_activity(&self, activity: NewActivity) -> AppResult<Activity> {
        activity.validate()?;
        let created = self.activity_repo.create_activity(&activity).await?;
        log_info!("Created activity {} '{}'", created.id, created.title);
        Ok(created)
    }
}
