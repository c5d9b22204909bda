//! In-memory stand-in for the activity service.
//!
//! Implements the repository ports directly so aggregation and command tests
//! run without a network. Individual lookups can be delayed or made to fail,
//! and every dependent fetch is counted.

use async_trait::async_trait;
use one8_lib::modules::activity::{Activity, ActivityFilter, ActivityRepository, NewActivity};
use one8_lib::modules::booking::{Booking, BookingRepository, NewBooking};
use one8_lib::modules::user::{NewSubscription, NewUser, Subscription, User, UserRepository};
use one8_lib::modules::volunteer::{
    NewVolunteerApplication, VolunteerApplication, VolunteerRepository,
};
use one8_lib::shared::domain::{ActivityId, BookingId, UserId};
use one8_lib::shared::errors::{AppError, AppResult};
use one8_lib::AppServices;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Default)]
pub struct FakeApi {
    activities: Mutex<Vec<Activity>>,
    bookings: Mutex<Vec<Booking>>,
    volunteers: Mutex<Vec<VolunteerApplication>>,
    failing_activities: Mutex<HashSet<ActivityId>>,
    failing_booking_lists: Mutex<HashSet<ActivityId>>,
    delays: Mutex<HashMap<ActivityId, Duration>>,
    reject_mutations_with: Mutex<Option<AppError>>,
    activity_lookups: AtomicUsize,
    booking_lists: AtomicUsize,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_activities(self, activities: Vec<Activity>) -> Self {
        *self.activities.lock().unwrap() = activities;
        self
    }

    pub fn with_bookings(self, bookings: Vec<Booking>) -> Self {
        *self.bookings.lock().unwrap() = bookings;
        self
    }

    /// `GET /activities/{id}` fails for this id
    pub fn failing_activity(self, id: ActivityId) -> Self {
        self.failing_activities.lock().unwrap().insert(id);
        self
    }

    /// `GET /activities/{id}/bookings` fails for this id
    pub fn failing_booking_list(self, id: ActivityId) -> Self {
        self.failing_booking_lists.lock().unwrap().insert(id);
        self
    }

    /// Delay every dependent fetch that concerns this activity
    pub fn delayed(self, id: ActivityId, delay: Duration) -> Self {
        self.delays.lock().unwrap().insert(id, delay);
        self
    }

    /// Every create/cancel call is answered with this error
    pub fn rejecting_mutations(self, error: AppError) -> Self {
        *self.reject_mutations_with.lock().unwrap() = Some(error);
        self
    }

    pub fn activity_lookups(&self) -> usize {
        self.activity_lookups.load(Ordering::SeqCst)
    }

    pub fn booking_lists(&self) -> usize {
        self.booking_lists.load(Ordering::SeqCst)
    }

    pub fn volunteer_count(&self) -> usize {
        self.volunteers.lock().unwrap().len()
    }

    /// Services wired over this fake for every repository port
    pub fn services(api: &Arc<Self>) -> AppServices {
        AppServices::from_repositories(
            Arc::clone(api) as Arc<dyn ActivityRepository>,
            Arc::clone(api) as Arc<dyn BookingRepository>,
            Arc::clone(api) as Arc<dyn VolunteerRepository>,
            Arc::clone(api) as Arc<dyn UserRepository>,
            None,
        )
    }

    async fn wait_for(&self, id: ActivityId) {
        let delay = self.delays.lock().unwrap().get(&id).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }

    fn check_mutation(&self) -> AppResult<()> {
        match self.reject_mutations_with.lock().unwrap().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ActivityRepository for FakeApi {
    async fn list_activities(&self, filter: &ActivityFilter) -> AppResult<Vec<Activity>> {
        let activities = self.activities.lock().unwrap().clone();
        Ok(activities
            .into_iter()
            .filter(|a| filter.category.as_deref().map_or(true, |c| a.category == c))
            .filter(|a| filter.location.as_deref().map_or(true, |l| a.location.contains(l)))
            .collect())
    }

    async fn get_activity(&self, id: ActivityId) -> AppResult<Activity> {
        self.activity_lookups.fetch_add(1, Ordering::SeqCst);
        self.wait_for(id).await;

        if self.failing_activities.lock().unwrap().contains(&id) {
            return Err(AppError::ExternalServiceError(
                "Request timeout".to_string(),
            ));
        }
        self.activities
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Activity not found".to_string()))
    }

    async fn create_activity(&self, activity: &NewActivity) -> AppResult<Activity> {
        self.check_mutation()?;
        let mut activities = self.activities.lock().unwrap();
        let created = Activity {
            id: activities.len() as ActivityId + 1,
            title: activity.title.clone(),
            description: activity.description.clone(),
            category: activity.category.clone(),
            location: activity.location.clone(),
            instructor: activity.instructor.clone(),
            activity_date: activity.activity_date,
            max_participants: activity.max_participants,
            duration_minutes: activity.duration_minutes,
            price: activity.price,
            image_url: activity.image_url.clone(),
            created_at: None,
        };
        activities.push(created.clone());
        Ok(created)
    }

    async fn list_categories(&self) -> AppResult<Vec<String>> {
        let mut categories: Vec<String> = self
            .activities
            .lock()
            .unwrap()
            .iter()
            .map(|a| a.category.clone())
            .collect();
        categories.sort();
        categories.dedup();
        Ok(categories)
    }
}

#[async_trait]
impl BookingRepository for FakeApi {
    async fn list_for_activity(&self, activity_id: ActivityId) -> AppResult<Vec<Booking>> {
        self.booking_lists.fetch_add(1, Ordering::SeqCst);
        self.wait_for(activity_id).await;

        if self.failing_booking_lists.lock().unwrap().contains(&activity_id) {
            return Err(AppError::ExternalServiceError(
                "Service unavailable".to_string(),
            ));
        }
        Ok(self
            .bookings
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.activity_id == activity_id)
            .cloned()
            .collect())
    }

    async fn list_for_user(&self, user_id: UserId) -> AppResult<Vec<Booking>> {
        Ok(self
            .bookings
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn create(&self, booking: &NewBooking) -> AppResult<Booking> {
        self.check_mutation()?;
        let mut bookings = self.bookings.lock().unwrap();
        let created = Booking {
            id: bookings.len() as BookingId + 100,
            user_id: booking.user_id,
            activity_id: booking.activity_id,
            booking_date: chrono::Utc::now(),
            notes: booking.notes.clone(),
        };
        bookings.push(created.clone());
        Ok(created)
    }

    async fn cancel(&self, booking_id: BookingId) -> AppResult<()> {
        self.check_mutation()?;
        let mut bookings = self.bookings.lock().unwrap();
        let before = bookings.len();
        bookings.retain(|b| b.id != booking_id);
        if bookings.len() == before {
            return Err(AppError::NotFound("Booking not found".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl VolunteerRepository for FakeApi {
    async fn create(
        &self,
        application: &NewVolunteerApplication,
    ) -> AppResult<VolunteerApplication> {
        self.check_mutation()?;
        let mut volunteers = self.volunteers.lock().unwrap();
        let created = VolunteerApplication {
            id: volunteers.len() as i64 + 1,
            activity_id: application.activity_id,
            contact: application.contact.clone(),
            availability: application.availability.clone(),
            experience: application.experience.clone(),
            created_at: None,
        };
        volunteers.push(created.clone());
        Ok(created)
    }

    async fn list_for_activity(
        &self,
        activity_id: ActivityId,
    ) -> AppResult<Vec<VolunteerApplication>> {
        Ok(self
            .volunteers
            .lock()
            .unwrap()
            .iter()
            .filter(|v| v.activity_id == activity_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl UserRepository for FakeApi {
    async fn create_user(&self, user: &NewUser) -> AppResult<User> {
        self.check_mutation()?;
        Ok(User {
            id: 1,
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            age: user.age,
            address: user.address.clone(),
            created_at: None,
        })
    }

    async fn get_user(&self, id: UserId) -> AppResult<User> {
        Err(AppError::NotFound(format!("User {} not found", id)))
    }

    async fn create_subscription(&self, subscription: &NewSubscription) -> AppResult<Subscription> {
        self.check_mutation()?;
        Ok(Subscription {
            id: 1,
            user_id: subscription.user_id,
            plan_type: subscription.plan_type.clone(),
            start_date: subscription.start_date,
            end_date: subscription.end_date,
            is_active: true,
            created_at: None,
        })
    }

    async fn get_subscription(&self, _user_id: UserId) -> AppResult<Option<Subscription>> {
        Ok(None)
    }
}
