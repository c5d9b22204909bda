pub mod modules;
pub mod shared;

use modules::{
    activity::{ActivityRepository, ActivityService, HttpActivityRepository},
    aggregation::Aggregator,
    booking::{BookingRepository, BookingService, HttpBookingRepository},
    user::{HttpUserRepository, UserRepository, UserService},
    volunteer::{HttpVolunteerRepository, VolunteerRepository, VolunteerService},
};
use shared::domain::Session;
use shared::errors::AppResult;
use shared::utils::{init_logger, TimedOperation};
use shared::{ApiClient, ClientConfig};
use std::sync::Arc;

/// Every service the presentation layer talks to, wired to one API client
pub struct AppServices {
    pub activity_service: Arc<ActivityService>,
    pub booking_service: Arc<BookingService>,
    pub volunteer_service: Arc<VolunteerService>,
    pub user_service: Arc<UserService>,
    pub aggregator: Arc<Aggregator>,
    default_session: Option<Session>,
}

impl AppServices {
    /// Wire the HTTP-backed repositories for `config`
    pub fn from_config(config: &ClientConfig) -> AppResult<Self> {
        let client = Arc::new(ApiClient::new(config)?);

        let activity_repo: Arc<dyn ActivityRepository> =
            Arc::new(HttpActivityRepository::new(Arc::clone(&client)));
        let booking_repo: Arc<dyn BookingRepository> =
            Arc::new(HttpBookingRepository::new(Arc::clone(&client)));
        let volunteer_repo: Arc<dyn VolunteerRepository> =
            Arc::new(HttpVolunteerRepository::new(Arc::clone(&client)));
        let user_repo: Arc<dyn UserRepository> = Arc::new(HttpUserRepository::new(client));

        let default_session = config.user_id.map(Session::new).transpose()?;

        Ok(Self::from_repositories(
            activity_repo,
            booking_repo,
            volunteer_repo,
            user_repo,
            default_session,
        ))
    }

    /// Wire services over arbitrary repository implementations
    pub fn from_repositories(
        activity_repo: Arc<dyn ActivityRepository>,
        booking_repo: Arc<dyn BookingRepository>,
        volunteer_repo: Arc<dyn VolunteerRepository>,
        user_repo: Arc<dyn UserRepository>,
        default_session: Option<Session>,
    ) -> Self {
        let aggregator = Arc::new(Aggregator::new(
            Arc::clone(&activity_repo),
            Arc::clone(&booking_repo),
        ));

        let activity_service = Arc::new(ActivityService::new(
            activity_repo,
            Arc::clone(&booking_repo),
            Arc::clone(&volunteer_repo),
            Arc::clone(&aggregator),
        ));
        let booking_service = Arc::new(BookingService::new(booking_repo, Arc::clone(&aggregator)));
        let volunteer_service = Arc::new(VolunteerService::new(volunteer_repo));
        let user_service = Arc::new(UserService::new(user_repo));

        Self {
            activity_service,
            booking_service,
            volunteer_service,
            user_service,
            aggregator,
            default_session,
        }
    }

    /// Session for the user configured through `ONE8_USER_ID`, if any
    pub fn default_session(&self) -> Option<Session> {
        self.default_session
    }
}

/// Set up logging, read configuration from the environment and wire services
pub fn bootstrap() -> AppResult<AppServices> {
    init_logger();

    let timer = TimedOperation::new("bootstrap");
    let config = ClientConfig::from_env().map_err(|e| {
        log_error!("Invalid configuration: {}", e);
        e
    })?;
    let services = AppServices::from_config(&config)?;

    log_info!(
        "Client ready for {} (timeout {}s, default user {:?})",
        config.base_url,
        config.timeout.as_secs(),
        config.user_id
    );
    timer.finish();

    Ok(services)
}
