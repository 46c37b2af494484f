//! Notification service - Emergency alert dispatch
//!
//! Wraps the alert mailer port behind a boolean outcome. Delivery problems
//! are logged, never raised; the boolean only influences the wording of the
//! chat reply, not the action marker.

use std::{fmt, sync::Arc};

use domain::EmergencyAlert;
use tracing::{info, instrument, warn};

use crate::ports::AlertMailerPort;

/// Service for sending emergency alert emails
pub struct NotificationService {
    mailer: Arc<dyn AlertMailerPort>,
}

impl fmt::Debug for NotificationService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationService").finish_non_exhaustive()
    }
}

impl NotificationService {
    /// Create a new notification service
    pub fn new(mailer: Arc<dyn AlertMailerPort>) -> Self {
        Self { mailer }
    }

    /// Attempt one alert delivery, reporting only success or failure
    #[instrument(skip(self, alert), fields(recipient = %alert.recipient))]
    pub async fn notify(&self, alert: &EmergencyAlert) -> bool {
        match self.mailer.send_alert(alert).await {
            Ok(()) => {
                info!("Emergency alert delivered");
                true
            },
            Err(e) => {
                warn!(error = %e, "Emergency alert failed");
                false
            },
        }
    }
}
