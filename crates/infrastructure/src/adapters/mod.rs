//! Adapters implementing the application ports

mod alert_mailer_adapter;
mod classifier_adapter;
mod generative_adapter;

pub use alert_mailer_adapter::AlertMailerAdapter;
pub use classifier_adapter::ClassifierAdapter;
pub use generative_adapter::GenerativeAdapter;
