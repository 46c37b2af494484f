//! Ports implemented by infrastructure adapters

mod classifier_port;
mod generative_port;
mod mailer_port;

pub use classifier_port::ClassifierPort;
pub use generative_port::{GenerativePort, GenerativeReply};
pub use mailer_port::AlertMailerPort;
