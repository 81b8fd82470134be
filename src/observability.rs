use biometrics::{Collector, Counter, Moments};

pub(crate) static CLIENT_REQUESTS: Counter = Counter::new("citebot.client.requests");
pub(crate) static CLIENT_REQUEST_ERRORS: Counter = Counter::new("citebot.client.request_errors");
pub(crate) static CLIENT_REQUEST_DURATION: Moments =
    Moments::new("citebot.client.request_duration_seconds");

pub(crate) static SESSION_TURNS: Counter = Counter::new("citebot.session.turns");
pub(crate) static SESSION_TURN_ERRORS: Counter = Counter::new("citebot.session.turn_errors");
pub(crate) static SESSION_EMPTY_SUBMISSIONS: Counter =
    Counter::new("citebot.session.empty_submissions");

pub(crate) static ATTACHMENT_ENCODES: Counter = Counter::new("citebot.attachment.encodes");
pub(crate) static ATTACHMENT_ENCODE_ERRORS: Counter =
    Counter::new("citebot.attachment.encode_errors");

/// Register this crate's biometrics with the provided collector.
pub fn register_biometrics(collector: Collector) {
    collector.register_counter(&CLIENT_REQUESTS);
    collector.register_counter(&CLIENT_REQUEST_ERRORS);
    collector.register_moments(&CLIENT_REQUEST_DURATION);

    collector.register_counter(&SESSION_TURNS);
    collector.register_counter(&SESSION_TURN_ERRORS);
    collector.register_counter(&SESSION_EMPTY_SUBMISSIONS);

    collector.register_counter(&ATTACHMENT_ENCODES);
    collector.register_counter(&ATTACHMENT_ENCODE_ERRORS);
}
