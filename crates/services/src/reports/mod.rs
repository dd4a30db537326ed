mod mailer;
mod synthesizer;

pub use mailer::{DisabledMailer, ReportMailer, SmtpMailer};
pub use synthesizer::{ReportSynthesizer, parse_score};
