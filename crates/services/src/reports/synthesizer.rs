use std::sync::{Arc, LazyLock};

use regex::Regex;
use tracing::{info, warn};
use tutor_core::Clock;
use tutor_core::model::{Report, Score};

use super::mailer::ReportMailer;
use crate::ai::ChatAgent;
use crate::error::AgentError;
use crate::prompts::{NARRATIVE_INSTRUCTION, SCORING_INSTRUCTION, narrative_prompt, scoring_prompt};

static INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("integer pattern is valid"));

/// Extract the first integer in an agent reply as a clamped score.
#[must_use]
pub fn parse_score(reply: &str) -> Option<Score> {
    INTEGER.find(reply).map(|m| {
        // Only digits matched, so parsing can fail only on overflow.
        Score::clamped(m.as_str().parse::<i64>().unwrap_or(i64::MAX))
    })
}

/// Turns a finished transcript into a scored report and mails it.
///
/// Every stage degrades instead of failing: scoring falls back to 0, the
/// narrative to a placeholder, and delivery errors are only logged.
#[derive(Clone)]
pub struct ReportSynthesizer {
    agent: Arc<dyn ChatAgent>,
    mailer: Arc<dyn ReportMailer>,
    clock: Clock,
}

impl ReportSynthesizer {
    #[must_use]
    pub fn new(agent: Arc<dyn ChatAgent>, mailer: Arc<dyn ReportMailer>, clock: Clock) -> Self {
        Self {
            agent,
            mailer,
            clock,
        }
    }

    pub async fn synthesize(&self, student_name: &str, topic: &str, transcript: &str) -> Report {
        let score = self.score(transcript).await;
        let narrative = self
            .narrative(student_name, topic, score, transcript)
            .await;
        let report = Report::new(student_name, topic, score, narrative, self.clock.now());
        self.deliver(&report).await;
        report
    }

    async fn score(&self, transcript: &str) -> Score {
        match self.ask(SCORING_INSTRUCTION, &scoring_prompt(transcript)).await {
            Ok(reply) => parse_score(&reply).unwrap_or_else(|| {
                warn!(%reply, "scoring reply had no integer, defaulting to 0");
                Score::default()
            }),
            Err(err) => {
                warn!(error = %err, "scoring failed, defaulting to 0");
                Score::default()
            }
        }
    }

    async fn narrative(
        &self,
        student_name: &str,
        topic: &str,
        score: Score,
        transcript: &str,
    ) -> String {
        let prompt = narrative_prompt(student_name, topic, score, transcript);
        match self.ask(NARRATIVE_INSTRUCTION, &prompt).await {
            Ok(text) => text,
            Err(err) => {
                warn!(error = %err, "report narrative failed");
                format!("AI analysis unavailable: {err}")
            }
        }
    }

    async fn ask(&self, instruction: &str, prompt: &str) -> Result<String, AgentError> {
        let mut session = self.agent.start(instruction).await?;
        session.send(prompt).await
    }

    async fn deliver(&self, report: &Report) {
        match self
            .mailer
            .send_report(&report.email_subject(), report.narrative())
            .await
        {
            Ok(()) => info!(
                student = report.student_name(),
                score = report.score().value(),
                "report delivered"
            ),
            Err(err) => warn!(error = %err, "report delivery failed"),
        }
    }
}
