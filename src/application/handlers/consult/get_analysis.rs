//! GetAnalysisHandler - Query handler that turns a completed consult into
//! the AI counselor's four-part analysis.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::consult::{Analysis, ConsultError, REQUIRED_USER_TURNS};
use crate::domain::foundation::SessionId;
use crate::ports::{AICounselor, AIError, ConsultRepository};

/// Upper bound on a single counselor call.
pub const DEFAULT_ANALYSIS_TIMEOUT: Duration = Duration::from_secs(60);

/// Query for a session's analysis.
#[derive(Debug, Clone)]
pub struct GetAnalysisQuery {
    pub session_id: SessionId,
}

/// Handler for consult analysis.
pub struct GetAnalysisHandler {
    repository: Arc<dyn ConsultRepository>,
    counselor: Arc<dyn AICounselor>,
    timeout: Duration,
}

impl GetAnalysisHandler {
    pub fn new(repository: Arc<dyn ConsultRepository>, counselor: Arc<dyn AICounselor>) -> Self {
        Self {
            repository,
            counselor,
            timeout: DEFAULT_ANALYSIS_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[tracing::instrument(skip(self, query), fields(session_id = %query.session_id))]
    pub async fn handle(&self, query: GetAnalysisQuery) -> Result<Analysis, ConsultError> {
        let session = self
            .repository
            .find_by_id(&query.session_id)
            .await?
            .ok_or_else(|| ConsultError::not_found(query.session_id))?;

        if !session.is_completed() {
            return Err(ConsultError::incomplete(
                session.user_turn_count(),
                REQUIRED_USER_TURNS,
            ));
        }

        let history = session.conversation_history();
        let call = self.counselor.generate_analysis(session.profile(), &history);

        match tokio::time::timeout(self.timeout, call).await {
            Ok(Ok(analysis)) => {
                tracing::info!("analysis generated");
                Ok(analysis)
            }
            Ok(Err(AIError::Timeout { timeout_secs })) => {
                tracing::warn!(timeout_secs, "counselor reported timeout");
                Err(ConsultError::AnalysisTimedOut { timeout_secs })
            }
            Ok(Err(err)) => {
                tracing::error!(error = %err, "counselor failed");
                Err(ConsultError::counselor(err.to_string()))
            }
            Err(_) => {
                let timeout_secs = self.timeout.as_secs();
                tracing::warn!(timeout_secs, "analysis timed out");
                Err(ConsultError::AnalysisTimedOut { timeout_secs })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryConsultRepository;
    use crate::domain::consult::{ConsultSession, Message, MessageRecord};
    use crate::domain::foundation::UserId;
    use crate::domain::profile::{Gender, Mbti, UserProfile};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct RecordingCounselor {
        result: Result<Analysis, AIError>,
        delay: Option<Duration>,
        seen: Mutex<Vec<(UserProfile, Vec<MessageRecord>)>>,
    }

    impl RecordingCounselor {
        fn answering(analysis: Analysis) -> Self {
            Self {
                result: Ok(analysis),
                delay: None,
                seen: Mutex::new(Vec::new()),
            }
        }

        fn failing(err: AIError) -> Self {
            Self {
                result: Err(err),
                delay: None,
                seen: Mutex::new(Vec::new()),
            }
        }

        fn slow(delay: Duration) -> Self {
            Self {
                delay: Some(delay),
                ..Self::answering(sample_analysis())
            }
        }

        fn calls(&self) -> usize {
            self.seen.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl AICounselor for RecordingCounselor {
        async fn generate_analysis(
            &self,
            profile: &UserProfile,
            history: &[MessageRecord],
        ) -> Result<Analysis, AIError> {
            self.seen
                .lock()
                .unwrap()
                .push((*profile, history.to_vec()));
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.result.clone()
        }
    }

    fn sample_analysis() -> Analysis {
        Analysis::new("상황", "성향", "해결책", "주의점").unwrap()
    }

    fn profile() -> UserProfile {
        UserProfile::new(Gender::Male, Mbti::new("INTJ").unwrap())
    }

    async fn stored_session(repo: &InMemoryConsultRepository, user_turns: usize) -> SessionId {
        let mut session = ConsultSession::start(UserId::new("u1").unwrap(), profile());
        for i in 0..user_turns {
            session
                .add_message(Message::user(format!("질문 {}", i)).unwrap())
                .unwrap();
            session
                .add_message(Message::assistant(format!("답변 {}", i)).unwrap())
                .unwrap();
        }
        *repo.save(&session).await.unwrap().id()
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let repo = Arc::new(InMemoryConsultRepository::new());
        let counselor = Arc::new(RecordingCounselor::answering(sample_analysis()));
        let handler = GetAnalysisHandler::new(repo, counselor.clone());
        let id = SessionId::new();

        let result = handler.handle(GetAnalysisQuery { session_id: id }).await;

        assert_eq!(result, Err(ConsultError::NotFound(id)));
        assert_eq!(counselor.calls(), 0);
    }

    #[tokio::test]
    async fn incomplete_session_is_rejected_without_calling_counselor() {
        let repo = Arc::new(InMemoryConsultRepository::new());
        let id = stored_session(&repo, 2).await;
        let counselor = Arc::new(RecordingCounselor::answering(sample_analysis()));
        let handler = GetAnalysisHandler::new(repo, counselor.clone());

        let result = handler.handle(GetAnalysisQuery { session_id: id }).await;

        assert_eq!(result, Err(ConsultError::incomplete(2, 3)));
        assert_eq!(counselor.calls(), 0);
    }

    #[tokio::test]
    async fn completed_session_returns_counselor_analysis_unmodified() {
        let repo = Arc::new(InMemoryConsultRepository::new());
        let id = stored_session(&repo, 3).await;
        let counselor = Arc::new(RecordingCounselor::answering(sample_analysis()));
        let handler = GetAnalysisHandler::new(repo, counselor.clone());

        let analysis = handler
            .handle(GetAnalysisQuery { session_id: id })
            .await
            .unwrap();

        assert_eq!(analysis, sample_analysis());
        let seen = counselor.seen.lock().unwrap();
        let (seen_profile, seen_history) = &seen[0];
        assert_eq!(*seen_profile, profile());
        assert_eq!(seen_history.len(), 6);
        assert_eq!(seen_history[0].content, "질문 0");
        assert_eq!(seen_history[5].content, "답변 2");
    }

    #[tokio::test]
    async fn counselor_failure_is_propagated() {
        let repo = Arc::new(InMemoryConsultRepository::new());
        let id = stored_session(&repo, 3).await;
        let counselor = Arc::new(RecordingCounselor::failing(AIError::AuthenticationFailed));
        let handler = GetAnalysisHandler::new(repo, counselor);

        let result = handler.handle(GetAnalysisQuery { session_id: id }).await;

        assert!(matches!(result, Err(ConsultError::Counselor(_))));
    }

    #[tokio::test]
    async fn slow_counselor_times_out() {
        let repo = Arc::new(InMemoryConsultRepository::new());
        let id = stored_session(&repo, 3).await;
        let counselor = Arc::new(RecordingCounselor::slow(Duration::from_secs(5)));
        let handler =
            GetAnalysisHandler::new(repo, counselor).with_timeout(Duration::from_millis(20));

        let result = handler.handle(GetAnalysisQuery { session_id: id }).await;

        assert!(matches!(result, Err(ConsultError::AnalysisTimedOut { .. })));
    }
}
