//! OpenAI-backed AI counselor.

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::consult::{Analysis, MessageRecord, MessageRole};
use crate::domain::profile::UserProfile;
use crate::ports::{AICounselor, AIError};

use super::openai_client::{parse_json_content, OpenAIClient};

const SYSTEM_PROMPT: &str = "당신은 MBTI 기반 연애 상담 전문가입니다. \
사용자의 MBTI와 성별, 상담 대화를 바탕으로 관계를 분석하세요. \
반드시 다음 네 개의 키를 가진 JSON 객체로만 답하세요: \
\"situation\"(상황 요약), \"traits\"(MBTI 성향 분석), \
\"solutions\"(구체적인 해결 방안), \"cautions\"(주의할 점). \
모든 값은 비어 있지 않은 한국어 문자열이어야 합니다.";

pub struct OpenAICounselor {
    client: OpenAIClient,
}

impl OpenAICounselor {
    pub fn new(client: OpenAIClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AICounselor for OpenAICounselor {
    async fn generate_analysis(
        &self,
        profile: &UserProfile,
        history: &[MessageRecord],
    ) -> Result<Analysis, AIError> {
        let prompt = build_prompt(profile, history);
        tracing::debug!(model = self.client.model(), turns = history.len(), "requesting analysis");

        let content = self.client.complete_json(SYSTEM_PROMPT, &prompt).await?;
        parse_analysis(&content)
    }
}

#[derive(Debug, Deserialize)]
struct AnalysisPayload {
    situation: String,
    traits: String,
    solutions: String,
    cautions: String,
}

fn build_prompt(profile: &UserProfile, history: &[MessageRecord]) -> String {
    let mut prompt = format!(
        "사용자 프로필: MBTI {}, 성별 {}\n\n상담 대화:\n",
        profile.mbti(),
        profile.gender()
    );
    for record in history {
        let speaker = match record.role {
            MessageRole::User => "사용자",
            MessageRole::Assistant => "상담사",
        };
        prompt.push_str(&format!("{}: {}\n", speaker, record.content));
    }
    prompt
}

fn parse_analysis(content: &str) -> Result<Analysis, AIError> {
    let payload: AnalysisPayload = parse_json_content(content)?;
    Analysis::new(
        payload.situation,
        payload.traits,
        payload.solutions,
        payload.cautions,
    )
    .map_err(|e| AIError::parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::{Gender, Mbti};

    #[test]
    fn prompt_lists_profile_and_turns_in_order() {
        let profile = UserProfile::new(Gender::Female, Mbti::new("ENFP").unwrap());
        let history = vec![
            MessageRecord {
                role: MessageRole::User,
                content: "연락이 줄었어요".to_string(),
            },
            MessageRecord {
                role: MessageRole::Assistant,
                content: "언제부터인가요?".to_string(),
            },
        ];

        let prompt = build_prompt(&profile, &history);

        assert!(prompt.contains("MBTI ENFP"));
        assert!(prompt.contains("FEMALE"));
        let user_at = prompt.find("사용자: 연락이 줄었어요").unwrap();
        let reply_at = prompt.find("상담사: 언제부터인가요?").unwrap();
        assert!(user_at < reply_at);
    }

    #[test]
    fn parses_four_section_payload() {
        let analysis = parse_analysis(
            r#"{"situation": "상황", "traits": "성향", "solutions": "해결", "cautions": "주의"}"#,
        )
        .unwrap();
        assert_eq!(analysis.cautions(), "주의");
    }

    #[test]
    fn blank_or_missing_sections_are_parse_errors() {
        assert!(matches!(
            parse_analysis(r#"{"situation": "", "traits": "a", "solutions": "b", "cautions": "c"}"#),
            Err(AIError::Parse(_))
        ));
        assert!(matches!(
            parse_analysis(r#"{"situation": "a"}"#),
            Err(AIError::Parse(_))
        ));
    }
}
