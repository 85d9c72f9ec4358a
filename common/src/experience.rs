//! Wire types for the external experience-story API.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::RecordId;


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ApprovalStatus {
    Pending,
    OnHold,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Pending => "未承認",
            Self::OnHold => "保留中",
            Self::Approved => "承認済み",
            Self::Rejected => "却下",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub id: RecordId,
    pub title: String,
    pub text: String,
    pub grade: Option<String>,
    pub trigger: Option<String>,
    pub support: Option<String>,
    pub date: Option<String>,
    pub author_name: Option<String>,
    pub approval_status: Option<ApprovalStatus>,
    pub reject_reason: Option<String>,
    /// Answers to the rest of the questionnaire, kept as sent.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Response body shape shared by every read operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiEnvelope<T> {
    pub data: Vec<T>,
    pub no_data: bool,
    pub error_type: Option<String>,
    pub error: Option<String>,
}

impl<T> Default for ApiEnvelope<T> {
    fn default() -> Self {
        Self { data: Vec::new(), no_data: false, error_type: None, error: None }
    }
}

/// What a caller should display for a finished fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FetchOutcome<T> {
    Found(Vec<T>),
    /// Nothing matched. Shown as "nothing found", not as an error.
    Empty,
    Failed { error_type: String, message: String },
}

impl<T> ApiEnvelope<T> {
    pub fn into_outcome(self) -> FetchOutcome<T> {
        if let Some(error_type) = self.error_type {
            let message = self.error.unwrap_or_else(|| "取得エラーが発生しました".to_string());
            return FetchOutcome::Failed { error_type, message };
        }
        if self.no_data || self.data.is_empty() {
            return FetchOutcome::Empty;
        }
        FetchOutcome::Found(self.data)
    }
}

impl<T> FetchOutcome<T> {
    pub fn items(&self) -> &[T] {
        match self {
            Self::Found(items) => items,
            _ => &[],
        }
    }
}

/// The three admin tabs of submitted experiences.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ModerationQueues {
    pub pending: Vec<Experience>,
    pub on_hold: Vec<Experience>,
    pub approved: Vec<Experience>,
}

impl ModerationQueues {
    pub fn by_status(&self, status: ApprovalStatus) -> &[Experience] {
        match status {
            ApprovalStatus::Pending => &self.pending,
            ApprovalStatus::OnHold => &self.on_hold,
            ApprovalStatus::Approved => &self.approved,
            ApprovalStatus::Rejected => &[],
        }
    }
}

/// Free-text questionnaire answers shown on the detail page, in display order.
const STORY_FIELDS: &[(&str, &str)] = &[
    ("parentInitialAction", "保護者の初動"),
    ("childReaction", "子どもの反応"),
    ("schoolResponse", "学校の反応・対応"),
    ("initialReflection", "初動の振り返り"),
    ("firstMonthLife", "不登校になって1か月の生活"),
    ("hardestTime", "一番つらかった時期"),
    ("dailyLifeOverMonth", "1ヶ月以上続いたときの過ごし方"),
    ("improvementTrigger", "改善のきっかけ"),
    ("schoolConnection", "学校との繋がり"),
    ("elementarySchool", "小学生のころ"),
    ("juniorHighSchool", "中学生のころ"),
    ("highSchool", "高校生のころ"),
    ("alternativeSchool", "中学卒業後の通信制・定時制"),
    ("otherSupport", "その他のサポート"),
    ("currentThoughts", "いま思うこと"),
];

impl Experience {
    /// Labeled answers that are present and non-blank. Unknown keys are skipped.
    pub fn story_sections(&self) -> Vec<(&'static str, String)> {
        STORY_FIELDS
            .iter()
            .filter_map(|(key, label)| {
                let answer = self.extra.get(*key)?.as_str()?.trim();
                (!answer.is_empty()).then(|| (*label, answer.to_string()))
            })
            .collect()
    }
}

/// Section heading for the questionnaire item an experience list was picked by.
pub fn section_name_for_question(question_id: &str) -> Option<&'static str> {
    match question_id {
        "2-2" => Some("不登校のきっかけ"),
        "2-11" => Some("学校との繋がり"),
        "4-1-3" | "4-2-3" | "4-3-3" => Some("卒業後の進路"),
        "6-1-5" | "6-2-5" | "6-3-5" => Some("公的支援の利用"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_type_takes_precedence() {
        let envelope: ApiEnvelope<Experience> =
            serde_json::from_str(r#"{"data": [{"id": 1}], "errorType": "network"}"#).unwrap();
        assert_eq!(
            envelope.into_outcome(),
            FetchOutcome::Failed { error_type: "network".to_string(), message: "取得エラーが発生しました".to_string() }
        );
    }

    #[test]
    fn no_data_flag_and_empty_array_are_empty() {
        let flagged: ApiEnvelope<Experience> = serde_json::from_str(r#"{"noData": true}"#).unwrap();
        assert_eq!(flagged.into_outcome(), FetchOutcome::Empty);
        let empty: ApiEnvelope<Experience> = serde_json::from_str(r#"{"data": []}"#).unwrap();
        assert_eq!(empty.into_outcome(), FetchOutcome::Empty);
    }

    #[test]
    fn experience_keeps_unknown_fields() {
        let json = r#"{"id": "e-7", "title": "t", "text": "本文", "approvalStatus": "onHold", "hardestTime": "中2の冬"}"#;
        let experience: Experience = serde_json::from_str(json).unwrap();
        assert_eq!(experience.id, RecordId::Text("e-7".to_string()));
        assert_eq!(experience.approval_status, Some(ApprovalStatus::OnHold));
        assert_eq!(experience.extra["hardestTime"], serde_json::json!("中2の冬"));
    }

    #[test]
    fn story_sections_follow_questionnaire_order() {
        let json = r#"{"id": 7, "highSchool": "通信制へ", "hardestTime": "中2の冬", "childReaction": "  ", "favoriteColor": "青", "schoolConnection": 3}"#;
        let experience: Experience = serde_json::from_str(json).unwrap();
        assert_eq!(
            experience.story_sections(),
            vec![("一番つらかった時期", "中2の冬".to_string()), ("高校生のころ", "通信制へ".to_string())]
        );
    }

    #[test]
    fn found_items() {
        let envelope = ApiEnvelope { data: vec![Experience::default()], ..Default::default() };
        assert_eq!(envelope.into_outcome().items().len(), 1);
    }

    #[test]
    fn section_names() {
        assert_eq!(section_name_for_question("4-2-3"), Some("卒業後の進路"));
        assert_eq!(section_name_for_question("9-9"), None);
    }
}
