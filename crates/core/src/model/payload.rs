use serde::Serialize;

use crate::model::company::CompanyInfo;
use crate::model::ids::QuestionId;
use crate::model::question::Score;

/// One answered question as sent on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Response {
    pub question_id: QuestionId,
    pub score: Score,
}

/// Request body of `POST /api/submit_assessment`.
///
/// Built once per submission chain; retries re-send the identical payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionPayload {
    pub company_info: CompanyInfo,
    pub responses: Vec<Response>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_serializes_to_wire_shape() {
        let payload = SubmissionPayload {
            company_info: CompanyInfo {
                name: "Acme Corp".to_string(),
                industry: "Retail".to_string(),
                size: "51-200".to_string(),
                role: "COO".to_string(),
            },
            responses: vec![Response {
                question_id: QuestionId::new("l1"),
                score: Score::from_u8(4).unwrap(),
            }],
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["company_info"]["name"], "Acme Corp");
        assert_eq!(json["responses"][0]["question_id"], "l1");
        assert_eq!(json["responses"][0]["score"], 4);
    }
}
