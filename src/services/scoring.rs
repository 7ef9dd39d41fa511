// src/services/scoring.rs

use crate::models::lead::LeadPayload;

/// Heurística de pontuação de leads, sempre calculada no servidor.
///
/// Três bônus independentes que somam:
/// +10 e-mail presente e não vazio, +20 telefone com 10+ caracteres,
/// +10 mensagem com mais de 80 caracteres. Nenhum outro campo pontua.
pub fn score_lead(lead: &LeadPayload) -> i32 {
    let mut score = 0;

    if lead.email.as_deref().is_some_and(|email| !email.is_empty()) {
        score += 10;
    }
    if lead
        .phone
        .as_deref()
        .is_some_and(|phone| phone.chars().count() >= 10)
    {
        score += 20;
    }
    if lead
        .message
        .as_deref()
        .is_some_and(|message| message.chars().count() > 80)
    {
        score += 10;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead(email: Option<&str>, phone: Option<&str>, message: Option<&str>) -> LeadPayload {
        LeadPayload {
            name: "Ana".to_string(),
            email: email.map(str::to_string),
            phone: phone.map(str::to_string),
            message: message.map(str::to_string),
            source: Some("website".to_string()),
            property_id: None,
            tags: vec![],
            utm: None,
            score: None,
        }
    }

    #[test]
    fn full_lead_scores_forty() {
        let message = "x".repeat(90);
        assert_eq!(
            score_lead(&lead(Some("a@b.com"), Some("5551234567"), Some(&message))),
            40
        );
    }

    #[test]
    fn short_phone_scores_zero() {
        assert_eq!(score_lead(&lead(None, Some("123"), None)), 0);
    }

    #[test]
    fn email_alone_scores_ten() {
        assert_eq!(score_lead(&lead(Some("a@b.com"), None, None)), 10);
    }

    #[test]
    fn empty_email_does_not_score() {
        assert_eq!(score_lead(&lead(Some(""), None, None)), 0);
    }

    #[test]
    fn message_must_exceed_eighty_characters() {
        let exactly_eighty = "x".repeat(80);
        assert_eq!(score_lead(&lead(None, None, Some(&exactly_eighty))), 0);

        let eighty_one = "x".repeat(81);
        assert_eq!(score_lead(&lead(None, None, Some(&eighty_one))), 10);
    }

    #[test]
    fn client_supplied_score_is_irrelevant() {
        let mut payload = lead(None, None, None);
        payload.score = Some(9000);
        assert_eq!(score_lead(&payload), 0);
    }
}
