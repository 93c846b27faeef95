use serde::Serialize;

use crate::state::Session;

/// Wire form of a session snapshot for whatever renders it. Amounts travel
/// as formatted strings; of the preview only the hash travels, the PNG bytes
/// stay behind to be fetched separately.
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub people: Vec<PersonView>,
    pub items: Vec<ItemView>,
    pub total: String,
    pub preview_hash: Option<String>,
    pub error: Option<String>,
    pub processing: bool,
}

#[derive(Debug, Serialize)]
pub struct PersonView {
    pub id: String,
    pub name: String,
    /// This person's owed share, formatted.
    pub share: String,
}

#[derive(Debug, Serialize)]
pub struct ItemView {
    pub description: String,
    pub amount: String,
    pub included_in_split: bool,
    pub assigned_to: Vec<String>,
}

impl SessionView {
    pub fn of(session: &Session) -> Self {
        SessionView {
            people: session
                .people
                .iter()
                .map(|p| PersonView {
                    id: p.id.to_string(),
                    name: p.name.clone(),
                    share: session.share_of(p.id).to_string(),
                })
                .collect(),
            items: session
                .items
                .iter()
                .map(|i| ItemView {
                    description: i.description.clone(),
                    amount: i.amount.to_string(),
                    included_in_split: i.included_in_split,
                    assigned_to: i.assigned_to.iter().map(|id| id.to_string()).collect(),
                })
                .collect(),
            total: session.total().to_string(),
            preview_hash: session.preview.as_ref().map(|p| p.hash_hex.clone()),
            error: session.error.clone(),
            processing: session.processing,
        }
    }
}
