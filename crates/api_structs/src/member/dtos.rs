use huddle_domain::{Member, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDTO {
    pub id: ID,
    pub name: String,
    pub phone_number: Option<String>,
    pub slack_username: Option<String>,
}

impl MemberDTO {
    pub fn new(member: Member) -> Self {
        Self {
            id: member.id,
            name: member.name,
            phone_number: member.phone_number,
            slack_username: member.slack_username,
        }
    }
}
