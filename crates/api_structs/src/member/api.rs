use huddle_domain::Member;
use serde::{Deserialize, Serialize};

use crate::dtos::MemberDTO;

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberResponse {
    pub member: MemberDTO,
}

impl MemberResponse {
    pub fn new(member: Member) -> Self {
        Self {
            member: MemberDTO::new(member),
        }
    }
}

pub mod add_member {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: String,
        #[serde(default)]
        pub phone_number: Option<String>,
        #[serde(default)]
        pub slack_username: Option<String>,
    }

    pub type APIResponse = MemberResponse;
}

pub mod get_members {
    use super::*;

    /// A plain array of member rows, matching what the store returns.
    pub type APIResponse = Vec<MemberDTO>;
}
