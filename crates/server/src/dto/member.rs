use carming::member::{Gender, Member};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDto {
    pub id: u64,
    pub name: String,
    pub nickname: String,
    pub phone_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// `YYYY-MM-DD`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
}

impl From<&Member> for MemberDto {
    fn from(member: &Member) -> Self {
        Self {
            id: member.id,
            name: member.name.to_string(),
            nickname: member.nickname.to_string(),
            phone_number: member.phone_number.to_string(),
            gender: member.gender,
            birth_date: member.birth_date.map(|date| date.to_string()),
        }
    }
}
