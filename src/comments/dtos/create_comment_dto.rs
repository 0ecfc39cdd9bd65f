use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::ValidationErrors;

use crate::app::util::validation::{rules, FieldReader, ValidationErrorKind};

pub const VALUE: &str = "value";
pub const USER_ID: &str = "userId";

const USER_ID_FORMAT_MESSAGE: &str = "userId must be a valid object id.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentDto {
    pub value: String,
    pub user_id: String,
    /// Keys other than `value` and `userId`, carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CreateCommentDto {
    pub fn from_value(payload: &Value) -> Result<Self, ValidationErrors> {
        let mut fields = FieldReader::new(payload)?;

        let value = fields.string(VALUE, ValidationErrorKind::EmptyField, |_| Ok(()));
        let user_id = fields.required(USER_ID, validate_user_id);

        let dto = match (value, user_id) {
            (Some(value), Some(user_id)) => Some(Self {
                value: value.to_string(),
                user_id: user_id.to_string(),
                extra: fields.rest(&[VALUE, USER_ID]),
            }),
            _ => None,
        };

        fields.finish(dto)
    }
}

fn validate_user_id(value: &str) -> rules::RuleResult {
    rules::object_id(value, USER_ID_FORMAT_MESSAGE)
}
