//! Wire Format
//!
//! JSON bodies of the login and task endpoints.

use serde::{Deserialize, Deserializer, Serialize};

use crate::{Task, TaskList};

/// Body of `GET /task/` responses and of `PUT /task/` requests and responses
///
/// The server answers `{"Tasks": null}` for an empty list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TasksEnvelope {
    #[serde(rename = "Tasks", default, deserialize_with = "null_as_empty")]
    pub tasks: Vec<Task>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Task>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Task>>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<TaskList> for TasksEnvelope {
    fn from(list: TaskList) -> Self {
        Self { tasks: list.into_tasks() }
    }
}

impl From<TasksEnvelope> for TaskList {
    fn from(envelope: TasksEnvelope) -> Self {
        TaskList::from_tasks(envelope.tasks)
    }
}

/// Body of `POST /login/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest<'a> {
    pub user: &'a str,
    pub password: &'a str,
}

/// Successful `POST /login/` response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_tasks() {
        let json = r#"{"Tasks":[
            {"id":1,"title":"Learn Go","completed":false},
            {"id":2,"title":"Buy bread","completed":true}
        ]}"#;
        let list: TaskList = serde_json::from_str::<TasksEnvelope>(json).unwrap().into();

        assert_eq!(list.len(), 2);
        assert_eq!(list.get(1).map(|t| t.title.as_str()), Some("Buy bread"));
        assert_eq!(list.remaining(), 1);
    }

    #[test]
    fn test_null_and_missing_tasks_are_empty() {
        let null: TasksEnvelope = serde_json::from_str(r#"{"Tasks":null}"#).unwrap();
        assert!(null.tasks.is_empty());

        let missing: TasksEnvelope = serde_json::from_str("{}").unwrap();
        assert!(missing.tasks.is_empty());
    }

    #[test]
    fn test_encode_uses_capitalized_key() {
        let mut list = TaskList::default();
        list.add("PROFIT!");
        let json = serde_json::to_value(TasksEnvelope::from(list)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"Tasks": [{"title": "PROFIT!", "completed": false}]})
        );
    }

    #[test]
    fn test_login_bodies() {
        let req = LoginRequest { user: "me@example.com", password: "hunter2" };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({"user": "me@example.com", "password": "hunter2"})
        );

        let res: LoginResponse = serde_json::from_str(r#"{"token":"abc.def"}"#).unwrap();
        assert_eq!(res.token, "abc.def");
    }
}
