use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

/// A single person record.
///
/// `id` stays `None` until the record is first persisted; the storage engine
/// assigns it and it never changes afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, FromRow)]
pub struct Person {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub mobile: Option<String>,
}

impl Person {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        mobile: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            email: Some(email.into()),
            mobile: Some(mobile.into()),
        }
    }
}

/// Form body posted by the add page. Any `id` field is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewPersonForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub mobile: Option<String>,
}

impl From<NewPersonForm> for Person {
    fn from(form: NewPersonForm) -> Self {
        Self {
            id: None,
            name: form.name,
            email: form.email,
            mobile: form.mobile,
        }
    }
}

/// Form body posted by the edit page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonForm {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub mobile: Option<String>,
}

impl From<PersonForm> for Person {
    fn from(form: PersonForm) -> Self {
        Self {
            id: form.id,
            name: form.name,
            email: form.email,
            mobile: form.mobile,
        }
    }
}

// The edit page posts `id=` for a record that was never found.
fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<i64>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
