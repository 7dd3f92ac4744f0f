//! User Handlers

pub(crate) mod delete;
pub(crate) mod index;
pub(crate) mod orders;

#[cfg(test)]
mod tests {
    use shopdesk_app::domain::users::records::{UserId, UserRecord};

    pub(super) fn make_user(id: i64, first_name: &str, last_name: &str) -> UserRecord {
        UserRecord {
            id: UserId::new(id),
            first_name: Some(first_name.to_string()),
            last_name: Some(last_name.to_string()),
            email: Some(format!("{}@example.test", first_name.to_lowercase())),
            phone: None,
        }
    }
}
