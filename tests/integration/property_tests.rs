//! Property tests for record decoding and partial update bodies.

use aras_auth::{
    AuthResponse, Group, ListResponse, Permission, Role, TokenIntrospection,
    UpdatePermissionRequest, UpdateUserRequest, User,
};
use proptest::prelude::*;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value, json};

fn text() -> impl Strategy<Value = String> {
    "\\PC{0,12}"
}

fn user_mapping() -> impl Strategy<Value = Value> {
    (
        (text(), text(), text(), text(), text()),
        (any::<bool>(), any::<bool>(), text(), text()),
    )
        .prop_map(
            |((id, email, first_name, last_name, status), (verified, deleted, created, updated))| {
                json!({
                    "id": id,
                    "email": email,
                    "first_name": first_name,
                    "last_name": last_name,
                    "status": status,
                    "email_verified": verified,
                    "is_deleted": deleted,
                    "created_at": created,
                    "updated_at": updated
                })
            },
        )
}

/// Common fields of groups, roles and permissions.
fn catalog_mapping() -> impl Strategy<Value = Map<String, Value>> {
    (text(), text(), any::<bool>(), any::<bool>(), text(), text()).prop_map(
        |(id, description, active, deleted, created, updated)| {
            let mut map = Map::new();
            map.insert("id".into(), Value::String(id));
            map.insert("description".into(), Value::String(description));
            map.insert("is_active".into(), Value::Bool(active));
            map.insert("is_deleted".into(), Value::Bool(deleted));
            map.insert("created_at".into(), Value::String(created));
            map.insert("updated_at".into(), Value::String(updated));
            map
        },
    )
}

/// Decodes `mapping` and re-encodes the record.
fn reencode<T>(mapping: &Value) -> Value
where
    T: DeserializeOwned + Serialize,
{
    let record: T = serde_json::from_value(mapping.clone()).unwrap();
    serde_json::to_value(&record).unwrap()
}

fn insert_opt(map: &mut Map<String, Value>, key: &str, value: &Option<String>) {
    if let Some(v) = value {
        map.insert(key.to_string(), Value::String(v.clone()));
    }
}

proptest! {
    /// A fully populated user reproduces every field.
    #[test]
    fn prop_user_full_mapping(mapping in user_mapping()) {
        prop_assert_eq!(reencode::<User>(&mapping), mapping);
    }

    #[test]
    fn prop_group_full_mapping(mut map in catalog_mapping(), name in text()) {
        map.insert("name".into(), Value::String(name));
        let mapping = Value::Object(map);
        prop_assert_eq!(reencode::<Group>(&mapping), mapping);
    }

    #[test]
    fn prop_role_full_mapping(mut map in catalog_mapping(), name in text(), system in any::<bool>()) {
        map.insert("name".into(), Value::String(name));
        map.insert("is_system".into(), Value::Bool(system));
        let mapping = Value::Object(map);
        prop_assert_eq!(reencode::<Role>(&mapping), mapping);
    }

    #[test]
    fn prop_permission_full_mapping(
        mut map in catalog_mapping(),
        resource in text(),
        action in text(),
    ) {
        map.insert("resource".into(), Value::String(resource));
        map.insert("action".into(), Value::String(action));
        let mapping = Value::Object(map);
        prop_assert_eq!(reencode::<Permission>(&mapping), mapping);
    }

    #[test]
    fn prop_auth_response_full_mapping(
        access_token in text(),
        refresh_token in text(),
        expires_in in any::<i64>(),
        token_type in text(),
        user in user_mapping(),
    ) {
        let mapping = json!({
            "access_token": access_token,
            "refresh_token": refresh_token,
            "expires_in": expires_in,
            "token_type": token_type,
            "user": user
        });
        prop_assert_eq!(reencode::<AuthResponse>(&mapping), mapping);
    }

    #[test]
    fn prop_token_introspection_full_mapping(
        active in any::<bool>(),
        user_id in text(),
        email in text(),
        exp in any::<i64>(),
        scope in text(),
    ) {
        let mapping = json!({
            "active": active,
            "user_id": user_id,
            "email": email,
            "exp": exp,
            "scope": scope
        });
        prop_assert_eq!(reencode::<TokenIntrospection>(&mapping), mapping);
    }

    /// Any subset of user fields decodes, and absent fields take their
    /// defaults.
    #[test]
    fn prop_user_missing_fields_default(
        id in proptest::option::of("[a-z0-9_]{1,12}"),
        email in proptest::option::of("[a-z]{1,8}@[a-z]{1,8}\\.com"),
        first_name in proptest::option::of("\\PC{0,16}"),
        email_verified in proptest::option::of(any::<bool>()),
    ) {
        let mut map = Map::new();
        insert_opt(&mut map, "id", &id);
        insert_opt(&mut map, "email", &email);
        insert_opt(&mut map, "first_name", &first_name);
        if let Some(flag) = email_verified {
            map.insert("email_verified".to_string(), Value::Bool(flag));
        }

        let user: User = serde_json::from_value(Value::Object(map)).unwrap();
        prop_assert_eq!(user.id, id.unwrap_or_default());
        prop_assert_eq!(user.email, email.unwrap_or_default());
        prop_assert_eq!(user.first_name, first_name.unwrap_or_default());
        prop_assert_eq!(user.email_verified, email_verified.unwrap_or(false));
        prop_assert!(user.last_name.is_empty());
        prop_assert!(!user.is_deleted);
    }

    /// An update body names exactly the fields that were set.
    #[test]
    fn prop_user_update_body_has_only_set_fields(
        first_name in proptest::option::of("\\PC{0,16}"),
        last_name in proptest::option::of("\\PC{0,16}"),
        status in proptest::option::of(prop_oneof!["active", "inactive", "suspended"]),
    ) {
        let mut request = UpdateUserRequest::new();
        if let Some(v) = &first_name {
            request = request.with_first_name(v.clone());
        }
        if let Some(v) = &last_name {
            request = request.with_last_name(v.clone());
        }
        if let Some(v) = &status {
            request = request.with_raw_status(v.clone());
        }

        let body = serde_json::to_value(&request).unwrap();
        let object = body.as_object().unwrap();
        let expected = [first_name.is_some(), last_name.is_some(), status.is_some()]
            .iter()
            .filter(|set| **set)
            .count();
        prop_assert_eq!(object.len(), expected);
        prop_assert_eq!(request.is_empty(), expected == 0);
        if let Some(v) = first_name {
            prop_assert_eq!(&object["first_name"], &Value::String(v));
        }
    }

    /// `is_active: false` is sent, not dropped as a default.
    #[test]
    fn prop_permission_update_keeps_false(is_active in any::<bool>()) {
        let request = UpdatePermissionRequest::new().with_active(is_active);
        let body = serde_json::to_value(&request).unwrap();
        prop_assert_eq!(body, json!({"is_active": is_active}));
    }

    /// `has_next` holds exactly when items remain past this page.
    #[test]
    fn prop_has_next(page in 1u32..1_000, limit in 1u32..500, total in 0u64..1_000_000) {
        let list: ListResponse<User> = serde_json::from_value(json!({
            "items": [],
            "total": total,
            "page": page,
            "limit": limit
        }))
        .unwrap();
        let shown = u64::from(page) * u64::from(limit);
        prop_assert_eq!(list.has_next(), shown < total);
    }
}
