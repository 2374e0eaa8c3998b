//! Resource management integration tests.
//!
//! Cover pagination, partial updates and the relation endpoints across
//! users, groups, roles and permissions.

use aras_auth::{
    CreatePermissionRequest, CreateRoleRequest, UpdateGroupRequest, UpdateUserRequest, UserStatus,
};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{TestServer, endpoint, json_body, success};

#[tokio::test]
async fn test_pagination_walk() {
    let ts = TestServer::start().await;

    for (page, ids) in [(1, vec!["u1", "u2"]), (2, vec!["u3"])] {
        let items: Vec<_> = ids.iter().map(|id| json!({"id": id})).collect();
        Mock::given(method("GET"))
            .and(path(endpoint("/users")))
            .and(query_param("page", page.to_string()))
            .and(query_param("limit", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(success(json!({
                "users": items,
                "total": 3,
                "page": page,
                "limit": 2
            }))))
            .expect(1)
            .mount(&ts.server)
            .await;
    }

    let users = ts.client().users();
    let mut seen = Vec::new();
    let mut page = 1;
    loop {
        let batch = users.list().page(page).limit(2).await.unwrap();
        seen.extend(batch.iter().map(|u| u.id.clone()));
        if !batch.has_next() {
            break;
        }
        page += 1;
    }

    assert_eq!(seen, ["u1", "u2", "u3"]);
}

#[tokio::test]
async fn test_list_defaults_and_empty_data() {
    let ts = TestServer::start().await;

    Mock::given(method("GET"))
        .and(path(endpoint("/permissions")))
        .and(query_param("page", "1"))
        .and(query_param("limit", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true, "data": null})))
        .expect(1)
        .mount(&ts.server)
        .await;

    let page = ts.client().permissions().list().await.unwrap();
    assert!(page.is_empty());
    assert_eq!(page.total, 0);
    assert_eq!(page.page, 1);
    assert_eq!(page.limit, 20);
    assert!(!page.has_next());
}

#[tokio::test]
async fn test_partial_user_update_sends_only_set_fields() {
    let ts = TestServer::start().await;

    Mock::given(method("PUT"))
        .and(path(endpoint("/users/u1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(json!({
            "id": "u1",
            "first_name": "Ada",
            "status": "suspended"
        }))))
        .mount(&ts.server)
        .await;

    let users = ts.client().users();
    users
        .update("u1", UpdateUserRequest::new().with_first_name("Ada"))
        .await
        .unwrap();
    let user = users
        .update("u1", UpdateUserRequest::new().with_status(UserStatus::Suspended))
        .await
        .unwrap();
    assert_eq!(user.parsed_status(), Some(UserStatus::Suspended));

    let requests = ts.requests_to("/users/u1").await;
    assert_eq!(json_body(&requests[0]), json!({"first_name": "Ada"}));
    assert_eq!(json_body(&requests[1]), json!({"status": "suspended"}));
}

#[tokio::test]
async fn test_group_membership_and_roles() {
    let ts = TestServer::start().await;

    Mock::given(method("POST"))
        .and(path(endpoint("/groups/g1/members")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(&ts.server)
        .await;

    Mock::given(method("GET"))
        .and(path(endpoint("/groups/g1/members")))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(json!([
            {"id": "u1", "email": "a@b.com"},
            {"id": "u2", "email": "c@d.com"}
        ]))))
        .mount(&ts.server)
        .await;

    Mock::given(method("DELETE"))
        .and(path(endpoint("/groups/g1/members/u2")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&ts.server)
        .await;

    Mock::given(method("POST"))
        .and(path(endpoint("/groups/g1/roles")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(&ts.server)
        .await;

    Mock::given(method("PUT"))
        .and(path(endpoint("/groups/g1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(json!({
            "id": "g1",
            "name": "staff",
            "description": "everyone"
        }))))
        .mount(&ts.server)
        .await;

    let groups = ts.client().groups();
    groups.add_member("g1", "u2").await.unwrap();
    let members = groups.members("g1").await.unwrap();
    assert_eq!(members.len(), 2);
    groups.remove_member("g1", "u2").await.unwrap();
    groups.assign_role("g1", "r1").await.unwrap();
    let group = groups
        .update("g1", UpdateGroupRequest::new().with_description("everyone"))
        .await
        .unwrap();
    assert_eq!(group.description, "everyone");

    assert_eq!(
        json_body(&ts.requests_to("/groups/g1/members").await[0]),
        json!({"user_id": "u2"})
    );
    assert_eq!(
        json_body(&ts.requests_to("/groups/g1/roles").await[0]),
        json!({"role_id": "r1"})
    );
    assert_eq!(
        json_body(&ts.requests_to("/groups/g1").await[0]),
        json!({"description": "everyone"})
    );
}

#[tokio::test]
async fn test_ids_are_path_encoded() {
    let ts = TestServer::start().await;

    Mock::given(method("DELETE"))
        .and(path(endpoint("/users/a%2Fb/roles/r%201")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&ts.server)
        .await;

    ts.client().users().remove_role("a/b", "r 1").await.unwrap();
}

#[tokio::test]
async fn test_role_permission_setup() {
    let ts = TestServer::start().await;

    Mock::given(method("POST"))
        .and(path(endpoint("/permissions")))
        .respond_with(ResponseTemplate::new(201).set_body_json(success(json!({
            "id": "p1",
            "resource": "invoices",
            "action": "approve",
            "is_active": true
        }))))
        .mount(&ts.server)
        .await;

    Mock::given(method("POST"))
        .and(path(endpoint("/roles")))
        .respond_with(ResponseTemplate::new(201).set_body_json(success(json!({
            "id": "r1",
            "name": "approver"
        }))))
        .mount(&ts.server)
        .await;

    Mock::given(method("POST"))
        .and(path(endpoint("/roles/r1/permissions")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(&ts.server)
        .await;

    Mock::given(method("GET"))
        .and(path(endpoint("/roles/r1/permissions")))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(json!([
            {"id": "p1", "resource": "invoices", "action": "approve"}
        ]))))
        .mount(&ts.server)
        .await;

    let client = ts.client();
    let permission = client
        .permissions()
        .create(CreatePermissionRequest::new("invoices", "approve"))
        .await
        .unwrap();
    assert_eq!(permission.key(), "invoices:approve");

    let role = client
        .roles()
        .create(CreateRoleRequest::new("approver").with_description("can approve invoices"))
        .await
        .unwrap();
    client.roles().assign_permission(&role.id, &permission.id).await.unwrap();

    let granted = client.roles().permissions(&role.id).await.unwrap();
    assert!(granted.iter().any(|p| p.allows("invoices", "approve")));

    assert_eq!(
        json_body(&ts.requests_to("/permissions").await[0]),
        json!({"resource": "invoices", "action": "approve", "description": ""})
    );
    assert_eq!(
        json_body(&ts.requests_to("/roles").await[0]),
        json!({"name": "approver", "description": "can approve invoices"})
    );
    assert_eq!(
        json_body(&ts.requests_to("/roles/r1/permissions").await[0]),
        json!({"permission_id": "p1"})
    );
}
