//! 资料 CRUD 集成测试

mod support;

use confetti_common::{SubscriberId, UserId};
use confetti_cqrs_core::{CommandHandler, QueryHandler};
use confetti_errors::AppError;

use support::{InMemorySubscriberRepository, ann_lee_input, wire_module};
use user_mgmt::application::commands::{
    DeleteUserCommand, RegisterUserCommand, UpdateOutcome, UpdateUserCommand,
};
use user_mgmt::application::queries::{GetUserQuery, ListUsersQuery};
use user_mgmt::application::validation::RawRegistration;
use user_mgmt::domain::subscriber::Subscriber;
use user_mgmt::domain::value_objects::Email;

async fn register_ann(module: &user_mgmt::infrastructure::UserModule) -> UserId {
    let created = module
        .register_user
        .handle(RegisterUserCommand {
            input: ann_lee_input(),
        })
        .await
        .unwrap();
    created.user().unwrap().id.clone()
}

#[tokio::test]
async fn test_get_user_by_id() {
    let (module, _users) = wire_module(InMemorySubscriberRepository::empty());
    let id = register_ann(&module).await;

    let user = module
        .get_user
        .handle(GetUserQuery { id: id.clone() })
        .await
        .unwrap();
    assert_eq!(user.id, id);
    assert_eq!(user.full_name(), "Ann Lee");
}

#[tokio::test]
async fn test_get_missing_user_is_not_found() {
    let (module, _users) = wire_module(InMemorySubscriberRepository::empty());

    let result = module
        .get_user
        .handle(GetUserQuery { id: UserId::new() })
        .await;

    // 错误一致地走错误通道，不会静默
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_list_users() {
    let (module, _users) = wire_module(InMemorySubscriberRepository::empty());
    register_ann(&module).await;

    let users = module.list_users.handle(ListUsersQuery).await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].email.as_str(), "ann@x.com");
}

#[tokio::test]
async fn test_update_replaces_fields_and_keeps_link() {
    let subscriber = Subscriber::new(SubscriberId::new(), Email::new("ann@x.com").unwrap());
    let subscriber_id = subscriber.id.clone();
    let (module, _users) = wire_module(InMemorySubscriberRepository::with(vec![subscriber]));
    let id = register_ann(&module).await;

    let result = module
        .update_user
        .handle(UpdateUserCommand {
            id: id.clone(),
            input: RawRegistration {
                first: "Anna".to_string(),
                last: "Li".to_string(),
                email: "anna@x.com".to_string(),
                zip_code: "90210".to_string(),
                password: "newsecret".to_string(),
            },
        })
        .await
        .unwrap();

    let UpdateOutcome::Updated { user, outcome } = result else {
        panic!("expected update to succeed");
    };
    assert_eq!(outcome.redirect, format!("/users/{}", id));
    assert_eq!(user.full_name(), "Anna Li");
    assert_eq!(user.email.as_str(), "anna@x.com");
    assert_eq!(user.zip_code.unwrap().value(), 90210);
    // 订阅者关联在更新时保持不变
    assert_eq!(user.subscribed_account, Some(subscriber_id));
    // 新密码已生效
    assert!(user.password_hash.unwrap().verify("newsecret").unwrap());
}

#[tokio::test]
async fn test_update_missing_user_is_not_found() {
    let (module, _users) = wire_module(InMemorySubscriberRepository::empty());

    let result = module
        .update_user
        .handle(UpdateUserCommand {
            id: UserId::new(),
            input: ann_lee_input(),
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_update_with_invalid_zip_is_rejected() {
    let (module, _users) = wire_module(InMemorySubscriberRepository::empty());
    let id = register_ann(&module).await;

    let mut input = ann_lee_input();
    input.zip_code = "12".to_string();

    let result = module
        .update_user
        .handle(UpdateUserCommand { id, input })
        .await
        .unwrap();

    assert!(matches!(result, UpdateOutcome::Rejected { .. }));
    assert!(result.outcome().messages[0].text.contains("Zip Code is not valid."));
}

#[tokio::test]
async fn test_delete_user() {
    let (module, users) = wire_module(InMemorySubscriberRepository::empty());
    let id = register_ann(&module).await;

    let outcome = module
        .delete_user
        .handle(DeleteUserCommand { id: id.clone() })
        .await
        .unwrap();

    assert_eq!(outcome.redirect, "/users");
    assert!(outcome.messages.is_empty());
    assert_eq!(users.count().await, 0);

    // 再删一次：NotFound 走错误通道
    let result = module.delete_user.handle(DeleteUserCommand { id }).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}
