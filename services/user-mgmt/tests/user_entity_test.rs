//! 用户实体测试

use confetti_common::{CourseId, SubscriberId};
use confetti_domain_core::{AggregateRoot, Entity};
use user_mgmt::domain::user::User;
use user_mgmt::domain::value_objects::{Email, HashedPassword, PersonName, ZipCode};

fn create_test_user() -> User {
    User::new(
        PersonName::new("Ann", "Lee").unwrap(),
        Email::new("ann@x.com").unwrap(),
        Some(ZipCode::new("30301").unwrap()),
    )
}

#[test]
fn test_new_user_defaults() {
    let user = create_test_user();
    assert!(user.password_hash.is_none());
    assert!(user.subscribed_account.is_none());
    assert!(user.courses.is_empty());
    assert_eq!(user.email.as_str(), "ann@x.com");
}

#[test]
fn test_full_name_is_derived() {
    let user = create_test_user();
    assert_eq!(user.full_name(), "Ann Lee");
}

#[test]
fn test_attach_subscriber_only_once() {
    let mut user = create_test_user();
    let first = SubscriberId::new();
    let second = SubscriberId::new();

    user.attach_subscriber(first.clone());
    assert_eq!(user.subscribed_account, Some(first.clone()));

    // 已设置后不再覆盖
    user.attach_subscriber(second);
    assert_eq!(user.subscribed_account, Some(first));
}

#[test]
fn test_set_credential_touches_audit() {
    let mut user = create_test_user();
    let created = user.audit_info.created_at;

    user.set_credential(HashedPassword::from_plain("secret1").unwrap());
    assert!(user.password_hash.is_some());
    assert!(user.audit_info.updated_at >= created);
}

#[test]
fn test_apply_profile_update() {
    let mut user = create_test_user();
    let id = user.id.clone();

    user.apply_profile_update(
        PersonName::new("Anna", "Li").unwrap(),
        Email::new("anna@x.com").unwrap(),
        Some(ZipCode::new("90210").unwrap()),
    );

    // 身份不变，字段被替换
    assert_eq!(user.id, id);
    assert_eq!(user.full_name(), "Anna Li");
    assert_eq!(user.email.as_str(), "anna@x.com");
    assert_eq!(user.zip_code.unwrap().value(), 90210);
}

#[test]
fn test_enroll_course_is_idempotent() {
    let mut user = create_test_user();
    let course = CourseId::new();

    user.enroll_course(course.clone());
    user.enroll_course(course);
    assert_eq!(user.courses.len(), 1);
}

#[test]
fn test_entity_traits() {
    let user = create_test_user();
    assert_eq!(Entity::id(&user), &user.id);
    assert_eq!(
        user.audit_info().created_at,
        user.audit_info.created_at
    );
}
