use super::*;

#[test]
fn registration_serializes_with_camel_case_keys() {
    let reg = Registration {
        full_name: "Ann Lee".to_owned(),
        email: "ann@example.com".to_owned(),
        date_of_birth: "04/23/91".to_owned(),
        phone_number: "+1 1234567890".to_owned(),
        password: "correct-horse".to_owned(),
        confirm_password: "correct-horse".to_owned(),
    };
    let json = serde_json::to_value(&reg).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "fullName": "Ann Lee",
            "email": "ann@example.com",
            "dateOfBirth": "04/23/91",
            "phoneNumber": "+1 1234567890",
            "password": "correct-horse",
            "confirmPassword": "correct-horse",
        })
    );
}

#[test]
fn credentials_serialize_as_email_and_password() {
    let creds = Credentials { email: "a@b.com".to_owned(), password: "x".to_owned() };
    assert_eq!(
        serde_json::to_value(&creds).unwrap(),
        serde_json::json!({ "email": "a@b.com", "password": "x" })
    );
}

#[test]
fn login_reply_reads_user_name_key() {
    let reply: LoginReply = serde_json::from_str(r#"{"token":"t1","userName":"Ann"}"#).unwrap();
    assert_eq!(reply.token.as_deref(), Some("t1"));
    assert_eq!(reply.user_name.as_deref(), Some("Ann"));
}

#[test]
fn login_reply_tolerates_missing_fields() {
    let reply: LoginReply = serde_json::from_str("{}").unwrap();
    assert_eq!(reply, LoginReply::default());
}

#[test]
fn signup_reply_only_201_counts_as_created() {
    assert!(SignupReply { status: 201 }.created());
    assert!(!SignupReply { status: 200 }.created());
}
