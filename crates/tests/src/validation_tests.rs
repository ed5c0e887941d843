use pretty_assertions::assert_eq;
use shared_types::{LoginRequest, RegisterRequest};

#[test]
fn test_empty_login_reports_both_fields() {
    let errors = LoginRequest::default().form_errors();

    assert_eq!(errors.get("username").map(String::as_str), Some("Username is required"));
    assert_eq!(errors.get("password").map(String::as_str), Some("Password is required"));
}

#[test]
fn test_filled_login_is_valid() {
    let credentials = LoginRequest {
        username: "jdoe".to_string(),
        password: "secret".to_string(),
    };
    assert!(credentials.form_errors().is_empty());
}

#[test]
fn test_register_checks_email_and_date_format() {
    let profile = RegisterRequest {
        username: "jdoe".to_string(),
        email: "not-an-email".to_string(),
        password: "hunter22".to_string(),
        employee_name: "Jane Doe".to_string(),
        phone_number: "555-0100".to_string(),
        date_of_birth: "12/04/1990".to_string(),
    };
    let errors = profile.form_errors();

    assert_eq!(errors.len(), 2);
    assert_eq!(errors["email"], "Enter a valid email address");
    assert_eq!(errors["date_of_birth"], "Date of birth must be a date (YYYY-MM-DD)");
}

#[test]
fn test_empty_register_form_lists_every_required_field() {
    let errors = RegisterRequest::default().form_errors();

    for field in ["username", "password", "employee_name", "phone_number", "date_of_birth"] {
        assert!(errors.contains_key(field), "missing error for {field}");
    }
}
