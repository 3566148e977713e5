use crate::ViewError;
use crate::views::applications;

use jt_core::Application;

use uuid::Uuid;

fn sample_application() -> Application {
    Application::new(
        "Acme".to_string(),
        "Backend Engineer".to_string(),
        "Applied".to_string(),
        Some("Referred by June".to_string()),
        Some("https://careers.acme.test/backend".to_string()),
    )
}

#[test]
fn test_index_links_every_application() {
    let user_id = Uuid::new_v4();
    let applications = vec![
        sample_application(),
        Application::new(
            "Globex".to_string(),
            "Platform Engineer".to_string(),
            "Phone screen".to_string(),
            None,
            None,
        ),
    ];

    let html = applications::index(user_id, &applications);

    for application in &applications {
        assert!(html.contains(&format!(
            "/users/{}/applications/{}",
            user_id, application.id
        )));
    }
    assert!(html.contains("Acme - Backend Engineer"));
    assert!(html.contains("(Phone screen)"));
    assert!(html.contains(&format!("/users/{user_id}/applications/new")));
}

#[test]
fn test_index_with_no_applications_still_offers_the_form() {
    let user_id = Uuid::new_v4();

    let html = applications::index(user_id, &[]);

    assert!(html.contains("<h1>Applications</h1>"));
    assert!(html.contains(&format!("/users/{user_id}/applications/new")));
    assert!(!html.contains("<li>"));
}

#[test]
fn test_index_escapes_markup_in_company_names() {
    let user_id = Uuid::new_v4();
    let application = Application::new(
        "<script>alert(1)</script>".to_string(),
        "Engineer".to_string(),
        "Applied".to_string(),
        None,
        None,
    );

    let html = applications::index(user_id, &[application]);

    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(!html.contains("<script>"));
}

#[test]
fn test_new_form_posts_to_the_collection() {
    let user_id = Uuid::new_v4();

    let html = applications::new_form(user_id);

    assert!(html.contains(&format!(
        "action=\"/users/{user_id}/applications\""
    )));
    assert!(html.contains("name=\"company\""));
    assert!(html.contains("name=\"title\""));
    assert!(html.contains("name=\"stage\" value=\"Applied\""));
    assert!(html.contains("name=\"notes\""));
    assert!(html.contains("name=\"link\""));
}

#[test]
fn test_show_renders_fields_edit_link_and_delete_form() {
    let user_id = Uuid::new_v4();
    let application = sample_application();

    let html = applications::show(user_id, Some(&application)).unwrap();

    assert!(html.contains("Acme - Backend Engineer"));
    assert!(html.contains("Stage: Applied"));
    assert!(html.contains("Notes: Referred by June"));
    assert!(html.contains("https://careers.acme.test/backend"));
    assert!(html.contains(&format!(
        "/users/{}/applications/{}/edit",
        user_id, application.id
    )));
    assert!(html.contains(&format!(
        "action=\"/users/{}/applications/{}?_method=delete\"",
        user_id, application.id
    )));
}

#[test]
fn test_show_skips_empty_optional_fields() {
    let user_id = Uuid::new_v4();
    let application = Application::new(
        "Acme".to_string(),
        "Backend Engineer".to_string(),
        "Applied".to_string(),
        None,
        Some(String::new()),
    );

    let html = applications::show(user_id, Some(&application)).unwrap();

    assert!(!html.contains("Notes:"));
    assert!(!html.contains("Posting:"));
}

#[test]
fn test_show_without_an_application_is_a_render_error() {
    let result = applications::show(Uuid::new_v4(), None);

    assert!(matches!(
        result,
        Err(ViewError::MissingContext {
            template: "applications/show",
            ..
        })
    ));
}

#[test]
fn test_edit_prefills_current_values() {
    let user_id = Uuid::new_v4();
    let application = sample_application();

    let html = applications::edit(user_id, Some(&application)).unwrap();

    assert!(html.contains(&format!(
        "action=\"/users/{}/applications/{}?_method=put\"",
        user_id, application.id
    )));
    assert!(html.contains("name=\"company\" value=\"Acme\""));
    assert!(html.contains("name=\"title\" value=\"Backend Engineer\""));
    assert!(html.contains("name=\"stage\" value=\"Applied\""));
    assert!(html.contains(">Referred by June</textarea>"));
}

#[test]
fn test_edit_escapes_attribute_values() {
    let user_id = Uuid::new_v4();
    let application = Application::new(
        "Acme \"West\"".to_string(),
        "Engineer".to_string(),
        "Applied".to_string(),
        None,
        None,
    );

    let html = applications::edit(user_id, Some(&application)).unwrap();

    assert!(html.contains("value=\"Acme &quot;West&quot;\""));
}

#[test]
fn test_edit_without_an_application_is_a_render_error() {
    let result = applications::edit(Uuid::new_v4(), None);

    assert!(matches!(
        result,
        Err(ViewError::MissingContext {
            template: "applications/edit",
            ..
        })
    ));
}
