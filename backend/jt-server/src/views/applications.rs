//! Server-rendered pages for the job application resource

use crate::views::ViewError;
use crate::views::layout::{self, escape};

use jt_core::Application;
use uuid::Uuid;

/// List page: every application the user has, in stored order
pub fn index(user_id: Uuid, applications: &[Application]) -> String {
    let mut items = String::new();
    for application in applications {
        items.push_str(&format!(
            "<li><a href=\"/users/{user_id}/applications/{id}\">{company} - {title}</a> ({stage})</li>\n",
            user_id = user_id,
            id = application.id,
            company = escape(&application.company),
            title = escape(&application.title),
            stage = escape(&application.stage),
        ));
    }

    let body = format!(
        "<h1>Applications</h1>\n\
         <ul>\n{items}</ul>\n\
         <p><a href=\"/users/{user_id}/applications/new\">New application</a></p>",
    );

    layout::page("Applications", &body)
}

/// Form for a new application
pub fn new_form(user_id: Uuid) -> String {
    let body = format!(
        "<h1>New application</h1>\n\
         <form method=\"post\" action=\"/users/{user_id}/applications\">\n\
         <label>Company <input name=\"company\" required></label>\n\
         <label>Title <input name=\"title\" required></label>\n\
         <label>Stage <input name=\"stage\" value=\"Applied\" required></label>\n\
         <label>Notes <textarea name=\"notes\"></textarea></label>\n\
         <label>Link <input name=\"link\"></label>\n\
         <button type=\"submit\">Save</button>\n\
         </form>\n\
         <p><a href=\"/users/{user_id}/applications\">Back to applications</a></p>",
    );

    layout::page("New application", &body)
}

/// Detail page for one application
///
/// The record is optional because routing passes along whatever the lookup
/// found. This template cannot render without one.
pub fn show(user_id: Uuid, application: Option<&Application>) -> Result<String, ViewError> {
    let application = application.ok_or(ViewError::MissingContext {
        template: "applications/show",
        name: "application",
    })?;

    let mut body = format!(
        "<h1>{company} - {title}</h1>\n\
         <p>Stage: {stage}</p>\n",
        company = escape(&application.company),
        title = escape(&application.title),
        stage = escape(&application.stage),
    );

    if let Some(notes) = application.notes.as_deref()
        && !notes.is_empty()
    {
        body.push_str(&format!("<p>Notes: {}</p>\n", escape(notes)));
    }

    if let Some(link) = application.link.as_deref()
        && !link.is_empty()
    {
        let link = escape(link);
        body.push_str(&format!("<p>Posting: <a href=\"{link}\">{link}</a></p>\n"));
    }

    body.push_str(&format!(
        "<p><a href=\"/users/{user_id}/applications/{id}/edit\">Edit</a></p>\n\
         <form method=\"post\" action=\"/users/{user_id}/applications/{id}?_method=delete\">\n\
         <button type=\"submit\">Delete</button>\n\
         </form>\n\
         <p><a href=\"/users/{user_id}/applications\">Back to applications</a></p>",
        user_id = user_id,
        id = application.id,
    ));

    Ok(layout::page("Application", &body))
}

/// Edit form for one application, prefilled with its current values
///
/// Like [`show`], the record is optional and required to render.
pub fn edit(user_id: Uuid, application: Option<&Application>) -> Result<String, ViewError> {
    let application = application.ok_or(ViewError::MissingContext {
        template: "applications/edit",
        name: "application",
    })?;

    let body = format!(
        "<h1>Edit application</h1>\n\
         <form method=\"post\" action=\"/users/{user_id}/applications/{id}?_method=put\">\n\
         <label>Company <input name=\"company\" value=\"{company}\" required></label>\n\
         <label>Title <input name=\"title\" value=\"{title}\" required></label>\n\
         <label>Stage <input name=\"stage\" value=\"{stage}\" required></label>\n\
         <label>Notes <textarea name=\"notes\">{notes}</textarea></label>\n\
         <label>Link <input name=\"link\" value=\"{link}\"></label>\n\
         <button type=\"submit\">Save</button>\n\
         </form>\n\
         <p><a href=\"/users/{user_id}/applications/{id}\">Back to application</a></p>",
        user_id = user_id,
        id = application.id,
        company = escape(&application.company),
        title = escape(&application.title),
        stage = escape(&application.stage),
        notes = escape(application.notes.as_deref().unwrap_or_default()),
        link = escape(application.link.as_deref().unwrap_or_default()),
    );

    Ok(layout::page("Edit application", &body))
}
