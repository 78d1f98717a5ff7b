//! Server-rendered HTML pages
//!
//! Plain string rendering with a shared layout. Anything that came from a
//! user or the database goes through `escape`.

use axum::http::StatusCode;

use super::forms::{DoctorForm, PatientForm};
use crate::db::{Doctor, DoctorWithCount, Patient};
use crate::models::ValidationError;

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title} - Hospital</title>
  <style>
    body {{ font-family: system-ui, sans-serif; margin: 2rem auto; max-width: 56rem; padding: 0 1rem; }}
    nav a {{ margin-right: 1rem; }}
    table {{ border-collapse: collapse; width: 100%; }}
    th, td {{ border-bottom: 1px solid #ddd; padding: 0.4rem; text-align: left; }}
    form.inline {{ display: inline; }}
    label {{ display: block; margin-top: 0.75rem; }}
    .error {{ color: #b00020; border: 1px solid #b00020; padding: 0.5rem; }}
  </style>
</head>
<body>
  <nav><a href="/">Home</a><a href="/patients">Patients</a><a href="/doctors">Doctors</a></nav>
  <h1>{title}</h1>
{body}
</body>
</html>
"#,
        title = escape(title),
        body = body,
    )
}

fn error_banner(error: Option<&ValidationError>) -> String {
    match error {
        Some(e) => format!(r#"  <p class="error">{}</p>"#, escape(&e.to_string())),
        None => String::new(),
    }
}

pub fn index() -> String {
    layout(
        "Hospital Records",
        r#"  <ul>
    <li><a href="/patients">Patients</a> (<a href="/patients/add">add</a>)</li>
    <li><a href="/doctors">Doctors</a> (<a href="/doctors/add">add</a>)</li>
    <li>JSON: <a href="/api/patients">/api/patients</a>, <a href="/api/doctors">/api/doctors</a></li>
  </ul>"#,
    )
}

/// Patient list. `doctors` is used to show the assigned doctor's name.
pub fn patients(patients: &[Patient], doctors: &[Doctor]) -> String {
    let mut body = String::from(r#"  <p><a href="/patients/add">Add patient</a></p>"#);

    if patients.is_empty() {
        body.push_str("\n  <p>No patients yet.</p>");
        return layout("Patients", &body);
    }

    body.push_str(
        "\n  <table>\n    <tr><th>ID</th><th>Name</th><th>Age</th><th>Complaint</th><th>Doctor</th><th></th></tr>",
    );
    for p in patients {
        let doctor = p
            .doctor_id
            .and_then(|id| doctors.iter().find(|d| d.id == id))
            .map(|d| escape(&d.name))
            .unwrap_or_else(|| "Unassigned".to_string());

        body.push_str(&format!(
            r#"
    <tr><td>{id}</td><td>{name}</td><td>{age}</td><td>{complaint}</td><td>{doctor}</td><td><form class="inline" method="post" action="/patients/{id}/delete"><button type="submit">Delete</button></form></td></tr>"#,
            id = p.id,
            name = escape(&p.name),
            age = p.age,
            complaint = escape(&p.complaint),
            doctor = doctor,
        ));
    }
    body.push_str("\n  </table>");

    layout("Patients", &body)
}

pub fn patient_form(
    doctors: &[Doctor],
    form: &PatientForm,
    error: Option<&ValidationError>,
) -> String {
    let mut options = String::from(r#"<option value="">Unassigned</option>"#);
    for d in doctors {
        let id = d.id.to_string();
        let selected = if form.doctor_id.trim() == id { " selected" } else { "" };
        options.push_str(&format!(
            r#"<option value="{id}"{selected}>{name} ({specialty})</option>"#,
            name = escape(&d.name),
            specialty = escape(&d.specialty),
        ));
    }

    let body = format!(
        r#"{error}
  <form method="post" action="/patients/add">
    <label>Name <input name="name" value="{name}" required></label>
    <label>Age <input name="age" type="number" min="0" max="150" value="{age}" required></label>
    <label>Complaint <input name="complaint" value="{complaint}" required></label>
    <label>Doctor <select name="doctor_id">{options}</select></label>
    <p><button type="submit">Save</button> <a href="/patients">Cancel</a></p>
  </form>"#,
        error = error_banner(error),
        name = escape(&form.name),
        age = escape(&form.age),
        complaint = escape(&form.complaint),
    );

    layout("Add Patient", &body)
}

pub fn doctors(doctors: &[DoctorWithCount]) -> String {
    let mut body = String::from(r#"  <p><a href="/doctors/add">Add doctor</a></p>"#);

    if doctors.is_empty() {
        body.push_str("\n  <p>No doctors yet.</p>");
        return layout("Doctors", &body);
    }

    body.push_str("\n  <table>\n    <tr><th>ID</th><th>Name</th><th>Specialty</th><th>Patients</th></tr>");
    for d in doctors {
        body.push_str(&format!(
            "\n    <tr><td>{id}</td><td><a href=\"/doctors/{id}\">{}</a></td><td>{}</td><td>{}</td></tr>",
            escape(&d.name),
            escape(&d.specialty),
            d.patient_count,
            id = d.id,
        ));
    }
    body.push_str("\n  </table>");

    layout("Doctors", &body)
}

/// One doctor and the patients assigned to them.
pub fn doctor_detail(doctor: &Doctor, patients: &[Patient]) -> String {
    let mut body = format!(
        "  <p>Specialty: {}</p>\n  <h2>Patients</h2>",
        escape(&doctor.specialty)
    );

    if patients.is_empty() {
        body.push_str("\n  <p>No patients assigned.</p>");
    } else {
        body.push_str("\n  <table>\n    <tr><th>ID</th><th>Name</th><th>Age</th><th>Complaint</th></tr>");
        for p in patients {
            body.push_str(&format!(
                "\n    <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                p.id,
                escape(&p.name),
                p.age,
                escape(&p.complaint),
            ));
        }
        body.push_str("\n  </table>");
    }
    body.push_str("\n  <p><a href=\"/doctors\">Back to doctors</a></p>");

    layout(&doctor.name, &body)
}

pub fn doctor_form(form: &DoctorForm, error: Option<&ValidationError>) -> String {
    let body = format!(
        r#"{error}
  <form method="post" action="/doctors/add">
    <label>Name <input name="name" value="{name}" required></label>
    <label>Specialty <input name="specialty" value="{specialty}" required></label>
    <p><button type="submit">Save</button> <a href="/doctors">Cancel</a></p>
  </form>"#,
        error = error_banner(error),
        name = escape(&form.name),
        specialty = escape(&form.specialty),
    );

    layout("Add Doctor", &body)
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    let title = status.canonical_reason().unwrap_or("Error");
    layout(
        title,
        &format!(
            r#"  <p class="error">{}</p>
  <p><a href="/">Back to home</a></p>"#,
            escape(message)
        ),
    )
}
