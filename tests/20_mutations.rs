mod common;

use anyhow::Result;
use reqwest::header::LOCATION;
use reqwest::StatusCode;
use student_registry::database::StudentForm;

use common::{names, student_form};

#[tokio::test]
async fn add_redirects_with_success_flash() -> Result<()> {
    let server = common::TestServer::spawn().await?;

    let res = common::client()
        .post(server.url("/add_student"))
        .form(&student_form("  Prerna Hasija ", "Delhi University", "Graduated"))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(res.headers()[LOCATION], "/");

    let page = common::follow_flash(&server, &res).await?;
    assert_eq!(page["flash"]["level"], "success");
    assert_eq!(page["flash"]["message"], "Student Prerna Hasija added successfully!");
    assert_eq!(names(&page), vec!["Prerna Hasija"]);

    Ok(())
}

#[tokio::test]
async fn add_with_blank_field_is_rejected() -> Result<()> {
    let server = common::TestServer::spawn().await?;

    let res = common::client()
        .post(server.url("/add_student"))
        .form(&student_form("Rahul Sharma", "   ", "Employed"))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let payload = res.json::<serde_json::Value>().await?;
    assert_eq!(payload["code"], "VALIDATION_ERROR");
    assert_eq!(payload["message"], "All fields are required!");
    assert!(payload["field_errors"]["college_university"].is_string(), "payload: {}", payload);
    assert_eq!(server.count().await?, 0);

    Ok(())
}

#[tokio::test]
async fn add_form_is_blank() -> Result<()> {
    let server = common::TestServer::spawn().await?;

    let res = common::client().get(server.url("/add_student")).send().await?;
    assert_eq!(res.status(), StatusCode::OK);

    let payload = res.json::<serde_json::Value>().await?;
    assert_eq!(payload["data"]["values"]["student_name"], "");

    Ok(())
}

#[tokio::test]
async fn edit_round_trip_keeps_identity() -> Result<()> {
    let server = common::TestServer::spawn().await?;
    let id = server
        .insert(StudentForm::new("Rahul Sharma", "2021-22", "BCA", "Mumbai University", "Job Seeking"))
        .await?;

    let res = common::client().get(server.url(&format!("/edit_student/{}", id))).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let payload = res.json::<serde_json::Value>().await?;
    assert_eq!(payload["data"]["values"]["current_status"], "Job Seeking");

    let res = common::client()
        .post(server.url(&format!("/edit_student/{}", id)))
        .form(&student_form("Rahul Sharma", "Mumbai University", "Employed"))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);

    let page = common::follow_flash(&server, &res).await?;
    assert_eq!(page["flash"]["message"], "Student Rahul Sharma updated successfully!");

    let student = &page["data"]["students"][0];
    assert_eq!(student["id"], id);
    assert_eq!(student["current_status"], "Employed");
    assert!(
        common::timestamp(student, "updated_at") >= common::timestamp(student, "created_at"),
        "updated_at went backwards: {}",
        student
    );

    Ok(())
}

#[tokio::test]
async fn edit_unknown_student_is_404() -> Result<()> {
    let server = common::TestServer::spawn().await?;

    let res = common::client().get(server.url("/edit_student/999")).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = common::client()
        .post(server.url("/edit_student/999"))
        .form(&student_form("Nobody", "Nowhere", "Employed"))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn delete_removes_exactly_one_row() -> Result<()> {
    let server = common::TestServer::spawn_seeded().await?;
    let before = server.count().await?;
    let victim = server.state.students.find(1).await?;

    let res = common::client().post(server.url("/delete_student/1")).send().await?;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);

    let page = common::follow_flash(&server, &res).await?;
    assert_eq!(page["flash"]["level"], "success");
    assert_eq!(
        page["flash"]["message"],
        format!("Student {} deleted successfully!", victim.student_name)
    );
    assert_eq!(server.count().await?, before - 1);
    assert!(!names(&page).contains(&victim.student_name));

    Ok(())
}

#[tokio::test]
async fn delete_unknown_student_warns() -> Result<()> {
    let server = common::TestServer::spawn_seeded().await?;

    let res = common::client().post(server.url("/delete_student/999")).send().await?;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);

    let page = common::follow_flash(&server, &res).await?;
    assert_eq!(page["flash"]["level"], "warning");
    assert_eq!(page["flash"]["message"], "Student not found.");
    assert_eq!(server.count().await?, 5);

    Ok(())
}

#[tokio::test]
async fn flash_is_reported_once() -> Result<()> {
    let server = common::TestServer::spawn().await?;

    let res = common::client()
        .post(server.url("/add_student"))
        .form(&student_form("Anita Singh", "IIT Delhi", "Higher Studies"))
        .send()
        .await?;
    let cookie = common::flash_cookie(&res).expect("flash cookie");

    let page = common::client()
        .get(server.url("/"))
        .header(reqwest::header::COOKIE, cookie)
        .send()
        .await?;
    let cleared = page
        .headers()
        .get_all(reqwest::header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .any(|v| v.starts_with("flash=;") && v.contains("Max-Age=0"));
    assert!(cleared, "list view should clear the flash cookie");

    // No cookie sent back, no flash reported
    let page = common::client().get(server.url("/")).send().await?;
    let payload = page.json::<serde_json::Value>().await?;
    assert!(payload.get("flash").is_none(), "payload: {}", payload);

    Ok(())
}

#[tokio::test]
async fn blank_edit_of_unknown_student_is_404() -> Result<()> {
    let server = common::TestServer::spawn_seeded().await?;

    let res = common::client()
        .post(server.url("/edit_student/999"))
        .form(&[("student_name", "")])
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let payload = res.json::<serde_json::Value>().await?;
    assert_eq!(payload["code"], "NOT_FOUND");

    Ok(())
}

#[tokio::test]
async fn non_numeric_ids_name_no_student() -> Result<()> {
    let server = common::TestServer::spawn_seeded().await?;

    let res = common::client().get(server.url("/edit_student/abc")).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let payload = res.json::<serde_json::Value>().await?;
    assert_eq!(payload["code"], "NOT_FOUND");
    assert_eq!(payload["data"]["students"], serde_json::json!([]));

    let res = common::client()
        .post(server.url("/edit_student/abc"))
        .form(&student_form("Nobody", "Nowhere", "Employed"))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = common::client().post(server.url("/delete_student/abc")).send().await?;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(res.headers()[LOCATION], "/");

    let page = common::follow_flash(&server, &res).await?;
    assert_eq!(page["flash"]["level"], "warning");
    assert_eq!(page["flash"]["message"], "Student not found.");
    assert_eq!(server.count().await?, 5);

    Ok(())
}

#[tokio::test]
async fn non_form_body_is_treated_as_blank_submission() -> Result<()> {
    let server = common::TestServer::spawn().await?;

    let res = common::client()
        .post(server.url("/add_student"))
        .json(&serde_json::json!({ "student_name": "Rahul Sharma" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let payload = res.json::<serde_json::Value>().await?;
    assert_eq!(payload["code"], "VALIDATION_ERROR");
    assert_eq!(payload["field_errors"].as_object().map(|f| f.len()), Some(5));
    assert_eq!(server.count().await?, 0);

    Ok(())
}

#[tokio::test]
async fn storage_failure_redirects_with_error_flash() -> Result<()> {
    let server = common::TestServer::spawn().await?;
    let id = server
        .insert(StudentForm::new("Rahul Sharma", "2021-22", "BCA", "Mumbai University", "Job Seeking"))
        .await?;

    sqlx::query(
        r#"CREATE TRIGGER "reject_updates" BEFORE UPDATE ON "students"
           BEGIN SELECT RAISE(ABORT, 'updates rejected'); END"#,
    )
    .execute(server.state.database.pool())
    .await?;

    let res = common::client()
        .post(server.url(&format!("/edit_student/{}", id)))
        .form(&student_form("Rahul Sharma", "Pune University", "Employed"))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(res.headers()[LOCATION], "/");
    let cookie = common::flash_cookie(&res).unwrap_or_default();
    assert!(cookie.starts_with("flash=error:"), "cookie: {}", cookie);

    let page = common::follow_flash(&server, &res).await?;
    assert_eq!(
        page["flash"]["message"],
        "An error occurred while updating the student. Please try again."
    );

    let student = &page["data"]["students"][0];
    assert_eq!(student["college_university"], "Mumbai University");
    assert_eq!(student["current_status"], "Job Seeking");
    assert_eq!(server.count().await?, 1);

    Ok(())
}
