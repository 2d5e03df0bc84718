use actix_multipart::Multipart;
use actix_web::http::header;
use actix_web::{web, HttpResponse};
use bytes::BytesMut;
use futures_util::TryStreamExt;
use log::info;

use crate::errors::AppError;
use crate::models::file::{original_filename, FileRecord};
use crate::stores::AppContext;

pub async fn list_files(ctx: web::Data<AppContext>) -> Result<HttpResponse, AppError> {
    let records = ctx.metadata.list_all().await?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render_index(&records)))
}

pub async fn upload_file(
    ctx: web::Data<AppContext>,
    mut payload: Multipart,
) -> Result<HttpResponse, AppError> {
    let mut file: Option<(String, BytesMut)> = None;
    let mut description: Option<String> = None;

    while let Some(mut field) = payload.try_next().await? {
        match field.name() {
            "file" => {
                let filename = field
                    .content_disposition()
                    .get_filename()
                    .map(str::to_string)
                    .ok_or_else(|| {
                        AppError::MalformedInput("'file' part carries no filename".to_string())
                    })?;
                let mut content = BytesMut::new();
                while let Some(chunk) = field.try_next().await? {
                    content.extend_from_slice(&chunk);
                }
                file = Some((filename, content));
            }
            "description" => {
                let mut content = BytesMut::new();
                while let Some(chunk) = field.try_next().await? {
                    content.extend_from_slice(&chunk);
                }
                description = Some(String::from_utf8_lossy(&content).into_owned());
            }
            _ => {
                // Unknown parts are drained and ignored.
                while field.try_next().await?.is_some() {}
            }
        }
    }

    let (filename, content) =
        file.ok_or_else(|| AppError::MalformedInput("missing 'file' field".to_string()))?;
    let description = description
        .ok_or_else(|| AppError::MalformedInput("missing 'description' field".to_string()))?;

    let record = FileRecord::new(&filename, &description);

    // Blob first, then metadata: a failed put writes nothing, a failed
    // insert leaves an orphan blob. There is no compensation across the
    // two stores.
    ctx.blobs.put(&record.blob_name, content.freeze()).await?;
    ctx.metadata.insert(&record).await?;

    info!("stored '{}' as blob {}", record.filename, record.blob_name);

    Ok(HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/"))
        .finish())
}

pub async fn download_file(
    ctx: web::Data<AppContext>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let blob_name = path.into_inner();
    let filename = original_filename(&blob_name)?.to_string();

    let content = ctx.blobs.get(&blob_name).await?;

    Ok(HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, "application/octet-stream"))
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", quote_escape(&filename)),
        ))
        .body(content))
}

/// Escapes a filename for use inside an HTTP quoted-string. The name comes
/// from an untrusted storage key and may contain `"` or `\`.
fn quote_escape(name: &str) -> String {
    let mut escaped = String::with_capacity(name.len());
    for ch in name.chars() {
        if ch == '"' || ch == '\\' {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Index page: upload form plus one row per stored file. Field values are
/// untrusted and escaped before interpolation.
fn render_index(records: &[FileRecord]) -> String {
    let mut rows = String::new();
    for record in records {
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td><a href=\"/download/{}\">download</a></td></tr>\n",
            html_escape(&record.filename),
            html_escape(&record.description),
            urlencoding::encode(&record.blob_name),
        ));
    }

    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>File Share</title></head>\n<body>\n\
         <h1>Shared Files</h1>\n\
         <form action=\"/upload\" method=\"post\" enctype=\"multipart/form-data\">\n\
         <input type=\"file\" name=\"file\" required>\n\
         <input type=\"text\" name=\"description\" placeholder=\"Description\">\n\
         <button type=\"submit\">Upload</button>\n\
         </form>\n\
         <table>\n<tr><th>Filename</th><th>Description</th><th></th></tr>\n{}</table>\n\
         </body>\n</html>\n",
        rows
    )
}

fn html_escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
