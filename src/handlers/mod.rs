pub mod file;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(file::list_files)))
        .service(web::resource("/upload").route(web::post().to(file::upload_file)))
        .service(
            web::resource("/download/{blob_name}").route(web::get().to(file::download_file)),
        );
}
