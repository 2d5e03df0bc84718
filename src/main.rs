use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::info;
use std::sync::Arc;

use fileshare_backend::config::Config;
use fileshare_backend::db::{self, PgMetadataStore};
use fileshare_backend::handlers;
use fileshare_backend::stores::AppContext;
use fileshare_backend::utils::s3::{create_s3_client, S3BlobStore};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env();

    let pool = db::create_pool(&config.database_url)
        .await
        .expect("Failed to connect to the metadata store");
    db::ensure_schema(&pool)
        .await
        .expect("Failed to set up the files table");

    let s3_client = create_s3_client(config.aws_region.clone()).await;

    let ctx = AppContext {
        blobs: Arc::new(S3BlobStore::new(s3_client, config.s3_bucket.clone())),
        metadata: Arc::new(PgMetadataStore::new(pool)),
    };

    info!("Starting server at {}", config.bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(ctx.clone()))
            .configure(handlers::configure_routes)
    })
    .bind(config.bind_addr.as_str())?
    .run()
    .await
}
