use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub s3_bucket: String,
    pub aws_region: Option<String>,
    pub bind_addr: String,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            database_url: Self::get_env("DATABASE_URL"),
            s3_bucket: Self::get_env("AWS_S3_BUCKET"),
            aws_region: env::var("AWS_REGION").ok(),
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string()),
        }
    }

    fn get_env(key: &str) -> String {
        env::var(key).unwrap_or_else(|_| panic!("Environment variable {} not set", key))
    }
}
